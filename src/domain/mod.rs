pub mod catalog_paths;
pub mod error;

pub use catalog_paths::{
    CatalogPathResolver, CatalogPaths, DEFAULT_LOCAL_CONNECTOR_CATALOG,
    LOCAL_CONNECTOR_CATALOG_FILE_NAME,
};
pub use error::AppError;
