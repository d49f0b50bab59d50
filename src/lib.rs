//! catalog-path: locate the local connector catalog.
//!
//! Reads honor the `LOCAL_CONNECTOR_CATALOG_PATH` override so developers can
//! test catalog changes locally. Writes always go to the bundled default.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use adapters::{EnvConfigs, LOCAL_CONNECTOR_CATALOG_PATH, StaticConfigs};
pub use domain::{
    AppError, CatalogPathResolver, CatalogPaths, DEFAULT_LOCAL_CONNECTOR_CATALOG,
    LOCAL_CONNECTOR_CATALOG_FILE_NAME,
};
pub use ports::CatalogConfigPort;

/// Path to the local connector catalog.
///
/// The environment is consulted on every call, so a changed override is
/// picked up immediately.
pub fn local_connector_catalog_path() -> Result<String, AppError> {
    CatalogPathResolver::new(EnvConfigs::new()).read_path()
}

/// Resource-relative path used when writing the local connector catalog.
///
/// Always the default, even when a custom read path is configured.
pub fn local_catalog_write_path() -> &'static str {
    DEFAULT_LOCAL_CONNECTOR_CATALOG
}

/// Read path, write path, and override state in one lookup.
pub fn catalog_paths() -> Result<CatalogPaths, AppError> {
    CatalogPathResolver::new(EnvConfigs::new()).paths()
}
