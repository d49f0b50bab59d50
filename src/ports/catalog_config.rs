//! Catalog configuration port definition.

use crate::domain::AppError;

/// Source of the operator-supplied catalog location.
pub trait CatalogConfigPort {
    /// Custom local catalog path, if one has been configured.
    ///
    /// How the value is loaded is up to the implementation. Errors raised
    /// while loading are surfaced to callers unchanged.
    fn local_catalog_path(&self) -> Result<Option<String>, AppError>;
}

impl<T: CatalogConfigPort + ?Sized> CatalogConfigPort for &T {
    fn local_catalog_path(&self) -> Result<Option<String>, AppError> {
        (**self).local_catalog_path()
    }
}
