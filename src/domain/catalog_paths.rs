//! Local connector catalog path resolution.
//!
//! Reads may be redirected to an operator-supplied catalog for local testing.
//! Writes always target the bundled default so a custom catalog file is never
//! overwritten.

use serde::Serialize;

use crate::domain::AppError;
use crate::ports::CatalogConfigPort;

/// File name of the bundled connector catalog.
pub const LOCAL_CONNECTOR_CATALOG_FILE_NAME: &str = "oss_catalog.json";

/// Resource-relative path of the bundled connector catalog.
pub const DEFAULT_LOCAL_CONNECTOR_CATALOG: &str = "seed/oss_catalog.json";

/// Resolved read and write locations for the local catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPaths {
    pub read_path: String,
    pub write_path: String,
    /// True when `read_path` comes from an override rather than the default.
    pub overridden: bool,
}

/// Resolves catalog paths against an injected configuration source.
#[derive(Debug, Clone)]
pub struct CatalogPathResolver<C: CatalogConfigPort> {
    config: C,
}

impl<C: CatalogConfigPort> CatalogPathResolver<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Path the catalog should be read from.
    ///
    /// Returns the configured override when one is set, otherwise
    /// [`DEFAULT_LOCAL_CONNECTOR_CATALOG`]. The path is not checked for existence.
    pub fn read_path(&self) -> Result<String, AppError> {
        Ok(self.resolve_override()?.unwrap_or_else(|| DEFAULT_LOCAL_CONNECTOR_CATALOG.to_string()))
    }

    /// Path the catalog should be written to. Never reflects an override.
    pub fn write_path(&self) -> &'static str {
        DEFAULT_LOCAL_CONNECTOR_CATALOG
    }

    /// Both paths plus whether the read path was overridden.
    pub fn paths(&self) -> Result<CatalogPaths, AppError> {
        let custom = self.resolve_override()?;
        let overridden = custom.is_some();
        Ok(CatalogPaths {
            read_path: custom.unwrap_or_else(|| DEFAULT_LOCAL_CONNECTOR_CATALOG.to_string()),
            write_path: self.write_path().to_string(),
            overridden,
        })
    }

    fn resolve_override(&self) -> Result<Option<String>, AppError> {
        match normalize_override(self.config.local_catalog_path()?) {
            Some(path) => {
                tracing::debug!(path = %path, "using custom local connector catalog");
                Ok(Some(path))
            }
            None => {
                tracing::trace!(
                    path = DEFAULT_LOCAL_CONNECTOR_CATALOG,
                    "no catalog override configured"
                );
                Ok(None)
            }
        }
    }
}

/// An empty override counts as unset; anything else is kept verbatim.
fn normalize_override(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}
