//! Snapshot catalog configuration.

use crate::adapters::env_configs::read_var;
use crate::adapters::LOCAL_CONNECTOR_CATALOG_PATH;
use crate::domain::AppError;
use crate::ports::CatalogConfigPort;

/// Catalog configuration fixed at construction time.
///
/// Build it once at startup and pass it to whatever needs the catalog path.
/// Later changes to the environment are not observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConfigs {
    local_catalog_path: Option<String>,
}

impl StaticConfigs {
    pub fn new(local_catalog_path: Option<String>) -> Self {
        Self { local_catalog_path }
    }

    /// Capture the current process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(read_var(LOCAL_CONNECTOR_CATALOG_PATH)?))
    }
}

impl CatalogConfigPort for StaticConfigs {
    fn local_catalog_path(&self) -> Result<Option<String>, AppError> {
        Ok(self.local_catalog_path.clone())
    }
}
