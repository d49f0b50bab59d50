//! Environment-backed catalog configuration.

use std::env::{self, VarError};

use crate::domain::AppError;
use crate::ports::CatalogConfigPort;

/// Environment variable holding a custom local catalog path.
pub const LOCAL_CONNECTOR_CATALOG_PATH: &str = "LOCAL_CONNECTOR_CATALOG_PATH";

/// Reads catalog configuration from the process environment on every lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigs;

impl EnvConfigs {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogConfigPort for EnvConfigs {
    fn local_catalog_path(&self) -> Result<Option<String>, AppError> {
        read_var(LOCAL_CONNECTOR_CATALOG_PATH)
    }
}

pub(crate) fn read_var(key: &str) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            Err(AppError::config_error(format!("{key} is set but is not valid unicode")))
        }
    }
}
