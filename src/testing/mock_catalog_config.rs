use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::ports::CatalogConfigPort;

/// In-memory catalog configuration that counts lookups.
#[derive(Debug, Default)]
pub struct MockCatalogConfig {
    path: Option<String>,
    failure: Option<String>,
    lookups: AtomicUsize,
}

impl MockCatalogConfig {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: Some(path.into()), ..Self::default() }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl CatalogConfigPort for MockCatalogConfig {
    fn local_catalog_path(&self) -> Result<Option<String>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(AppError::config_error(message.clone())),
            None => Ok(self.path.clone()),
        }
    }
}
