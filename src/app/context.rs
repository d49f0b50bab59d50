use crate::domain::CatalogPathResolver;
use crate::ports::CatalogConfigPort;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CatalogConfigPort> {
    resolver: CatalogPathResolver<C>,
}

impl<C: CatalogConfigPort> AppContext<C> {
    /// Create a new application context around a configuration source.
    pub fn new(config: C) -> Self {
        Self { resolver: CatalogPathResolver::new(config) }
    }

    /// Get a reference to the catalog path resolver.
    pub fn resolver(&self) -> &CatalogPathResolver<C> {
        &self.resolver
    }
}
