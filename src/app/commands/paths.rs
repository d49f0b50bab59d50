//! Catalog path commands.

use crate::app::AppContext;
use crate::domain::{AppError, CatalogPaths, DEFAULT_LOCAL_CONNECTOR_CATALOG};
use crate::ports::CatalogConfigPort;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowFormat {
    #[default]
    Text,
    /// Compact single-line JSON.
    Json,
}

/// Path the local catalog is read from.
pub fn read<C: CatalogConfigPort>(ctx: &AppContext<C>) -> Result<String, AppError> {
    ctx.resolver().read_path()
}

/// Path the local catalog is written to. Needs no configuration.
pub fn write() -> &'static str {
    DEFAULT_LOCAL_CONNECTOR_CATALOG
}

/// Render both catalog paths.
pub fn show<C: CatalogConfigPort>(
    ctx: &AppContext<C>,
    format: ShowFormat,
) -> Result<String, AppError> {
    let paths = ctx.resolver().paths()?;
    match format {
        ShowFormat::Text => Ok(render_text(&paths)),
        ShowFormat::Json => serde_json::to_string(&paths).map_err(|e| AppError::Serialization {
            what: "catalog paths".into(),
            details: e.to_string(),
        }),
    }
}

fn render_text(paths: &CatalogPaths) -> String {
    let source = if paths.overridden { "override" } else { "default" };
    format!("read:  {} ({})\nwrite: {}", paths.read_path, source, paths.write_path)
}
