mod env_configs;
mod static_configs;

pub use env_configs::{EnvConfigs, LOCAL_CONNECTOR_CATALOG_PATH};
pub use static_configs::StaticConfigs;
