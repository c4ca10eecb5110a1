use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use domain_items::ItemView;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// View applied to the body of `POST /item` responses (`ITEM_CREATED_VIEW`)
    pub created_view: ItemView,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let created_view = env_parse_or_default("ITEM_CREATED_VIEW", "without_quantity")?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            created_view,
        })
    }
}
