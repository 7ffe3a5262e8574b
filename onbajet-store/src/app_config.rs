use serde::Deserialize;
use std::env;
use std::path::Path;

use onbajet_deals::{DealPreferences, TravelConfig, TravelPreferences};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Starting values for a viewer's search controls.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub travel: TravelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON file holding an array of menu items. The built-in mock catalog
    /// is served when unset.
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub deals: DealPreferences,
    #[serde(default)]
    pub travel: TravelPreferences,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layer `default`, `{RUN_MODE}` and `local` files from `dir`, then
    /// `ONBAJET__*` environment variables (e.g. `ONBAJET__SERVER__PORT=9000`).
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let layer = |name: &str| dir.join(name).to_string_lossy().into_owned();

        let s = config::Config::builder()
            .add_source(config::File::with_name(&layer("default")).required(false))
            .add_source(config::File::with_name(&layer(&run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&layer("local")).required(false))
            .add_source(config::Environment::with_prefix("ONBAJET").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
