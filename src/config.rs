use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Runtime configuration, overridable through `ASSET_API_*` environment
/// variables (e.g. `ASSET_API_DATABASE_PATH`, `ASSET_API_LISTEN_ADDR`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_path: PathBuf,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("assets.db"),
            listen_addr: "127.0.0.1:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(load);

fn load() -> Config {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("ASSET_API_"))
        .extract()
        .unwrap_or_else(|e| {
            // subscriber may not be installed yet, so plain stderr
            eprintln!("invalid environment configuration ({e}); using defaults");
            Config::default()
        })
}
