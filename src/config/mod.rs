mod types;

pub use types::*;

use crate::Result;
use std::{env, io::ErrorKind};
use tracing::debug;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads `CONFIG_PATH` (or `config.yaml`) and applies environment overrides.
/// A missing default file is not an error; every setting has a default.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let mut config = load_from(explicit_path.as_deref()).await?;
    config.apply_api_key(env::var(API_KEY_ENV).ok());
    Ok(config)
}

pub async fn load_from(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    match tokio::fs::read_to_string(config_path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound && path.is_none() => {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// The environment key always wins over a key from the file.
    pub fn apply_api_key(&mut self, api_key: Option<String>) {
        if let Some(api_key) = api_key {
            self.llm.api_key = api_key;
        }
    }
}
