pub mod api;
pub mod log;

use crate::config::api::Api;
use config;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    logger: log::Config,
}

impl AppConfig {
    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn logger(&self) -> &log::Config {
        &self.logger
    }
}

/// Loads a `.env` file for the current run mode, if one exists.
pub fn load_dotenv() {
    let env_filename = env::var("RUN_MODE")
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|_| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// Loads `config/{RUN_MODE}.json` with environment variables layered on top.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let env = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
    let config = config::Config::builder()
        .add_source(config::File::with_name(&format!("config/{}.json", env)))
        .add_source(config::Environment::default().separator("__"))
        .build()?;

    config.try_deserialize()
}
