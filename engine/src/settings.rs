use std::time::Duration;

use config::{Config, ConfigError, File};
use fleetwatch_core::Environment;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub fleet_path: String,
    pub state: StateSettings,
    pub consumer: ais_consumer::settings::Config,
    pub api: web_api::settings::Config,
}

#[derive(Debug, Deserialize)]
pub struct StateSettings {
    /// How old a vessel's last report may grow before it is no longer
    /// considered actively tracked.
    #[serde(with = "humantime_serde")]
    pub memory_horizon: Duration,
    #[serde(with = "humantime_serde")]
    pub sweep_interval: Duration,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap()
            .parse()
            .expect("failed to parse APP_ENVIRONMENT");

        Config::builder()
            .add_source(
                File::with_name(&format!("config/{}", environment.as_ref().to_lowercase()))
                    .required(true),
            )
            .add_source(config::Environment::with_prefix("FLEETWATCH").separator("__"))
            .set_override("environment", environment.as_ref())?
            .build()?
            .try_deserialize()
    }
}
