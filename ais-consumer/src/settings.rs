use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_address: String,
    /// The aisstream.io credential. Supplied through the environment, never
    /// through config files.
    pub api_key: Option<String>,
    #[serde(with = "humantime_serde")]
    pub commit_interval: Duration,
    #[serde(with = "humantime_serde")]
    pub watchdog_interval: Duration,
    /// How long the stream may stay quiet before the watchdog tears it down.
    #[serde(with = "humantime_serde")]
    pub stale_threshold: Duration,
    #[serde(with = "humantime_serde")]
    pub reconnect_backoff: Duration,
    pub broadcast_buffer_size: usize,
    /// Narrows the subscription region, defaults to the full coordinate
    /// space.
    pub bounding_box: Option<[[f64; 2]; 2]>,
    pub simulator: Option<SimulatorConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    /// How long the real feed must stay silent before synthetic data kicks
    /// in.
    #[serde(with = "humantime_serde")]
    pub silence_threshold: Duration,
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
    pub base_latitude: f64,
    pub base_longitude: f64,
}
