use config::{Config, File};
use serde::Deserialize;
use snafu::{ResultExt, ensure};

use crate::{
    Mmsi,
    error::{
        Result,
        error::{EmptyFleetSnafu, FleetConfigSnafu},
    },
};

/// A single fleet member as declared in the fleet file.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetMember {
    pub mmsi: Mmsi,
    pub name: String,
}

/// The set of vessels this process tracks. Loaded once at startup, the
/// store's keyspace never changes afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetConfig {
    pub vessels: Vec<FleetMember>,
}

impl FleetConfig {
    pub fn load(path: &str) -> Result<FleetConfig> {
        let fleet: FleetConfig = Config::builder()
            .add_source(File::with_name(path).required(true))
            .build()
            .context(FleetConfigSnafu { path })?
            .try_deserialize()
            .context(FleetConfigSnafu { path })?;

        ensure!(!fleet.vessels.is_empty(), EmptyFleetSnafu { path });

        Ok(fleet)
    }
}
