use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to load the fleet configuration at '{path}'"))]
    FleetConfig {
        #[snafu(implicit)]
        location: Location,
        path: String,
        source: config::ConfigError,
    },
    #[snafu(display("The fleet configuration at '{path}' contains no vessels"))]
    EmptyFleet {
        #[snafu(implicit)]
        location: Location,
        path: String,
    },
}
