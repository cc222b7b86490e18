#![deny(warnings)]
#![deny(rust_2018_idioms)]

use config::{Config, File};
use engine::settings::Settings;
use fleetwatch_core::FleetConfig;

fn assert_valid(file: &str, environment: &str) {
    Config::builder()
        .add_source(File::with_name(file).required(true))
        .set_override("environment", environment)
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap();
}

#[test]
fn test_local_settings_are_valid() {
    assert_valid("config/local.yml", "Local");
}

#[test]
fn test_development_settings_are_valid() {
    assert_valid("config/development.yml", "Development");
}

#[test]
fn test_production_settings_are_valid() {
    assert_valid("config/production.yml", "Production");
}

#[test]
fn test_fleet_file_is_valid() {
    let fleet = FleetConfig::load("config/fleet").unwrap();
    assert!(!fleet.vessels.is_empty());
}
