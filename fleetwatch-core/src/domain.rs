use std::{fmt::Display, num::ParseIntError, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maritime Mobile Service Identity, the stable key of a tracked vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct Mmsi(i32);

/// How recently a vessel has reported, independent of its last known
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum Freshness {
    /// No report has ever been accepted for the vessel.
    Unknown,
    /// A position report arrived within the memory horizon.
    Live,
    /// The vessel has reported at some point, but not recently.
    Recent,
}

/// Last known kinematic state of a vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VesselPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub speed_over_ground: f64,
    pub course_over_ground: f64,
}

/// A decoded position report ready to be applied to the store.
#[derive(Debug, Clone)]
pub struct NewVesselPosition {
    pub mmsi: Mmsi,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_over_ground: f64,
    pub course_over_ground: f64,
    pub msgtime: DateTime<Utc>,
}

/// A decoded static/identity report. Confirms presence of a vessel without
/// carrying an active position fix.
#[derive(Debug, Clone)]
pub struct NewVesselStatic {
    pub mmsi: Mmsi,
    pub msgtime: DateTime<Utc>,
    pub name: Option<String>,
    pub call_sign: Option<String>,
    pub destination: Option<String>,
    pub imo_number: Option<i32>,
    pub ship_type: Option<i32>,
}

/// One commit interval worth of decoded feed messages.
#[derive(Debug, Clone, Default)]
pub struct DataMessage {
    pub positions: Vec<NewVesselPosition>,
    pub static_messages: Vec<NewVesselStatic>,
}

/// A configured fleet member together with its last observed state.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedVessel {
    pub mmsi: Mmsi,
    pub name: String,
    pub position: Option<VesselPosition>,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub freshness: Freshness,
}

impl DataMessage {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.static_messages.is_empty()
    }
}

impl Mmsi {
    pub fn into_inner(self) -> i32 {
        self.0
    }
}

impl FromStr for Mmsi {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<Mmsi> for i32 {
    fn from(value: Mmsi) -> Self {
        value.0
    }
}

impl Display for Mmsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&NewVesselPosition> for VesselPosition {
    fn from(value: &NewVesselPosition) -> Self {
        VesselPosition {
            latitude: value.latitude,
            longitude: value.longitude,
            speed_over_ground: value.speed_over_ground,
            course_over_ground: value.course_over_ground,
        }
    }
}

#[cfg(feature = "test")]
mod test {
    use chrono::{DateTime, Utc};
    use rand::random;

    use super::*;

    impl Mmsi {
        pub fn test_new(mmsi: i32) -> Self {
            Self(mmsi)
        }
    }

    impl NewVesselPosition {
        pub fn test_default(mmsi: Mmsi, time: DateTime<Utc>) -> NewVesselPosition {
            NewVesselPosition {
                mmsi,
                latitude: random::<f64>() * 90.0,
                longitude: random::<f64>() * 180.0,
                speed_over_ground: 12.0,
                course_over_ground: 180.0,
                msgtime: time,
            }
        }
    }

    impl NewVesselStatic {
        pub fn test_default(mmsi: Mmsi, time: DateTime<Utc>) -> NewVesselStatic {
            NewVesselStatic {
                mmsi,
                msgtime: time,
                name: Some("sjarken".to_string()),
                call_sign: Some("LK45".to_string()),
                destination: Some("LIVORNO".to_string()),
                imo_number: Some(123),
                ship_type: Some(60),
            }
        }
    }
}
