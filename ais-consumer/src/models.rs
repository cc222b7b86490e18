use chrono::{DateTime, Utc};
use fleetwatch_core::{Mmsi, NewVesselPosition, NewVesselStatic};
use serde::{Deserialize, Serialize};

/// Convenience struct to deserialize the message type prior to attempting to
/// deserialize the full message.
#[derive(Deserialize)]
pub struct MessageType {
    /// What type of message this is.
    #[serde(rename = "MessageType")]
    pub message_type: AisMessageType,
}

/// The aisstream.io message types we support. Everything else is dropped
/// after the type probe.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub enum AisMessageType {
    /// A message containing position data.
    PositionReport,
    /// A message containing vessel related data.
    ShipStaticData,
    #[serde(other)]
    Unsupported,
}

/// Feed metadata attached to every message.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetaData {
    #[serde(rename = "MMSI")]
    pub mmsi: Mmsi,
    #[serde(rename = "ShipName")]
    pub ship_name: Option<String>,
}

/// Position data emitted every few seconds by vessels under way.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisPosition {
    #[serde(rename = "MessageType")]
    pub message_type: AisMessageType,
    #[serde(rename = "MetaData")]
    pub metadata: MetaData,
    #[serde(rename = "Message")]
    pub message: PositionMessage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionMessage {
    #[serde(rename = "PositionReport")]
    pub position_report: PositionReport,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionReport {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Sog", default)]
    pub speed_over_ground: f64,
    #[serde(rename = "Cog", default)]
    pub course_over_ground: f64,
}

/// Vessel related data that is emitted every few minutes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisStatic {
    #[serde(rename = "MessageType")]
    pub message_type: AisMessageType,
    #[serde(rename = "MetaData")]
    pub metadata: MetaData,
    #[serde(rename = "Message")]
    pub message: StaticMessage,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticMessage {
    #[serde(rename = "ShipStaticData")]
    pub ship_static_data: ShipStaticData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShipStaticData {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "CallSign")]
    pub call_sign: Option<String>,
    #[serde(rename = "Destination")]
    pub destination: Option<String>,
    #[serde(rename = "ImoNumber")]
    pub imo_number: Option<i32>,
    #[serde(rename = "Type")]
    pub ship_type: Option<i32>,
}

pub enum AisMessage {
    Static(AisStatic),
    Position(AisPosition),
}

impl AisPosition {
    /// The feed's own `time_utc` metadata is in a nonstandard format, the
    /// time of ingestion is authoritative for recency.
    pub fn into_new_position(self, msgtime: DateTime<Utc>) -> NewVesselPosition {
        let AisPosition {
            message_type: _,
            metadata,
            message,
        } = self;

        let PositionReport {
            latitude,
            longitude,
            speed_over_ground,
            course_over_ground,
        } = message.position_report;

        NewVesselPosition {
            mmsi: metadata.mmsi,
            latitude,
            longitude,
            speed_over_ground,
            course_over_ground,
            msgtime,
        }
    }
}

impl AisStatic {
    pub fn into_new_static(self, msgtime: DateTime<Utc>) -> NewVesselStatic {
        let AisStatic {
            message_type: _,
            metadata,
            message,
        } = self;

        let ShipStaticData {
            name,
            call_sign,
            destination,
            imo_number,
            ship_type,
        } = message.ship_static_data;

        NewVesselStatic {
            mmsi: metadata.mmsi,
            msgtime,
            name: name.or(metadata.ship_name),
            call_sign,
            destination,
            imo_number,
            ship_type,
        }
    }
}

#[cfg(feature = "test")]
mod test {
    use rand::random;

    use super::*;

    impl AisPosition {
        pub fn test_default(mmsi: Option<Mmsi>) -> AisPosition {
            AisPosition {
                message_type: AisMessageType::PositionReport,
                metadata: MetaData {
                    mmsi: mmsi.unwrap_or_else(|| Mmsi::test_new(random::<i32>().abs())),
                    ship_name: Some("sjarken".to_string()),
                },
                message: PositionMessage {
                    position_report: PositionReport {
                        latitude: 43.30,
                        longitude: 10.50,
                        speed_over_ground: 12.0,
                        course_over_ground: 180.0,
                    },
                },
            }
        }
    }

    impl AisStatic {
        pub fn test_default(mmsi: Option<Mmsi>) -> AisStatic {
            AisStatic {
                message_type: AisMessageType::ShipStaticData,
                metadata: MetaData {
                    mmsi: mmsi.unwrap_or_else(|| Mmsi::test_new(random::<i32>().abs())),
                    ship_name: Some("sjarken".to_string()),
                },
                message: StaticMessage {
                    ship_static_data: ShipStaticData {
                        name: Some("sjarken".to_string()),
                        call_sign: Some("LK45".to_string()),
                        destination: Some("LIVORNO".to_string()),
                        imo_number: Some(123),
                        ship_type: Some(60),
                    },
                },
            }
        }
    }
}
