use actix_web::web;
use chrono::{DateTime, Utc};
use fleetwatch_core::{FleetState, Freshness, TrackedVessel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::response::Response;

#[utoipa::path(
    get,
    path = "/fleet",
    responses(
        (status = 200, description = "a consistent snapshot of all tracked vessels", body = [Vessel]),
    )
)]
pub async fn fleet(state: web::Data<FleetState>) -> Response<Vec<Vessel>> {
    Response::new(
        state
            .snapshot()
            .await
            .into_iter()
            .map(Vessel::from)
            .collect(),
    )
}

/// A tracked vessel as exposed on the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    pub id: String,
    pub display_name: String,
    pub position: Option<VesselPosition>,
    pub last_seen_at: Option<DateTime<Utc>>,
    pub freshness: Freshness,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VesselPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub speed_over_ground: f64,
    pub course_over_ground: f64,
}

impl From<TrackedVessel> for Vessel {
    fn from(value: TrackedVessel) -> Self {
        Vessel {
            id: value.mmsi.to_string(),
            display_name: value.name,
            position: value.position.map(VesselPosition::from),
            last_seen_at: value.last_seen_at,
            freshness: value.freshness,
        }
    }
}

impl From<fleetwatch_core::VesselPosition> for VesselPosition {
    fn from(value: fleetwatch_core::VesselPosition) -> Self {
        VesselPosition {
            latitude: value.latitude,
            longitude: value.longitude,
            speed_over_ground: value.speed_over_ground,
            course_over_ground: value.course_over_ground,
        }
    }
}
