//! Demo fallback that manufactures moving positions for the configured fleet
//! while the real feed is silent. Plugged in behind the same report
//! interface as the feed itself, and stands down as soon as genuine data
//! resumes.

use std::sync::Arc;

use chrono::Utc;
use fleetwatch_core::{FleetState, NewVesselPosition};
use tracing::debug;

use crate::settings::SimulatorConfig;

pub async fn run(state: Arc<FleetState>, settings: SimulatorConfig) {
    let mut interval = tokio::time::interval(settings.interval);
    let started = tokio::time::Instant::now();

    loop {
        interval.tick().await;

        let now = Utc::now();
        let silent = match state.last_feed_report().await {
            None => true,
            Some(last) => {
                (now - last).to_std().unwrap_or_default() > settings.silence_threshold
            }
        };
        if !silent {
            continue;
        }

        debug!("feed silent, emitting synthetic positions");

        let elapsed = started.elapsed().as_secs_f64();
        for (i, mmsi) in state.mmsis().await.into_iter().enumerate() {
            let phase = elapsed / 60.0 + i as f64;
            state
                .apply_report(NewVesselPosition {
                    mmsi,
                    latitude: settings.base_latitude + phase.sin() * 0.05,
                    longitude: settings.base_longitude + phase.cos() * 0.05,
                    speed_over_ground: 14.0,
                    course_over_ground: elapsed % 360.0,
                    msgtime: now,
                })
                .await;
        }
    }
}
