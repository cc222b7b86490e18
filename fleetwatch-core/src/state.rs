use std::{collections::BTreeMap, time::Duration};

use async_channel::Receiver;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{Level, event};

use crate::{
    DataMessage, FleetConfig, Freshness, Mmsi, NewVesselPosition, NewVesselStatic, TrackedVessel,
    VesselPosition,
};

/// Authoritative in-memory view of the configured fleet.
///
/// The keyspace is fixed at construction and reports for vessels outside it
/// are discarded. Writers hold the lock for the duration of a single update
/// only, readers copy the table out.
pub struct FleetState {
    vessels: RwLock<BTreeMap<Mmsi, TrackedVessel>>,
    last_feed_report: RwLock<Option<DateTime<Utc>>>,
    memory_horizon: Duration,
}

impl FleetState {
    pub fn new(fleet: &FleetConfig, memory_horizon: Duration) -> FleetState {
        let vessels = fleet
            .vessels
            .iter()
            .map(|m| {
                (
                    m.mmsi,
                    TrackedVessel {
                        mmsi: m.mmsi,
                        name: m.name.clone(),
                        position: None,
                        last_seen_at: None,
                        freshness: Freshness::Unknown,
                    },
                )
            })
            .collect();

        FleetState {
            vessels: RwLock::new(vessels),
            last_feed_report: RwLock::new(None),
            memory_horizon,
        }
    }

    /// Applies a position report. The position, timestamp and freshness of
    /// the vessel are replaced as one update, a reader never observes a
    /// partially applied report.
    pub async fn apply_report(&self, report: NewVesselPosition) {
        let mut vessels = self.vessels.write().await;

        let Some(vessel) = vessels.get_mut(&report.mmsi) else {
            event!(
                Level::DEBUG,
                "discarding position report for untracked mmsi {}",
                report.mmsi
            );
            return;
        };

        vessel.position = Some(VesselPosition::from(&report));
        vessel.last_seen_at = Some(report.msgtime);
        vessel.freshness = Freshness::Live;
    }

    /// Applies a static/identity report. Confirms presence of a vessel that
    /// has never been seen, but does not count as an active fix and never
    /// yields a `Live` classification.
    pub async fn apply_static(&self, message: NewVesselStatic) {
        let mut vessels = self.vessels.write().await;

        let Some(vessel) = vessels.get_mut(&message.mmsi) else {
            event!(
                Level::DEBUG,
                "discarding static message for untracked mmsi {}",
                message.mmsi
            );
            return;
        };

        if vessel.last_seen_at.is_none() {
            vessel.last_seen_at = Some(message.msgtime);
            vessel.freshness = Freshness::Recent;
        }
    }

    /// Returns a point-in-time copy of all tracked vessels, ordered by mmsi.
    pub async fn snapshot(&self) -> Vec<TrackedVessel> {
        self.vessels.read().await.values().cloned().collect()
    }

    /// Demotes vessels whose last report is older than the memory horizon
    /// from `Live` to `Recent`. Classification only, the last known position
    /// and timestamp are kept for display.
    pub async fn sweep(&self, now: DateTime<Utc>) {
        let mut vessels = self.vessels.write().await;

        for vessel in vessels.values_mut() {
            if vessel.freshness != Freshness::Live {
                continue;
            }
            let Some(last_seen_at) = vessel.last_seen_at else {
                continue;
            };

            let age = (now - last_seen_at).to_std().unwrap_or_default();
            if age > self.memory_horizon {
                vessel.freshness = Freshness::Recent;
            }
        }
    }

    pub async fn sweep_loop(&self, interval: Duration) {
        let mut interval = tokio::time::interval(interval);
        loop {
            interval.tick().await;
            self.sweep(Utc::now()).await;
        }
    }

    /// When the real feed last produced a non-empty batch. `None` if it never
    /// has. Synthetic data does not count.
    pub async fn last_feed_report(&self) -> Option<DateTime<Utc>> {
        *self.last_feed_report.read().await
    }

    pub async fn mmsis(&self) -> Vec<Mmsi> {
        self.vessels.read().await.keys().copied().collect()
    }

    /// Applies batches of decoded feed messages until the channel closes.
    pub async fn consume_loop(
        &self,
        receiver: Receiver<DataMessage>,
        process_confirmation: Option<tokio::sync::mpsc::Sender<()>>,
    ) {
        while let Ok(message) = receiver.recv().await {
            if !message.is_empty() {
                *self.last_feed_report.write().await = Some(Utc::now());
            }

            for position in message.positions {
                self.apply_report(position).await;
            }
            for static_message in message.static_messages {
                self.apply_static(static_message).await;
            }

            if let Some(ref confirmation) = process_confirmation {
                // Can only fail if the test driving this loop has completed.
                let _ = confirmation.send(()).await;
            }
        }
    }
}
