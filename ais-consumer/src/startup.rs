use std::{
    str::FromStr,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use async_channel::{Receiver, Sender};
use fleetwatch_core::{DataMessage, FleetState};
use reqwest::Url;
use tokio::{io::AsyncRead, task::JoinSet};
use tracing::{error, instrument};

use crate::{
    aisstream::AisStreamClient,
    consumer::Consumer,
    error::Result,
    settings::{Config, SimulatorConfig},
    simulator,
};

/// Debounces reconnect attempts so that racing failure triggers collapse
/// into a single reconnect sequence.
pub(crate) struct ReconnectGuard {
    pending: AtomicBool,
}

impl ReconnectGuard {
    pub fn new() -> ReconnectGuard {
        ReconnectGuard {
            pending: AtomicBool::new(false),
        }
    }

    /// Returns true if the caller won the right to run the reconnect
    /// sequence.
    pub fn try_begin(&self) -> bool {
        !self.pending.swap(true, Ordering::SeqCst)
    }

    /// Cleared only once the next connect attempt has been launched.
    pub fn finish(&self) {
        self.pending.store(false, Ordering::SeqCst);
    }
}

pub struct App {
    consumer: Consumer,
    state: Arc<FleetState>,
    sender: Sender<DataMessage>,
    receiver: Receiver<DataMessage>,
    ais_source: Option<AisStreamClient>,
    simulator: Option<SimulatorConfig>,
    reconnect: ReconnectGuard,
    reconnect_backoff: Duration,
}

impl App {
    pub async fn build(settings: &Config, state: Arc<FleetState>) -> App {
        let (sender, receiver) = async_channel::bounded(settings.broadcast_buffer_size);

        let ais_source = match AisStreamClient::new(
            settings,
            Url::from_str(&settings.api_address).unwrap(),
            &state.mmsis().await,
        ) {
            Ok(client) => Some(client),
            // The rest of the process keeps serving whatever state exists.
            Err(e) => {
                error!("ais ingestion disabled: {e}");
                None
            }
        };

        App {
            consumer: Consumer::new(
                settings.commit_interval,
                settings.watchdog_interval,
                settings.stale_threshold,
            ),
            state,
            sender,
            receiver,
            ais_source,
            simulator: settings.simulator.clone(),
            reconnect: ReconnectGuard::new(),
            reconnect_backoff: settings.reconnect_backoff,
        }
    }

    pub async fn run(self) {
        let receiver = self.receiver.clone();
        let state = self.state.clone();

        let mut set = JoinSet::new();

        set.spawn(async move { state.consume_loop(receiver, None).await });

        if let Some(ref simulator) = self.simulator {
            let simulator = simulator.clone();
            let state = self.state.clone();
            set.spawn(async move { simulator::run(state, simulator).await });
        }

        set.spawn(async move {
            if self.ais_source.is_none() {
                std::future::pending::<()>().await;
            }
            loop {
                self.run_impl().await;
                if self.reconnect.try_begin() {
                    tokio::time::sleep(self.reconnect_backoff).await;
                    self.reconnect.finish();
                }
            }
        });

        let out = set.join_next().await;
        panic!("ais consumer loop exited unexpectedly: {out:?}");
    }

    #[instrument(skip_all)]
    async fn run_impl(&self) {
        if let Err(e) = self.run_inner().await {
            error!("consumer failed: {e:?}");
        }
    }

    async fn run_inner(&self) -> Result<()> {
        // Present whenever this loop runs, checked before entering it.
        let source = self.ais_source.as_ref().unwrap().streamer().await?;
        self.consumer.run(source, self.sender.clone()).await
    }

    pub async fn run_test(
        self,
        source: impl AsyncRead + Unpin,
        process_confirmation: tokio::sync::mpsc::Sender<()>,
    ) -> Result<()> {
        let receiver = self.receiver.clone();
        let state = self.state.clone();
        tokio::spawn(async move {
            state
                .consume_loop(receiver, Some(process_confirmation))
                .await
        });
        self.consumer.run(source, self.sender.clone()).await
    }
}
