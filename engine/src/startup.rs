use std::{sync::Arc, time::Duration};

use fleetwatch_core::{FleetConfig, FleetState};
use tokio::task::JoinSet;
use tracing::info;

use crate::settings::Settings;

pub struct App {
    state: Arc<FleetState>,
    sweep_interval: Duration,
    consumer: ais_consumer::startup::App,
    server: web_api::startup::App,
}

impl App {
    pub async fn build(settings: &Settings) -> App {
        let fleet = FleetConfig::load(&settings.fleet_path).unwrap();
        info!("tracking {} vessels", fleet.vessels.len());

        let state = Arc::new(FleetState::new(&fleet, settings.state.memory_horizon));

        let consumer = ais_consumer::startup::App::build(&settings.consumer, state.clone()).await;
        let server =
            web_api::startup::App::build(&settings.api, settings.environment, state.clone());

        App {
            state,
            sweep_interval: settings.state.sweep_interval,
            consumer,
            server,
        }
    }

    pub async fn run(self) {
        let App {
            state,
            sweep_interval,
            consumer,
            server,
        } = self;

        let mut set = JoinSet::new();

        set.spawn(async move { state.sweep_loop(sweep_interval).await });
        set.spawn(async move { consumer.run().await });
        set.spawn(async move { server.run().await.unwrap() });

        let out = set.join_next().await;
        panic!("fleetwatch task exited unexpectedly: {out:?}");
    }
}
