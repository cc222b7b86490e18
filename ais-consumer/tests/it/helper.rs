use std::{sync::Arc, time::Duration};

use ais_consumer::{
    models::{AisPosition, AisStatic},
    settings::Config,
    startup::App,
};
use fleetwatch_core::{FleetConfig, FleetMember, FleetState, Mmsi};
use futures::{Future, TryStreamExt};
use tokio_stream::wrappers::ReceiverStream;

pub const TEST_MMSI: i32 = 248995000;

pub struct TestHelper {
    pub ais_source: AisSource,
    pub state: Arc<FleetState>,
    pub process_confirmation: tokio::sync::mpsc::Receiver<()>,
}

pub struct AisSource {
    out: tokio::sync::mpsc::Sender<Result<String, std::io::Error>>,
}

pub fn test_config() -> Config {
    Config {
        api_address: "http://127.0.0.1:9999".to_string(),
        api_key: None,
        commit_interval: Duration::from_millis(5),
        watchdog_interval: Duration::from_secs(60),
        stale_threshold: Duration::from_secs(300),
        reconnect_backoff: Duration::from_millis(10),
        broadcast_buffer_size: 10,
        bounding_box: None,
        simulator: None,
    }
}

pub fn test_fleet() -> FleetConfig {
    FleetConfig {
        vessels: vec![FleetMember {
            mmsi: Mmsi::test_new(TEST_MMSI),
            name: "Test Ship".to_string(),
        }],
    }
}

pub async fn test<T, Fut>(test_closure: T)
where
    T: FnOnce(TestHelper) -> Fut,
    Fut: Future<Output = ()>,
{
    let state = Arc::new(FleetState::new(
        &test_fleet(),
        Duration::from_secs(12 * 60 * 60),
    ));

    let app = App::build(&test_config(), state.clone()).await;

    let (confirmation_sender, confirmation_receiver) = tokio::sync::mpsc::channel(100);
    let (sender, receiver) = tokio::sync::mpsc::channel(100);

    let receiver_stream = ReceiverStream::new(receiver);
    let compat =
        tokio_util::compat::FuturesAsyncReadCompatExt::compat(receiver_stream.into_async_read());

    tokio::spawn(app.run_test(compat, confirmation_sender));

    let helper = TestHelper {
        ais_source: AisSource { out: sender },
        state,
        process_confirmation: confirmation_receiver,
    };

    test_closure(helper).await;
}

impl AisSource {
    pub async fn send_position(&self, position: &AisPosition) {
        let string = serde_json::to_string(position).unwrap();
        self.send_string(string).await
    }

    pub async fn send_static(&self, static_message: &AisStatic) {
        let string = serde_json::to_string(static_message).unwrap();
        self.send_string(string).await
    }

    pub async fn send_raw(&self, frame: &str) {
        self.send_string(frame.to_string()).await
    }

    async fn send_string(&self, mut val: String) {
        val.push('\n');
        self.out.send(Ok(val)).await.unwrap();
    }
}
