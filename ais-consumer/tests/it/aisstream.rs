use ais_consumer::{aisstream::AisStreamClient, error::Error, models::AisPosition};
use fleetwatch_core::Mmsi;
use tokio::io::AsyncReadExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method},
};

use crate::helper::{TEST_MMSI, test_config};

#[tokio::test]
async fn test_subscribe_handshake_carries_credential_region_and_filter() {
    let server = MockServer::start().await;

    let pos = AisPosition::test_default(Some(Mmsi::test_new(TEST_MMSI)));
    let mut body = serde_json::to_string(&pos).unwrap();
    body.push('\n');

    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "APIKey": "test-key",
            "BoundingBoxes": [[[-90.0, -180.0], [90.0, 180.0]]],
            "FiltersShipMMSI": [TEST_MMSI.to_string()],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = test_config();
    config.api_key = Some("test-key".to_string());

    let client = AisStreamClient::new(
        &config,
        server.uri().parse().unwrap(),
        &[Mmsi::test_new(TEST_MMSI)],
    )
    .unwrap();

    let mut stream = client.streamer().await.unwrap();

    let mut received = String::new();
    stream.read_to_string(&mut received).await.unwrap();

    let received: AisPosition = serde_json::from_str(received.trim()).unwrap();
    assert_eq!(received.metadata.mmsi, Mmsi::test_new(TEST_MMSI));
}

#[tokio::test]
async fn test_rejected_subscription_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let mut config = test_config();
    config.api_key = Some("wrong-key".to_string());

    let client = AisStreamClient::new(&config, server.uri().parse().unwrap(), &[]).unwrap();

    let Err(error) = client.streamer().await else {
        panic!("expected streamer to fail");
    };
    assert!(matches!(error, Error::FailedRequest { .. }));
}

#[tokio::test]
async fn test_client_refuses_to_subscribe_without_credential() {
    let config = test_config();

    let error = AisStreamClient::new(&config, "http://127.0.0.1:9999".parse().unwrap(), &[])
        .unwrap_err();

    assert!(matches!(error, Error::MissingCredential { .. }));
}
