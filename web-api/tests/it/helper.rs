use std::{sync::Arc, time::Duration};

use actix_web::{test, web, web::Data, App};
use fleetwatch_core::{FleetConfig, FleetMember, FleetState, Mmsi};
use web_api::routes::{self, v1::fleet::Vessel};

pub const TEST_MMSI: i32 = 248995000;
pub const OTHER_MMSI: i32 = 257000001;

pub fn test_state() -> Arc<FleetState> {
    Arc::new(FleetState::new(
        &FleetConfig {
            vessels: vec![
                FleetMember {
                    mmsi: Mmsi::test_new(OTHER_MMSI),
                    name: "Other Ship".to_string(),
                },
                FleetMember {
                    mmsi: Mmsi::test_new(TEST_MMSI),
                    name: "Test Ship".to_string(),
                },
            ],
        },
        Duration::from_secs(12 * 60 * 60),
    ))
}

pub async fn get_fleet(state: Arc<FleetState>) -> Vec<Vessel> {
    let app = test::init_service(
        App::new()
            .app_data(Data::from(state))
            .route("/fleet", web::get().to(routes::v1::fleet::fleet)),
    )
    .await;

    let req = test::TestRequest::get().uri("/fleet").to_request();
    test::call_and_read_body_json(&app, req).await
}

pub async fn get_fleet_raw(state: Arc<FleetState>) -> serde_json::Value {
    let app = test::init_service(
        App::new()
            .app_data(Data::from(state))
            .route("/fleet", web::get().to(routes::v1::fleet::fleet)),
    )
    .await;

    let req = test::TestRequest::get().uri("/fleet").to_request();
    let body = test::call_and_read_body(&app, req).await;
    serde_json::from_slice(&body).unwrap()
}
