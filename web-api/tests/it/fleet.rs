use chrono::Utc;
use fleetwatch_core::{Freshness, Mmsi, NewVesselPosition};

use crate::helper::{get_fleet, get_fleet_raw, test_state, OTHER_MMSI, TEST_MMSI};

#[tokio::test]
async fn test_fleet_lists_configured_vessels_before_any_report() {
    let vessels = get_fleet(test_state()).await;

    assert_eq!(vessels.len(), 2);
    for vessel in &vessels {
        assert!(vessel.position.is_none());
        assert!(vessel.last_seen_at.is_none());
        assert_eq!(vessel.freshness, Freshness::Unknown);
    }
    assert_eq!(vessels[0].id, TEST_MMSI.to_string());
    assert_eq!(vessels[0].display_name, "Test Ship");
    assert_eq!(vessels[1].id, OTHER_MMSI.to_string());
}

#[tokio::test]
async fn test_fleet_reflects_an_applied_report() {
    let state = test_state();
    let t0 = Utc::now();

    let report = NewVesselPosition::test_default(Mmsi::test_new(TEST_MMSI), t0);
    state.apply_report(report.clone()).await;

    let vessels = get_fleet(state).await;

    let vessel = vessels.iter().find(|v| v.id == TEST_MMSI.to_string()).unwrap();
    assert_eq!(vessel.freshness, Freshness::Live);
    assert_eq!(vessel.last_seen_at, Some(t0));

    let position = vessel.position.unwrap();
    assert_eq!(position.latitude, report.latitude);
    assert_eq!(position.longitude, report.longitude);
    assert_eq!(position.speed_over_ground, report.speed_over_ground);
    assert_eq!(position.course_over_ground, report.course_over_ground);
}

#[tokio::test]
async fn test_fleet_is_ordered_by_mmsi() {
    let vessels = get_fleet(test_state()).await;

    let ids: Vec<&str> = vessels.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["248995000", "257000001"]);
}

#[tokio::test]
async fn test_fleet_serialises_wire_field_names() {
    let state = test_state();
    state
        .apply_report(NewVesselPosition::test_default(
            Mmsi::test_new(TEST_MMSI),
            Utc::now(),
        ))
        .await;

    let body = get_fleet_raw(state).await;

    let vessel = &body[0];
    assert_eq!(vessel["id"], "248995000");
    assert_eq!(vessel["displayName"], "Test Ship");
    assert_eq!(vessel["freshness"], "LIVE");
    assert!(vessel["lastSeenAt"].is_string());
    assert!(vessel["position"]["speedOverGround"].is_f64());
    assert!(vessel["position"]["courseOverGround"].is_f64());

    let other = &body[1];
    assert_eq!(other["freshness"], "UNKNOWN");
    assert!(other["position"].is_null());
    assert!(other["lastSeenAt"].is_null());
}
