use lectern_types::{
    Clock, Latency, LatencyProfile, ManualClock, NoLatency, Operation, SimulatedLatency,
};
use std::time::Duration;

// ── LatencyProfile ───────────────────────────────────────────────

#[test]
fn default_profile_mimics_remote_calls() {
    let profile = LatencyProfile::default();
    assert_eq!(profile.delay_for(Operation::SignIn), Duration::from_millis(500));
    assert_eq!(profile.delay_for(Operation::SignOut), Duration::from_millis(300));
    assert_eq!(profile.delay_for(Operation::Insert), Duration::from_millis(700));
    assert_eq!(profile.delay_for(Operation::Upload), Duration::from_millis(1500));
}

#[test]
fn zero_profile_has_no_delays() {
    let profile = LatencyProfile::zero();
    for op in [
        Operation::SignIn,
        Operation::SignOut,
        Operation::Select,
        Operation::Insert,
        Operation::Update,
        Operation::Delete,
        Operation::Upload,
    ] {
        assert!(profile.delay_for(op).is_zero());
    }
}

#[test]
fn profile_deserializes_with_defaults_for_missing_fields() {
    let profile: LatencyProfile = serde_json::from_str(r#"{"select_ms": 10}"#).unwrap();
    assert_eq!(profile.select_ms, 10);
    assert_eq!(profile.upload_ms, 1500);
}

// ── Latency implementations ──────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn simulated_latency_sleeps_for_profile_delay() {
    let latency = SimulatedLatency::new(LatencyProfile::default());
    let start = tokio::time::Instant::now();
    latency.pause(Operation::Upload).await;
    assert!(start.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn no_latency_resolves_immediately() {
    let start = tokio::time::Instant::now();
    NoLatency.pause(Operation::Insert).await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}

// ── ManualClock ──────────────────────────────────────────────────

#[test]
fn manual_clock_moves_only_when_told() {
    let start = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let clock = ManualClock::new(start);
    assert_eq!(clock.now(), start);

    clock.advance(chrono::Duration::seconds(90));
    assert_eq!(clock.now(), start + chrono::Duration::seconds(90));

    clock.set(start);
    assert_eq!(clock.now(), start);
}
