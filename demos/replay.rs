//! Replay a walk towards Gangnam Station through the tracker.
//!
//! Run with `cargo run --example replay`, optionally with a config file:
//! `cargo run --example replay -- path/to/tfence.toml`.
//! Set `RUST_LOG=debug` to see every processed fix.

use chrono::{Duration, Utc};
use tfence::config::ProximityConfig;
use tfence::geo::{destination, Sample};
use tfence::tracker::{
    AuthorizationStatus, LogNotifier, PositioningEvent, PositioningFailure, TrackerBuilder,
};
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ProximityConfig::from_file(path)?,
        None => ProximityConfig::default(),
    };
    let region = config.region();
    info!(
        center = %region.center(),
        radius_m = region.radius_meters(),
        "config_loaded"
    );

    let mut tracker = TrackerBuilder::from_config(&config)
        .notifier(LogNotifier)
        .build()?;
    let feed = tracker.feed();

    let start = Utc::now();
    let mut events = vec![PositioningEvent::Authorization(
        AuthorizationStatus::AuthorizedAlways,
    )];
    for (i, meters) in [12_000.0, 3_000.0, 600.0, 300.0, 200.0].iter().enumerate() {
        let at = start + Duration::seconds(30 * i as i64);
        events.push(Sample::new(destination(region.center(), 200.0, *meters), at).into());
        if i == 3 {
            events.push(PositioningFailure::SignalLost.into());
        }
    }

    for event in events {
        if let Some(entered) = tracker.handle(event)? {
            info!(distance_m = entered.distance_meters, "entry event");
        }
        if let Some(reading) = feed.reading() {
            info!(
                distance = %reading.distance_label(),
                state = ?feed.monitor_state(),
                "display"
            );
        }
    }

    tracker.stop();
    Ok(())
}
