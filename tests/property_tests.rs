//! Property-based tests for distance math and the region monitor.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tfence::core::MonitorState;
use tfence::geo::{destination, distance, Coordinate, Region, Sample, EARTH_RADIUS_M};
use tfence::monitor::RegionMonitor;

prop_compose! {
    fn arbitrary_coordinate()(
        latitude in -90.0..=90.0f64,
        longitude in -180.0..=180.0f64,
    ) -> Coordinate {
        Coordinate::new(latitude, longitude)
    }
}

prop_compose! {
    // Away from the poles so that bearings are well defined.
    fn mid_latitude_coordinate()(
        latitude in -80.0..=80.0f64,
        longitude in -180.0..=180.0f64,
    ) -> Coordinate {
        Coordinate::new(latitude, longitude)
    }
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in arbitrary_coordinate()) {
        prop_assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in arbitrary_coordinate(), b in arbitrary_coordinate()) {
        let ab = distance(a, b);
        let ba = distance(b, a);
        prop_assert!((ab - ba).abs() <= 1e-6, "{} vs {}", ab, ba);
    }

    #[test]
    fn distance_is_bounded(a in arbitrary_coordinate(), b in arbitrary_coordinate()) {
        let d = distance(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_M + 1e-6);
    }

    #[test]
    fn triangle_inequality_holds(
        a in arbitrary_coordinate(),
        b in arbitrary_coordinate(),
        c in arbitrary_coordinate(),
    ) {
        prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1.0);
    }

    #[test]
    fn destination_is_consistent_with_distance(
        origin in mid_latitude_coordinate(),
        bearing in 0.0..360.0f64,
        meters in 0.0..50_000.0f64,
    ) {
        let point = destination(origin, bearing, meters);
        prop_assert!(point.is_valid());
        prop_assert!((distance(origin, point) - meters).abs() < 1e-4);
    }

    #[test]
    fn monitor_enters_at_most_once(
        center in mid_latitude_coordinate(),
        radius in 1.0..5_000.0f64,
        path in prop::collection::vec((0.0..10_000.0f64, 0.0..360.0f64), 1..40),
    ) {
        let region = Region::new(center, radius);
        let base = Utc.with_ymd_and_hms(2025, 10, 19, 0, 0, 0).unwrap();
        let mut monitor = RegionMonitor::new();
        let mut entries = 0;

        for (i, (meters, bearing)) in path.iter().enumerate() {
            let sample = Sample::new(
                destination(center, *bearing, *meters),
                base + Duration::seconds(i as i64),
            );
            if monitor.process(&sample, &region).is_some() {
                entries += 1;
            }
        }

        prop_assert!(entries <= 1);
        prop_assert_eq!(entries, monitor.history().transitions().len());
        prop_assert_eq!(monitor.state() == MonitorState::Inside, entries == 1);
    }

    #[test]
    fn first_inside_fix_is_the_entry(
        center in mid_latitude_coordinate(),
        distances in prop::collection::vec(0.0..2_000.0f64, 1..30),
    ) {
        // Keep clear of the boundary so rounding cannot flip a decision.
        prop_assume!(distances.iter().all(|d| (d - 500.0).abs() > 1e-3));

        let region = Region::new(center, 500.0);
        let mut monitor = RegionMonitor::new();
        let expected = distances.iter().position(|d| *d <= 500.0);

        let mut fired = Vec::new();
        for (i, meters) in distances.iter().enumerate() {
            let sample = Sample::now(destination(center, 45.0, *meters));
            if monitor.process(&sample, &region).is_some() {
                fired.push(i);
            }
        }

        prop_assert_eq!(fired, expected.into_iter().collect::<Vec<_>>());
    }
}
