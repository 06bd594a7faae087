//! Tests for cursor module

mod common;

use common::{tcx, trackpoint};
use tracksync::cursor::resolve_track;
use tracksync::{aggregate_batch, normalize_track, parse_document, resolve, GpsPoint};

/// File A from the synchronization scenario: samples at elapsed 0/5/10s.
fn file_a() -> String {
    tcx(&[
        trackpoint(Some("2024-05-01T06:00:00Z"), Some((1.0, 1.0)), Some(100)),
        trackpoint(Some("2024-05-01T06:00:05Z"), Some((1.0, 1.1)), Some(110)),
        trackpoint(Some("2024-05-01T06:00:10Z"), Some((1.0, 1.2)), Some(120)),
    ])
}

/// File B: samples at elapsed 0/5s, the second missing its longitude so the
/// position forward-fills from the first.
fn file_b() -> String {
    tcx(&[
        trackpoint(Some("2024-06-15T09:00:00Z"), Some((2.0, 2.0)), Some(90)),
        "<Trackpoint><Time>2024-06-15T09:00:05Z</Time>\
         <Position><LatitudeDegrees>2.0</LatitudeDegrees></Position>\
         <HeartRateBpm><Value>95</Value></HeartRateBpm></Trackpoint>"
            .to_string(),
    ])
}

#[test]
fn test_resolve_two_overlaid_tracks_mid_hover() {
    let dataset = aggregate_batch(vec![
        ("a.tcx".to_string(), file_a()),
        ("b.tcx".to_string(), file_b()),
    ]);

    let fixes = resolve(&dataset, 7.0);
    assert_eq!(fixes.len(), 2);

    let a = &fixes["a.tcx"];
    assert_eq!(a.position, GpsPoint::new(1.0, 1.1));
    assert_eq!(a.heart_rate, Some(110));

    let b = &fixes["b.tcx"];
    assert_eq!(b.position, GpsPoint::new(2.0, 2.0));
    assert_eq!(b.heart_rate, Some(95));
}

#[test]
fn test_query_before_start_contributes_nothing() {
    let track = normalize_track(parse_document(&file_a()).unwrap()).unwrap();
    assert_eq!(resolve_track(&track, -0.5), None);
}

#[test]
fn test_query_at_sample_boundary_is_inclusive() {
    let track = normalize_track(parse_document(&file_a()).unwrap()).unwrap();
    let fix = resolve_track(&track, 5.0).unwrap();
    assert_eq!(fix.heart_rate, Some(110));
}

#[test]
fn test_query_past_end_pins_to_last_sample() {
    let track = normalize_track(parse_document(&file_a()).unwrap()).unwrap();
    let fix = resolve_track(&track, 3600.0).unwrap();
    assert_eq!(fix.position, GpsPoint::new(1.0, 1.2));
    assert_eq!(fix.heart_rate, Some(120));
}

#[test]
fn test_single_sample_track_contributes_from_zero() {
    let dataset = aggregate_batch(vec![
        ("a.tcx".to_string(), file_a()),
        (
            "late.tcx".to_string(),
            tcx(&[trackpoint(
                Some("2024-07-01T10:00:00Z"),
                Some((5.0, 5.0)),
                Some(80),
            )]),
        ),
    ]);

    // late.tcx has a single sample at elapsed 0, so it does contribute at 0;
    // a track never contributes below its own first elapsed time.
    let fixes = resolve(&dataset, 0.0);
    assert_eq!(fixes.len(), 2);
    assert_eq!(fixes["a.tcx"].heart_rate, Some(100));
    assert_eq!(fixes["late.tcx"].heart_rate, Some(80));
}

#[test]
fn test_unpositioned_lead_yields_no_fix_yet() {
    let doc = tcx(&[
        trackpoint(Some("2024-05-01T06:00:00Z"), None, Some(100)),
        trackpoint(Some("2024-05-01T06:00:05Z"), Some((4.0, 4.0)), Some(105)),
    ]);
    let track = normalize_track(parse_document(&doc).unwrap()).unwrap();

    // Before any position exists there is no marker to place.
    assert_eq!(resolve_track(&track, 2.0), None);
    assert_eq!(
        resolve_track(&track, 5.0).unwrap().position,
        GpsPoint::new(4.0, 4.0)
    );
}

#[test]
fn test_failed_tracks_never_contribute() {
    let dataset = aggregate_batch(vec![
        ("broken.tcx".to_string(), "not xml".to_string()),
        ("a.tcx".to_string(), file_a()),
    ]);

    let fixes = resolve(&dataset, 10.0);
    assert_eq!(fixes.len(), 1);
    assert!(fixes.contains_key("a.tcx"));
}

#[test]
fn test_repeated_queries_are_stable() {
    // A hover gesture hammers the resolver; the lookup is pure, so sweeping
    // back and forth over the same snapshot returns identical fixes.
    let dataset = aggregate_batch(vec![("a.tcx".to_string(), file_a())]);

    let sweep: Vec<_> = (0..=20).map(|t| resolve(&dataset, t as f64 / 2.0)).collect();
    let reverse: Vec<_> = (0..=20)
        .rev()
        .map(|t| resolve(&dataset, t as f64 / 2.0))
        .collect();
    for (fwd, rev) in sweep.iter().zip(reverse.iter().rev()) {
        assert_eq!(fwd["a.tcx"], rev["a.tcx"]);
    }
}
