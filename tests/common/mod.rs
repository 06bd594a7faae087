//! Shared helpers for building TCX fixture documents in tests.

#![allow(dead_code)]

use chrono::{DateTime, Utc};

pub const TCX_NS: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";

/// Parse a fixture timestamp.
pub fn dt(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

/// Render one trackpoint element with exactly the fields given.
pub fn trackpoint(
    time: Option<&str>,
    position: Option<(f64, f64)>,
    heart_rate: Option<u16>,
) -> String {
    let mut tp = String::from("<Trackpoint>");
    if let Some(t) = time {
        tp.push_str(&format!("<Time>{t}</Time>"));
    }
    if let Some((lat, lng)) = position {
        tp.push_str(&format!(
            "<Position><LatitudeDegrees>{lat}</LatitudeDegrees><LongitudeDegrees>{lng}</LongitudeDegrees></Position>"
        ));
    }
    if let Some(hr) = heart_rate {
        tp.push_str(&format!("<HeartRateBpm><Value>{hr}</Value></HeartRateBpm>"));
    }
    tp.push_str("</Trackpoint>");
    tp
}

/// Wrap trackpoints in a complete TCX document.
pub fn tcx(trackpoints: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n<TrainingCenterDatabase xmlns=\"{TCX_NS}\">\
         <Activities><Activity Sport=\"Running\"><Lap><Track>{}</Track></Lap></Activity></Activities>\
         </TrainingCenterDatabase>",
        trackpoints.concat()
    )
}

/// A well-formed two-sample document starting at `start` spaced five seconds
/// apart, useful where the content does not matter.
pub fn simple_tcx(start: &str, lat: f64, lng: f64) -> String {
    let t0 = dt(start);
    let t1 = t0 + chrono::Duration::seconds(5);
    tcx(&[
        trackpoint(
            Some(&t0.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            Some((lat, lng)),
            Some(100),
        ),
        trackpoint(
            Some(&t1.format("%Y-%m-%dT%H:%M:%SZ").to_string()),
            Some((lat + 1.0, lng + 1.0)),
            Some(110),
        ),
    ])
}
