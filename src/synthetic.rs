//! Synthetic TCX document generator for stress testing and benchmarking.
//!
//! Generates recordings with a known sample layout so ingestion can be
//! exercised at arbitrary batch sizes without fixture files.
//!
//! Feature-gated behind `synthetic` — not included in production builds.
//!
//! # Example
//!
//! ```rust
//! use tracksync::synthetic::SyntheticRecording;
//!
//! let doc = SyntheticRecording {
//!     sample_count: 120,
//!     seed: 42,
//!     ..SyntheticRecording::default()
//! }
//! .generate();
//!
//! let samples = tracksync::parse_document(&doc).unwrap();
//! assert_eq!(samples.len(), 120);
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;

use crate::parser::TCX_NAMESPACE;
use crate::{GpsPoint, RawSample};

/// Configuration for one synthetic recording.
#[derive(Debug, Clone)]
pub struct SyntheticRecording {
    /// Timestamp of the first trackpoint.
    pub start_time: DateTime<Utc>,
    /// Number of trackpoints.
    pub sample_count: usize,
    /// Seconds between consecutive trackpoints.
    pub interval_secs: i64,
    /// Starting coordinate; the track drifts north-east from here.
    pub origin: GpsPoint,
    /// Inclusive heart-rate band the readings wander inside.
    pub heart_rate_band: (u16, u16),
    /// Fraction of trackpoints emitted without a position (0.0-1.0),
    /// exercising the forward-fill path.
    pub position_dropout: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

impl Default for SyntheticRecording {
    fn default() -> Self {
        Self {
            start_time: Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap(),
            sample_count: 600,
            interval_secs: 1,
            origin: GpsPoint::new(47.37, 8.55),
            heart_rate_band: (95, 175),
            position_dropout: 0.0,
            seed: 42,
        }
    }
}

impl SyntheticRecording {
    /// Generate the raw samples this recording describes.
    pub fn samples(&self) -> Vec<RawSample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (hr_min, hr_max) = self.heart_rate_band;
        let mut heart_rate = rng.gen_range(hr_min..=hr_max);

        (0..self.sample_count)
            .map(|i| {
                let step = i as f64 * 0.0001;
                let position = if rng.gen_bool(self.position_dropout) {
                    None
                } else {
                    Some(GpsPoint::new(
                        self.origin.latitude + step,
                        self.origin.longitude + step,
                    ))
                };
                heart_rate = heart_rate
                    .saturating_add_signed(rng.gen_range(-2i16..=2))
                    .clamp(hr_min, hr_max);

                RawSample {
                    time: Some(self.start_time + Duration::seconds(i as i64 * self.interval_secs)),
                    position,
                    heart_rate: Some(heart_rate),
                }
            })
            .collect()
    }

    /// Generate the recording as a TCX document.
    pub fn generate(&self) -> String {
        render_document(&self.samples())
    }
}

/// Generate a batch of `count` recordings named `synthetic-<n>.tcx`, each
/// with its own seed, ready for [`crate::aggregate_batch`].
pub fn generate_batch(count: usize, base: &SyntheticRecording) -> Vec<(String, String)> {
    (0..count)
        .map(|i| {
            let recording = SyntheticRecording {
                seed: base.seed.wrapping_add(i as u64),
                ..base.clone()
            };
            (format!("synthetic-{i}.tcx"), recording.generate())
        })
        .collect()
}

/// Render raw samples as a TCX document, omitting each absent field the way
/// real exporters do.
pub fn render_document(samples: &[RawSample]) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(doc, "<TrainingCenterDatabase xmlns=\"{TCX_NAMESPACE}\">");
    doc.push_str("  <Activities><Activity Sport=\"Other\"><Lap><Track>\n");

    for sample in samples {
        doc.push_str("    <Trackpoint>\n");
        if let Some(time) = sample.time {
            let _ = writeln!(
                doc,
                "      <Time>{}</Time>",
                time.format("%Y-%m-%dT%H:%M:%SZ")
            );
        }
        if let Some(p) = sample.position {
            let _ = writeln!(
                doc,
                "      <Position><LatitudeDegrees>{}</LatitudeDegrees><LongitudeDegrees>{}</LongitudeDegrees></Position>",
                p.latitude, p.longitude
            );
        }
        if let Some(hr) = sample.heart_rate {
            let _ = writeln!(doc, "      <HeartRateBpm><Value>{hr}</Value></HeartRateBpm>");
        }
        doc.push_str("    </Trackpoint>\n");
    }

    doc.push_str("  </Track></Lap></Activity></Activities>\n</TrainingCenterDatabase>\n");
    doc
}
