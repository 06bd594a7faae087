//! # tracksync
//!
//! Telemetry normalization and time-synchronization engine for device-exported
//! activity recordings (TCX documents with timestamped GPS + heart-rate samples).
//!
//! This library provides:
//! - TCX trackpoint parsing tolerant of missing fields
//! - Per-track normalization (stable time ordering, position forward-fill,
//!   duration and max heart rate)
//! - Multi-track aggregation with deterministic palette colors and a combined
//!   geographic extent
//! - An elapsed-time cursor resolver for synchronized chart/map cursors across
//!   any number of overlaid tracks
//!
//! ## Features
//!
//! - **`synthetic`** - Enable the synthetic TCX document generator used by
//!   benchmarks and stress tests
//!
//! ## Quick Start
//!
//! ```rust
//! use tracksync::SyncEngine;
//!
//! let doc = r#"<?xml version="1.0"?>
//! <TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
//!   <Activities><Activity Sport="Running"><Lap><Track>
//!     <Trackpoint>
//!       <Time>2024-05-01T06:00:00Z</Time>
//!       <Position><LatitudeDegrees>51.5074</LatitudeDegrees><LongitudeDegrees>-0.1278</LongitudeDegrees></Position>
//!       <HeartRateBpm><Value>112</Value></HeartRateBpm>
//!     </Trackpoint>
//!     <Trackpoint>
//!       <Time>2024-05-01T06:00:05Z</Time>
//!       <Position><LatitudeDegrees>51.5080</LatitudeDegrees><LongitudeDegrees>-0.1290</LongitudeDegrees></Position>
//!       <HeartRateBpm><Value>118</Value></HeartRateBpm>
//!     </Trackpoint>
//!   </Track></Lap></Activity></Activities>
//! </TrainingCenterDatabase>"#;
//!
//! let mut engine = SyncEngine::new();
//! let dataset = engine.load_batch(vec![("morning-run.tcx".to_string(), doc.to_string())]);
//!
//! assert_eq!(dataset.entries().len(), 1);
//! let fixes = engine.resolve_cursor(5.0);
//! assert_eq!(fixes["morning-run.tcx"].heart_rate, Some(118));
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TracksyncError};

// TCX trackpoint parsing
pub mod parser;
pub use parser::parse_document;

// Per-track normalization (ordering, forward-fill, derived values)
pub mod normalize;
pub use normalize::{forward_fill, normalize_track};

// Fixed color palette cycled by upload order
pub mod palette;
pub use palette::{color_for_index, PALETTE};

// Multi-track aggregation and the snapshot-swapping engine
pub mod engine;
pub use engine::{
    aggregate_batch, ChartPoint, ChartSeries, Dataset, MapTrack, SyncEngine, TrackEntry,
};

// Elapsed-time cursor resolution for synchronized map/chart cursors
pub mod cursor;
pub use cursor::{resolve, CursorFix};

// Synthetic TCX generator for stress testing and benchmarking
#[cfg(feature = "synthetic")]
pub mod synthetic;

// ============================================================================
// Core Types
// ============================================================================

/// A GPS coordinate with latitude and longitude in decimal degrees.
///
/// # Example
/// ```
/// use tracksync::GpsPoint;
/// let point = GpsPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Bounding rectangle covering a set of positioned samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Degenerate bounds containing a single point.
    pub fn around(point: GpsPoint) -> Self {
        Self {
            min_lat: point.latitude,
            max_lat: point.latitude,
            min_lng: point.longitude,
            max_lng: point.longitude,
        }
    }

    /// Create bounds from a slice of points, `None` when empty.
    pub fn from_points(points: &[GpsPoint]) -> Option<Self> {
        let mut iter = points.iter();
        let mut bounds = Self::around(*iter.next()?);
        for p in iter {
            bounds.extend(*p);
        }
        Some(bounds)
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: GpsPoint) {
        self.min_lat = self.min_lat.min(point.latitude);
        self.max_lat = self.max_lat.max(point.latitude);
        self.min_lng = self.min_lng.min(point.longitude);
        self.max_lng = self.max_lng.max(point.longitude);
    }

    /// Get the center point of the bounds.
    pub fn center(&self) -> GpsPoint {
        GpsPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// One trackpoint as extracted from the document, before normalization.
///
/// Every field is independently optional: a trackpoint may carry only a
/// heart-rate reading, only a position, or any combination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawSample {
    pub time: Option<DateTime<Utc>>,
    pub position: Option<GpsPoint>,
    pub heart_rate: Option<u16>,
}

impl RawSample {
    /// True when the trackpoint carried no usable field at all.
    pub fn is_empty(&self) -> bool {
        self.time.is_none() && self.position.is_none() && self.heart_rate.is_none()
    }
}

/// One normalized instant of telemetry. Always timestamped; position may be
/// absent when the sample precedes the track's first positioned trackpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: DateTime<Utc>,
    pub position: Option<GpsPoint>,
    pub heart_rate: Option<u16>,
}

/// One recording's normalized series.
///
/// `samples` is sorted ascending by timestamp; all derived values (duration,
/// elapsed time, forward-filled positions) are computed after that ordering
/// is established.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Timestamped samples, ascending by time.
    pub samples: Vec<Sample>,
    /// Timestamp of the first sample, `None` when no sample carried a time.
    pub start_time: Option<DateTime<Utc>>,
    /// Timestamp of the last sample.
    pub end_time: Option<DateTime<Utc>>,
    /// Maximum of all present heart-rate readings.
    pub max_heart_rate: Option<u16>,
}

impl Track {
    /// Recording duration; zero with fewer than two timestamped samples.
    pub fn duration(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    /// Recording duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1000.0
    }

    /// Seconds between the track's own start and `sample`.
    ///
    /// Zero for the first timestamped sample by construction; anchoring is
    /// per-track, so overlaying tracks recorded on different days both start
    /// their series at zero.
    pub fn elapsed_secs(&self, sample: &Sample) -> f64 {
        match self.start_time {
            Some(start) => (sample.time - start).num_milliseconds() as f64 / 1000.0,
            None => 0.0,
        }
    }

    /// Ordered positioned samples for polyline rendering. Leading samples
    /// without a position are skipped, never invented.
    pub fn positioned_points(&self) -> Vec<GpsPoint> {
        self.samples.iter().filter_map(|s| s.position).collect()
    }

    /// Bounding rectangle of this track's positioned samples.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.positioned_points())
    }

    /// Chart series: (elapsed seconds, heart rate) per sample, in time order.
    /// Samples without a reading keep their slot so the x-axis stays aligned.
    pub fn heart_rate_series(&self) -> Vec<(f64, Option<u16>)> {
        self.samples
            .iter()
            .map(|s| (self.elapsed_secs(s), s.heart_rate))
            .collect()
    }
}
