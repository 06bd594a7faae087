//! The aggregate of all currently loaded tracks.
//!
//! A [`Dataset`] is an ordered mapping from file identity to the outcome of
//! that file's parse+normalize run, plus the combined geographic extent.
//! Failed files stay in the list under their error so legends can report
//! them; they contribute nothing to the extent or to any series.

use serde::{Deserialize, Serialize};

use crate::error::TracksyncError;
use crate::{Bounds, GpsPoint, Track};

/// One file's slot in the dataset: identity, legend color, and either the
/// normalized track or the reason it failed.
#[derive(Debug, Clone)]
pub struct TrackEntry {
    pub identity: String,
    pub color: &'static str,
    pub outcome: Result<Track, TracksyncError>,
}

/// Immutable aggregate of one upload batch. Entry order is upload order,
/// which drives both color assignment and legend order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<TrackEntry>,
    extent: Option<Bounds>,
}

impl Dataset {
    /// Build a dataset from aggregated entries, computing the combined
    /// extent over every positioned sample of every successful track.
    pub(crate) fn from_entries(entries: Vec<TrackEntry>) -> Self {
        let mut extent: Option<Bounds> = None;
        for track in entries.iter().filter_map(|e| e.outcome.as_ref().ok()) {
            for point in track.positioned_points() {
                match &mut extent {
                    Some(bounds) => bounds.extend(point),
                    None => extent = Some(Bounds::around(point)),
                }
            }
        }
        Self { entries, extent }
    }

    /// All entries in upload order, failures included.
    pub fn entries(&self) -> &[TrackEntry] {
        &self.entries
    }

    /// Look up one entry by file identity.
    pub fn get(&self, identity: &str) -> Option<&TrackEntry> {
        self.entries.iter().find(|e| e.identity == identity)
    }

    /// Successfully normalized tracks, in upload order.
    pub fn tracks(&self) -> impl Iterator<Item = (&str, &Track)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok().map(|t| (e.identity.as_str(), t)))
    }

    /// Files that failed to parse or normalize, with their reasons.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &TracksyncError)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().err().map(|r| (e.identity.as_str(), r)))
    }

    /// Combined bounding rectangle across all tracks. `None` when no track
    /// has a positioned sample; map consumers degrade to a placeholder view
    /// instead of fitting bounds.
    pub fn extent(&self) -> Option<Bounds> {
        self.extent
    }

    /// Number of entries, failures included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no batch has been loaded or the batch had no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Per-track polyline payloads for the map consumer.
    pub fn map_tracks(&self) -> Vec<MapTrack> {
        self.entries
            .iter()
            .filter_map(|e| {
                let track = e.outcome.as_ref().ok()?;
                Some(MapTrack {
                    identity: e.identity.clone(),
                    color: e.color.to_string(),
                    points: track.positioned_points(),
                })
            })
            .collect()
    }

    /// Per-track heart-rate series payloads for the chart consumer.
    pub fn chart_series(&self) -> Vec<ChartSeries> {
        self.entries
            .iter()
            .filter_map(|e| {
                let track = e.outcome.as_ref().ok()?;
                Some(ChartSeries {
                    identity: e.identity.clone(),
                    color: e.color.to_string(),
                    points: track
                        .heart_rate_series()
                        .into_iter()
                        .map(|(elapsed_secs, heart_rate)| ChartPoint {
                            elapsed_secs,
                            heart_rate,
                        })
                        .collect(),
                })
            })
            .collect()
    }
}

/// Polyline payload for one track at the map boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTrack {
    pub identity: String,
    pub color: String,
    pub points: Vec<GpsPoint>,
}

/// One chart sample: elapsed seconds since the track's own start, paired
/// with the heart-rate reading if the sample carried one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub elapsed_secs: f64,
    pub heart_rate: Option<u16>,
}

/// Heart-rate series payload for one track at the chart boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub identity: String,
    pub color: String,
    pub points: Vec<ChartPoint>,
}
