//! Elapsed-time cursor resolution.
//!
//! Maps a hovered chart position (seconds since each track's own start) to a
//! marker position per track, so a cursor sweeping the heart-rate chart moves
//! every map marker in lockstep. Resolution is a pure lookup against an
//! immutable [`Dataset`] snapshot and is safe to call at hover rate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::Dataset;
use crate::{GpsPoint, Track};

/// The resolved marker for one track: where its cursor sits at the queried
/// elapsed time, with the heart rate at that sample when available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorFix {
    pub position: GpsPoint,
    pub heart_rate: Option<u16>,
}

/// Resolve the cursor at `elapsed_secs` for every track in the dataset.
///
/// Per track, the fix is the most recent positioned sample whose elapsed
/// time is at or before the query. A track whose first positioned sample
/// lies after the query contributes no entry ("not yet started"); a query
/// past a track's end pins to its last sample, with no special-casing.
pub fn resolve(dataset: &Dataset, elapsed_secs: f64) -> HashMap<String, CursorFix> {
    dataset
        .tracks()
        .filter_map(|(identity, track)| {
            resolve_track(track, elapsed_secs).map(|fix| (identity.to_string(), fix))
        })
        .collect()
}

/// Resolve one track. Samples are sorted by time, so elapsed times ascend
/// and the cutoff is a binary search; the walk back from it finds the last
/// sample that actually carries a position.
pub fn resolve_track(track: &Track, elapsed_secs: f64) -> Option<CursorFix> {
    let cutoff = track
        .samples
        .partition_point(|s| track.elapsed_secs(s) <= elapsed_secs);

    track.samples[..cutoff].iter().rev().find_map(|s| {
        s.position.map(|position| CursorFix {
            position,
            heart_rate: s.heart_rate,
        })
    })
}
