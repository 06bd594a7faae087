//! Per-track normalization.
//!
//! Takes the raw sample sequence produced by [`crate::parser`] for one file
//! and builds a [`Track`]: positions forward-filled, samples ordered by
//! timestamp, start/end/duration and max heart rate derived.

use crate::error::{Result, TracksyncError};
use crate::{RawSample, Sample, Track};

/// Normalize one file's raw samples into a [`Track`].
///
/// Steps, in order:
/// 1. Discard untimestamped records ahead of the first timestamped one;
///    they cannot sit between two timestamped samples, so nothing they
///    carry may feed forward-fill. The first sample stays unpositioned when
///    no position exists to carry forward.
/// 2. Forward-fill positions over the remaining emission order, so an
///    untimestamped trackpoint sitting between two timestamped ones still
///    donates its coordinate to the samples after it.
/// 3. Drop samples without a timestamp (they cannot be placed on any axis).
/// 4. Stable-sort ascending by timestamp. Well-formed documents already emit
///    chronologically, so this preserves, not inverts, the emission order.
///
/// Fails with [`TracksyncError::EmptyTrack`] when no sample carries a
/// timestamp and no sample carries a position.
pub fn normalize_track(mut raw: Vec<RawSample>) -> Result<Track> {
    let any_time = raw.iter().any(|s| s.time.is_some());
    let any_position = raw.iter().any(|s| s.position.is_some());
    if !any_time && !any_position {
        return Err(TracksyncError::EmptyTrack);
    }

    let first_timed = raw
        .iter()
        .position(|s| s.time.is_some())
        .unwrap_or(raw.len());

    let mut samples: Vec<Sample> = forward_fill(raw.split_off(first_timed))
        .into_iter()
        .filter_map(|s| {
            s.time.map(|time| Sample {
                time,
                position: s.position,
                heart_rate: s.heart_rate,
            })
        })
        .collect();
    samples.sort_by_key(|s| s.time);

    let start_time = samples.first().map(|s| s.time);
    let end_time = samples.last().map(|s| s.time);
    let max_heart_rate = samples.iter().filter_map(|s| s.heart_rate).max();

    Ok(Track {
        samples,
        start_time,
        end_time,
        max_heart_rate,
    })
}

/// Substitute each missing position with the most recent prior one.
///
/// Samples before the first positioned sample stay unpositioned; no position
/// is ever invented. Idempotent: re-applying to an already-filled sequence
/// changes nothing.
pub fn forward_fill(mut samples: Vec<RawSample>) -> Vec<RawSample> {
    let mut last_position = None;
    for sample in &mut samples {
        match sample.position {
            Some(p) => last_position = Some(p),
            None => sample.position = last_position,
        }
    }
    samples
}
