//! # Multi-track aggregation engine
//!
//! Combines the per-file parse and normalize stages over a whole upload
//! batch and owns the resulting [`Dataset`] snapshot.
//!
//! ## Architecture
//!
//! - [`aggregate_batch`] - pure batch → dataset transform
//! - [`Dataset`] - immutable aggregate read by map/chart consumers
//! - [`SyncEngine`] - holds the current snapshot and swaps it atomically on
//!   each new batch
//!
//! A batch is always recomputed whole: the previous dataset stays visible
//! until the new one is fully built, then the snapshot is replaced in one
//! assignment. There is no incremental merge.

pub mod dataset;

pub use dataset::{ChartPoint, ChartSeries, Dataset, MapTrack, TrackEntry};

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::cursor::{self, CursorFix};
use crate::normalize::normalize_track;
use crate::palette::color_for_index;
use crate::parser::parse_document;

/// Aggregate one full upload batch into a [`Dataset`].
///
/// Files are processed in upload order, which fixes both legend order and
/// palette color (`upload index mod palette size`). A file whose parse or
/// normalization fails is kept under its error instead of being dropped, so
/// the file list still reports it.
///
/// Identity collisions are last-write-wins: the later file's outcome and
/// color replace the earlier entry, which keeps its legend position.
pub fn aggregate_batch<I>(batch: I) -> Dataset
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut entries: Vec<TrackEntry> = Vec::new();

    for (upload_index, (identity, text)) in batch.into_iter().enumerate() {
        let color = color_for_index(upload_index);
        let outcome = parse_document(&text).and_then(normalize_track);

        match &outcome {
            Ok(track) => debug!(
                "{identity}: {} samples, {:.1}s",
                track.samples.len(),
                track.duration_secs()
            ),
            Err(reason) => warn!("{identity}: {reason}"),
        }

        match entries.iter_mut().find(|e| e.identity == identity) {
            Some(existing) => {
                existing.color = color;
                existing.outcome = outcome;
            }
            None => entries.push(TrackEntry {
                identity,
                color,
                outcome,
            }),
        }
    }

    Dataset::from_entries(entries)
}

/// Owner of the current [`Dataset`] snapshot.
///
/// Loading a batch builds the replacement dataset completely and only then
/// swaps it in; consumers holding the previous `Arc` keep reading a fully
/// consistent snapshot. Cursor queries are pure reads against whichever
/// snapshot is current at call time.
#[derive(Debug, Default)]
pub struct SyncEngine {
    current: Arc<Dataset>,
}

impl SyncEngine {
    /// Create an engine with an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset with a fresh aggregation of `batch`.
    ///
    /// Returns the new snapshot.
    pub fn load_batch<I>(&mut self, batch: I) -> Arc<Dataset>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let dataset = Arc::new(aggregate_batch(batch));
        self.current = Arc::clone(&dataset);
        dataset
    }

    /// The current dataset snapshot.
    pub fn snapshot(&self) -> Arc<Dataset> {
        Arc::clone(&self.current)
    }

    /// Resolve the hover cursor at `elapsed_secs` against the current
    /// snapshot. See [`cursor::resolve`].
    pub fn resolve_cursor(&self, elapsed_secs: f64) -> HashMap<String, CursorFix> {
        cursor::resolve(&self.current, elapsed_secs)
    }
}
