//! Unified error handling for the telemetry engine.
//!
//! All errors are file-scoped: a failing document degrades to an error marker
//! for that file's identity in the [`Dataset`](crate::Dataset) while the rest
//! of the batch is processed normally. Nothing here is fatal to a batch.

use thiserror::Error;

/// Result alias using [`TracksyncError`].
pub type Result<T> = std::result::Result<T, TracksyncError>;

/// Errors produced while turning one raw recording document into a track.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TracksyncError {
    /// The document could not be parsed as XML at all.
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// The document parsed, but the TCX root structure is absent and no
    /// trackpoint records were found.
    #[error("no TrainingCenterDatabase root and no trackpoints found")]
    MissingTrackpoints,

    /// The document parsed, but no sample carried a timestamp or a position.
    #[error("no usable samples survived parsing")]
    EmptyTrack,
}

impl TracksyncError {
    /// True for the parse-stage errors (document unreadable or structurally
    /// unusable), false for the normalization-stage `EmptyTrack`.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            TracksyncError::MalformedDocument { .. } | TracksyncError::MissingTrackpoints
        )
    }
}
