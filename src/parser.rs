//! TCX trackpoint parsing.
//!
//! Turns one raw recording document into an ordered-by-appearance sequence of
//! [`RawSample`]s. Each trackpoint field is read independently and tolerantly:
//! a record missing its time, position, or heart rate still contributes
//! whatever it does carry. The transform is pure; batch-level concerns
//! (identities, error markers) live in [`crate::engine`].

use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};

use crate::error::{Result, TracksyncError};
use crate::{GpsPoint, RawSample};

/// Namespace of the Training Center Database v2 schema.
pub const TCX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";

/// Parse one TCX document into its trackpoint samples, in document order.
///
/// Fails with [`TracksyncError::MalformedDocument`] when the text is not
/// well-formed XML, and with [`TracksyncError::MissingTrackpoints`] when the
/// TCX root structure is absent *and* no trackpoint produced a usable field.
/// Trackpoints are matched by local name, so documents with a near-variant
/// namespace still yield their records.
///
/// # Example
/// ```
/// use tracksync::parser::parse_document;
///
/// let doc = r#"<TrainingCenterDatabase
///     xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
///   <Activities><Activity><Lap><Track>
///     <Trackpoint><Time>2024-05-01T06:00:00Z</Time></Trackpoint>
///   </Track></Lap></Activity></Activities>
/// </TrainingCenterDatabase>"#;
///
/// let samples = parse_document(doc).unwrap();
/// assert_eq!(samples.len(), 1);
/// ```
pub fn parse_document(text: &str) -> Result<Vec<RawSample>> {
    let doc = Document::parse(text).map_err(|e| TracksyncError::MalformedDocument {
        reason: e.to_string(),
    })?;

    let samples: Vec<RawSample> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Trackpoint")
        .map(read_trackpoint)
        .filter(|s| !s.is_empty())
        .collect();

    if samples.is_empty() && !has_tcx_root(&doc) {
        return Err(TracksyncError::MissingTrackpoints);
    }

    Ok(samples)
}

/// Root is recognized by element name or by the TCX namespace; either one is
/// enough to treat an empty document as "valid but sample-free".
fn has_tcx_root(doc: &Document) -> bool {
    let root = doc.root_element();
    root.tag_name().name() == "TrainingCenterDatabase"
        || root.tag_name().namespace() == Some(TCX_NAMESPACE)
}

/// Read one trackpoint element. Each field fails soft: an unparsable or
/// missing time, a partial position, or an absent heart rate leaves that
/// field `None` rather than erroring.
fn read_trackpoint(node: Node) -> RawSample {
    RawSample {
        time: child_text(node, "Time").and_then(parse_timestamp),
        position: read_position(node),
        heart_rate: read_heart_rate(node),
    }
}

/// ISO-8601 timestamp; the 'Z' suffix is normalized to a UTC offset.
fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// A position requires both components; a partial position is treated as
/// absent position, not as an error.
fn read_position(node: Node) -> Option<GpsPoint> {
    let position = child_element(node, "Position")?;
    let latitude = child_text(position, "LatitudeDegrees")?.trim().parse().ok()?;
    let longitude = child_text(position, "LongitudeDegrees")?
        .trim()
        .parse()
        .ok()?;
    Some(GpsPoint::new(latitude, longitude))
}

/// Heart rate is a nested numeric field: `<HeartRateBpm><Value>N</Value>`.
fn read_heart_rate(node: Node) -> Option<u16> {
    let bpm = child_element(node, "HeartRateBpm")?;
    let value = child_text(bpm, "Value")?.trim();
    // Some exporters write "120.0"; accept integral floats too.
    value
        .parse::<u16>()
        .ok()
        .or_else(|| value.parse::<f64>().ok().map(|v| v as u16))
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child_element(node, name).and_then(|c| c.text())
}
