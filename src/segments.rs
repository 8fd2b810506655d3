//! Half-open GPS time segments and filename-embedded spans.
//!
//! Trigger files encode their span in the basename as
//! `OBS-TAG-START-DURATION.EXT`; [`file_segment`] recovers `[start,
//! start+duration)` from a path. [`SegmentList`] is the small coalescing
//! interval algebra the CLI uses to report coverage gaps.

use std::path::Path;

use crate::error::{Result, TrigfindError};

/// A half-open span `[start, end)` of GPS seconds.
///
/// Query spans are integer-second, but file-embedded spans may carry
/// sub-second starts (pycbc-live), so both ends are `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn new(start: f64, end: f64) -> Self {
        Segment { start, end }
    }

    /// Whether two half-open spans share any time.
    pub fn intersects(&self, other: &Segment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Parse the time span embedded in a trigger filename.
///
/// The basename must split on `-` into exactly four fields; the fourth
/// holds the duration up to its first `.` (the extension may itself
/// contain dots, e.g. `xml.gz`). Any other shape is a hard
/// [`MalformedFilename`](TrigfindError::MalformedFilename) error.
pub fn file_segment(path: &Path) -> Result<Segment> {
    let malformed = || TrigfindError::MalformedFilename {
        path: path.to_path_buf(),
    };
    let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(malformed)?;
    let fields: Vec<&str> = name.split('-').collect();
    let &[_, _, start, rest] = fields.as_slice() else {
        return Err(malformed());
    };
    let duration = rest.split('.').next().ok_or_else(malformed)?;
    let start: f64 = start.parse().map_err(|_| malformed())?;
    let duration: f64 = duration.parse().map_err(|_| malformed())?;
    Ok(Segment::new(start, start + duration))
}

/// An ordered, coalesced list of disjoint segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    pub fn new() -> Self {
        SegmentList::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Insert a segment, merging it with any overlapping or touching
    /// neighbours so the list stays disjoint and sorted.
    pub fn insert(&mut self, seg: Segment) {
        if seg.end <= seg.start {
            return;
        }
        let mut merged = seg;
        let mut out = Vec::with_capacity(self.segments.len() + 1);
        for &s in &self.segments {
            if s.end < merged.start || s.start > merged.end {
                out.push(s);
            } else {
                merged.start = merged.start.min(s.start);
                merged.end = merged.end.max(s.end);
            }
        }
        let pos = out
            .iter()
            .position(|s| s.start > merged.start)
            .unwrap_or(out.len());
        out.insert(pos, merged);
        self.segments = out;
    }

    /// The parts of `span` not covered by this list.
    pub fn gaps_within(&self, span: Segment) -> Vec<Segment> {
        let mut gaps = Vec::new();
        let mut cursor = span.start;
        for s in &self.segments {
            if s.end <= cursor || s.start >= span.end {
                continue;
            }
            if s.start > cursor {
                gaps.push(Segment::new(cursor, s.start.min(span.end)));
            }
            cursor = cursor.max(s.end);
        }
        if cursor < span.end {
            gaps.push(Segment::new(cursor, span.end));
        }
        gaps
    }
}

impl FromIterator<Segment> for SegmentList {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut list = SegmentList::new();
        for seg in iter {
            list.insert(seg);
        }
        list
    }
}
