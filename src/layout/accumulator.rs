//! Per-page column buffering.

use crate::detect::{PageMarker, PageMarkerDetector};
use crate::render::ReflowStats;

use super::columns::split_columns;

/// How a single input line was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Page-end marker; triggered a flush
    Marker,
    /// Text line; flags tell which columns received a fragment
    Text {
        /// Left column received a fragment
        left: bool,
        /// Right column received a fragment
        right: bool,
    },
    /// Nothing but whitespace
    Blank,
}

/// Output of a finished accumulator.
#[derive(Debug, Clone, Default)]
pub struct Reflowed {
    /// Fragments in final reading order
    pub fragments: Vec<String>,
    /// Page-end markers in encounter order
    pub markers: Vec<PageMarker>,
    /// Line and fragment counters
    pub stats: ReflowStats,
}

impl Reflowed {
    /// Join the fragments with single spaces.
    pub fn flattened(&self) -> String {
        self.fragments.join(" ")
    }
}

/// Buffers left and right column text until each page boundary.
///
/// On every page-end marker, and once more at the end of input, the left
/// fragments of the page are emitted followed by its right fragments.
#[derive(Debug, Default)]
pub struct ReflowAccumulator {
    detector: PageMarkerDetector,
    left: Vec<String>,
    right: Vec<String>,
    combined: Vec<String>,
    markers: Vec<PageMarker>,
    stats: ReflowStats,
}

impl ReflowAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one input line.
    pub fn push_line(&mut self, line: &str) -> LineKind {
        self.stats.line_count = self.stats.line_count.saturating_add(1);

        if let Some(marker) = self.detector.parse(line) {
            log::trace!("line {}: page marker {}", self.stats.line_count, marker);
            self.stats.marker_count = self.stats.marker_count.saturating_add(1);
            self.markers.push(marker);
            self.flush();
            return LineKind::Marker;
        }

        let split = split_columns(line);
        let has_left = !split.left.is_empty();
        let has_right = !split.right.is_empty();

        if has_left {
            self.left.push(split.left);
            self.stats.left_fragment_count = self.stats.left_fragment_count.saturating_add(1);
        }
        if has_right {
            self.right.push(split.right);
            self.stats.right_fragment_count = self.stats.right_fragment_count.saturating_add(1);
        }

        if has_left || has_right {
            log::trace!(
                "line {}: left={} right={}",
                self.stats.line_count,
                has_left,
                has_right
            );
            LineKind::Text {
                left: has_left,
                right: has_right,
            }
        } else {
            self.stats.blank_line_count = self.stats.blank_line_count.saturating_add(1);
            LineKind::Blank
        }
    }

    /// Move buffered fragments into the combined sequence, left column first.
    pub fn flush(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }

        log::debug!(
            "Flushing page {}: {} left, {} right fragments",
            self.stats.page_count.saturating_add(1),
            self.left.len(),
            self.right.len()
        );

        self.combined.append(&mut self.left);
        self.combined.append(&mut self.right);
        self.stats.page_count = self.stats.page_count.saturating_add(1);
    }

    /// Fragments emitted so far, excluding anything still buffered.
    pub fn combined(&self) -> &[String] {
        &self.combined
    }

    /// Number of fragments waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Counters collected so far.
    pub fn stats(&self) -> &ReflowStats {
        &self.stats
    }

    /// Flush what remains and return the result.
    pub fn finish(mut self) -> Reflowed {
        self.flush();
        Reflowed {
            fragments: self.combined,
            markers: self.markers,
            stats: self.stats,
        }
    }
}

/// Run every line through a fresh accumulator.
pub fn reflow_fragments<I, S>(lines: I) -> Reflowed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = ReflowAccumulator::new();
    for line in lines {
        acc.push_line(line.as_ref());
    }
    acc.finish()
}
