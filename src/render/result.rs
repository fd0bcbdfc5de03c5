//! Reflow statistics and reports.

use crate::detect::PageMarker;
use serde::{Deserialize, Serialize};

/// Statistics collected during a reflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflowStats {
    /// Total number of input lines
    pub line_count: u32,

    /// Number of page-end markers found
    pub marker_count: u32,

    /// Number of non-empty pages flushed (including the trailing page)
    pub page_count: u32,

    /// Fragments taken from the left column
    pub left_fragment_count: u32,

    /// Fragments taken from the right column
    pub right_fragment_count: u32,

    /// Lines that held only whitespace
    pub blank_line_count: u32,

    /// Approximate word count of the output (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count of the output (excluding whitespace)
    pub char_count: u32,
}

impl ReflowStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total fragments from both columns.
    pub fn fragment_count(&self) -> u32 {
        self.left_fragment_count
            .saturating_add(self.right_fragment_count)
    }

    /// Set word and character counts from the final text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count = clamp(text.split_whitespace().count());
        self.char_count = clamp(text.chars().filter(|c| !c.is_whitespace()).count());
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ReflowStats) {
        self.line_count = self.line_count.saturating_add(other.line_count);
        self.marker_count = self.marker_count.saturating_add(other.marker_count);
        self.page_count = self.page_count.saturating_add(other.page_count);
        self.left_fragment_count = self.left_fragment_count.saturating_add(other.left_fragment_count);
        self.right_fragment_count = self.right_fragment_count.saturating_add(other.right_fragment_count);
        self.blank_line_count = self.blank_line_count.saturating_add(other.blank_line_count);
        self.word_count = self.word_count.saturating_add(other.word_count);
        self.char_count = self.char_count.saturating_add(other.char_count);
    }
}

/// Counters saturate at `u32::MAX` instead of wrapping.
fn clamp(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Serializable summary of one reflow: counters plus the markers seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflowReport {
    /// Path or label of the source, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Reflow statistics
    pub stats: ReflowStats,

    /// Page-end markers in encounter order
    pub markers: Vec<PageMarker>,
}
