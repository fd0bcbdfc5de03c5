//! Page-end marker detection.
//!
//! Transcripts printed in two columns end every page with a footer line of
//! five fields: `<word> <time> <page> <word> <time>`, for example
//! `JOHN 10:15 3 MARY 10:16`. Such a line marks a page boundary and is
//! never part of the text.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Full-line shape of a page-end marker.
const PAGE_END_PATTERN: &str = r"^\s*(\w+)\s+(\d+:\d+)\s+(\d+)\s+(\w+)\s+(\d+:\d+)\s*$";

static PAGE_END: OnceLock<Regex> = OnceLock::new();

/// Compiled marker pattern, built on first use.
fn page_end_regex() -> &'static Regex {
    PAGE_END.get_or_init(|| Regex::new(PAGE_END_PATTERN).expect("page marker pattern is valid"))
}

/// Fields of a parsed page-end marker line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMarker {
    /// Leading word (usually a speaker or header label)
    pub left_label: String,
    /// Leading time field, e.g. `10:15`
    pub left_time: String,
    /// Page number exactly as printed
    pub page_number: String,
    /// Trailing word
    pub right_label: String,
    /// Trailing time field
    pub right_time: String,
}

impl PageMarker {
    /// Page number as an integer, if it fits in `u32`.
    pub fn page(&self) -> Option<u32> {
        self.page_number.parse().ok()
    }
}

impl std::fmt::Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.left_label, self.left_time, self.page_number, self.right_label, self.right_time
        )
    }
}

/// Classifies lines as page-end markers.
///
/// The marker pattern is compiled once per process and shared by every
/// detector.
#[derive(Debug, Clone)]
pub struct PageMarkerDetector {
    pattern: Regex,
}

impl PageMarkerDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self {
            pattern: page_end_regex().clone(),
        }
    }

    /// Check whether the whole line is a page-end marker.
    ///
    /// # Example
    /// ```
    /// use uncolumn::PageMarkerDetector;
    ///
    /// let detector = PageMarkerDetector::new();
    /// assert!(detector.is_page_end("JOHN 10:15 3 MARY 10:16"));
    /// assert!(!detector.is_page_end("JOHN 10:15 3 MARY"));
    /// ```
    pub fn is_page_end(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Parse a page-end marker into its fields.
    ///
    /// Returns `None` when the line is not a marker.
    pub fn parse(&self, line: &str) -> Option<PageMarker> {
        let caps = self.pattern.captures(line)?;
        Some(PageMarker {
            left_label: caps[1].to_string(),
            left_time: caps[2].to_string(),
            page_number: caps[3].to_string(),
            right_label: caps[4].to_string(),
            right_time: caps[5].to_string(),
        })
    }
}

impl Default for PageMarkerDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a single line is a page-end marker.
pub fn is_page_end(line: &str) -> bool {
    page_end_regex().is_match(line)
}
