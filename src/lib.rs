//! # uncolumn
//!
//! Reflow two-column transcript text into a single flowing stream.
//!
//! Transcripts printed in two columns interleave both columns on every
//! line and end each page with a footer such as `JOHN 10:15 3 MARY 10:16`.
//! This library reads such text, removes the footers, emits each page's
//! left column followed by its right column, and normalizes the result.
//!
//! ## Quick Start
//!
//! ```
//! let text = "alpha    beta\nJOHN 10:15 3 MARY 10:16\ngamma    delta\n";
//! assert_eq!(uncolumn::reflow_str(text), "alpha beta gamma delta");
//! ```
//!
//! ## Pipeline
//!
//! - **Page markers**: [`PageMarkerDetector`] recognizes footer lines
//! - **Columns**: [`split_columns`] cuts a line at its first 4-space gap
//! - **Accumulation**: [`ReflowAccumulator`] buffers columns per page
//! - **Normalization**: [`TextNormalizer`] drops stray page numbers after
//!   sentence punctuation and collapses whitespace

pub mod detect;
pub mod error;
pub mod layout;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use detect::{is_page_end, PageMarker, PageMarkerDetector};
pub use error::{Error, Result};
pub use layout::{
    reflow_fragments, split_columns, split_lines, ColumnSplit, LineKind, ReflowAccumulator,
    Reflowed, COLUMN_GAP,
};
pub use render::{
    normalize, JsonFormat, NormalizeOptions, NormalizePreset, ReflowReport, ReflowStats,
    TextNormalizer,
};

use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Reflow in-memory text with the standard normalization.
///
/// # Example
///
/// ```
/// let out = uncolumn::reflow_str("Alpha    Beta\nGamma\n");
/// assert_eq!(out, "Alpha Gamma Beta");
/// ```
pub fn reflow_str(text: &str) -> String {
    Uncolumn::new().process_str(text).text
}

/// Reflow a sequence of lines with the standard normalization.
///
/// Lines may keep their terminators; they are trimmed by the splitter.
pub fn reflow_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Uncolumn::new().process_lines(lines).text
}

/// Reflow everything readable from `reader`.
///
/// The reader is consumed to the end before any processing happens.
pub fn reflow_reader<R: Read>(reader: R) -> Result<String> {
    Ok(Uncolumn::new().process_reader(reader, "<reader>")?.text)
}

/// Reflow a file into another file.
///
/// The output is written only after the input has been read and decoded in
/// full.
///
/// # Example
///
/// ```no_run
/// let stats = uncolumn::reflow_file("original.txt", "cleansed.txt")?;
/// println!("{} pages", stats.page_count);
/// # Ok::<(), uncolumn::Error>(())
/// ```
pub fn reflow_file<P, Q>(input: P, output: Q) -> Result<ReflowStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let result = Uncolumn::new().process_file(input)?;
    result.write_to(output)?;
    Ok(result.stats)
}

/// One input/output pair for [`Uncolumn::process_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    /// File to read
    pub input: PathBuf,
    /// File to write
    pub output: PathBuf,
}

impl BatchJob {
    /// Create a new job.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Builder for reflowing transcripts.
///
/// # Example
///
/// ```
/// use uncolumn::{NormalizePreset, Uncolumn};
///
/// let result = Uncolumn::new()
///     .with_preset(NormalizePreset::Raw)
///     .process_str("a.    b\nc.    12 d\n");
/// assert_eq!(result.text, "a. c. b 12 d");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Uncolumn {
    normalize_options: NormalizeOptions,
}

impl Uncolumn {
    /// Create a new builder with standard normalization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Set normalization from a preset.
    pub fn with_preset(mut self, preset: NormalizePreset) -> Self {
        self.normalize_options = NormalizeOptions::from_preset(preset);
        self
    }

    /// Normalization options in effect.
    pub fn normalize_options(&self) -> &NormalizeOptions {
        &self.normalize_options
    }

    /// Reflow a sequence of lines.
    pub fn process_lines<I, S>(&self, lines: I) -> UncolumnResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let reflowed = reflow_fragments(lines);
        let flattened = reflowed.flattened();
        let text = TextNormalizer::new(self.normalize_options.clone()).process(&flattened);

        let mut stats = reflowed.stats;
        stats.count_text(&text);

        UncolumnResult {
            text,
            fragments: reflowed.fragments,
            markers: reflowed.markers,
            stats,
            source: None,
        }
    }

    /// Reflow in-memory text.
    pub fn process_str(&self, text: &str) -> UncolumnResult {
        self.process_lines(split_lines(text))
    }

    /// Read `reader` to the end and reflow it.
    pub fn process_reader<R: Read>(&self, reader: R, origin: &str) -> Result<UncolumnResult> {
        let text = source::read_from(reader, origin)?;
        let mut result = self.process_str(&text);
        result.source = Some(origin.to_string());
        Ok(result)
    }

    /// Read a file and reflow it.
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<UncolumnResult> {
        let path = path.as_ref();
        let text = source::read_source(path)?;
        let mut result = self.process_str(&text);
        result.source = Some(path.display().to_string());

        log::debug!(
            "Reflowed {}: {} lines, {} pages, {} markers",
            path.display(),
            result.stats.line_count,
            result.stats.page_count,
            result.stats.marker_count
        );

        Ok(result)
    }

    /// Reflow several files in parallel.
    ///
    /// Every job gets its own accumulator. `on_done` is called once per
    /// finished job, from whichever worker thread ran it. Results are
    /// returned in job order.
    pub fn process_batch<F>(&self, jobs: &[BatchJob], on_done: F) -> Vec<Result<ReflowStats>>
    where
        F: Fn(&BatchJob, &Result<ReflowStats>) + Sync,
    {
        jobs.par_iter()
            .map(|job| {
                let outcome = self.process_file(&job.input).and_then(|result| {
                    result.write_to(&job.output)?;
                    Ok(result.stats)
                });
                if let Err(ref e) = outcome {
                    log::warn!("Failed to reflow {}: {}", job.input.display(), e);
                }
                on_done(job, &outcome);
                outcome
            })
            .collect()
    }
}

/// Result of reflowing one source.
#[derive(Debug, Clone)]
pub struct UncolumnResult {
    /// Final normalized text
    pub text: String,
    /// Fragments in reading order, before normalization
    pub fragments: Vec<String>,
    /// Page-end markers in encounter order
    pub markers: Vec<PageMarker>,
    /// Reflow statistics
    pub stats: ReflowStats,
    source: Option<String>,
}

impl UncolumnResult {
    /// Fragments joined with single spaces, before normalization.
    pub fn flattened(&self) -> String {
        self.fragments.join(" ")
    }

    /// Path or label of the source, if read from one.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Write the normalized text to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        source::write_sink(path, &self.text)
    }

    /// Summary of this reflow.
    pub fn report(&self) -> ReflowReport {
        ReflowReport {
            source: self.source.clone(),
            stats: self.stats.clone(),
            markers: self.markers.clone(),
        }
    }

    /// Summary of this reflow as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.report(), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "JOHN 10:15 3 MARY 10:16";

    #[test]
    fn test_reflow_lines_scenario() {
        let out = reflow_lines([
            "alpha    beta\n",
            "JOHN 10:15 3 MARY 10:16\n",
            "gamma    delta\n",
        ]);
        assert_eq!(out, "alpha beta gamma delta");
    }

    #[test]
    fn test_reflow_str_strips_page_numbers() {
        let text = format!("The end.    Page two.\n{}\n4 Next page.\n", MARKER);
        assert_eq!(reflow_str(&text), "The end. Page two. Next page.");
    }

    #[test]
    fn test_reflow_reader() {
        let input = "left    right\r\nmore\r\n";
        let out = reflow_reader(input.as_bytes()).unwrap();
        assert_eq!(out, "left more right");
    }

    #[test]
    fn test_reflow_reader_invalid_utf8() {
        let result = reflow_reader(&b"abc\xc3"[..]);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn test_builder_default() {
        let builder = Uncolumn::default();
        assert_eq!(builder.normalize_options(), &NormalizeOptions::standard());
    }

    #[test]
    fn test_builder_with_preset() {
        let builder = Uncolumn::new().with_preset(NormalizePreset::Unicode);
        assert!(builder.normalize_options().normalize_unicode);

        let builder = Uncolumn::new().with_normalize(NormalizeOptions::raw());
        assert!(!builder.normalize_options().collapse_whitespace);
    }

    #[test]
    fn test_result_fields() {
        let result = Uncolumn::new().process_str("a    b\nJOHN 10:15 7 MARY 10:16\nc\n");
        assert_eq!(result.fragments, vec!["a", "b", "c"]);
        assert_eq!(result.flattened(), "a b c");
        assert_eq!(result.markers[0].page(), Some(7));
        assert_eq!(result.stats.word_count, 3);
        assert_eq!(result.stats.char_count, 3);
        assert!(result.source().is_none());
    }

    #[test]
    fn test_result_report_json() {
        let result = Uncolumn::new()
            .process_reader("x\nA 1:00 2 B 1:01\n".as_bytes(), "<stdin>")
            .unwrap();
        assert_eq!(result.source(), Some("<stdin>"));

        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("\"source\":\"<stdin>\""));
        assert!(json.contains("\"marker_count\":1"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(reflow_str(""), "");
        assert_eq!(reflow_str("\n\n   \n"), "");
        assert_eq!(reflow_str(MARKER), "");
    }
}
