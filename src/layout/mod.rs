//! Two-column layout handling: splitting lines and buffering columns per page.

mod accumulator;
mod columns;

pub use accumulator::{reflow_fragments, LineKind, ReflowAccumulator, Reflowed};
pub use columns::{split_columns, ColumnSplit, COLUMN_GAP};

/// Split text into lines, accepting `\n`, `\r\n` and lone `\r` endings.
///
/// A trailing line terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
