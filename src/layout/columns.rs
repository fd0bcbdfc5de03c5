//! Column splitting for two-column lines.

/// Minimum run of spaces that separates the left column from the right.
pub const COLUMN_GAP: usize = 4;

const GAP: &str = "    ";

/// Left and right text of one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSplit {
    /// Left column text, trimmed
    pub left: String,
    /// Right column text, trimmed (empty for single-column lines)
    pub right: String,
}

impl ColumnSplit {
    /// Whether neither column carries any text.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Convert into a `(left, right)` tuple.
    pub fn into_pair(self) -> (String, String) {
        (self.left, self.right)
    }
}

/// Split a line into left and right column text.
///
/// The line is cut at the first run of [`COLUMN_GAP`] or more spaces. Only
/// U+0020 counts toward the gap. Later runs stay inside the right text.
///
/// # Example
/// ```
/// use uncolumn::split_columns;
///
/// let split = split_columns("hello    world");
/// assert_eq!(split.left, "hello");
/// assert_eq!(split.right, "world");
/// ```
pub fn split_columns(line: &str) -> ColumnSplit {
    match line.find(GAP) {
        Some(pos) => ColumnSplit {
            left: line[..pos].trim().to_string(),
            right: line[pos + COLUMN_GAP..].trim().to_string(),
        },
        None => ColumnSplit {
            left: line.trim().to_string(),
            right: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(line: &str) -> (String, String) {
        split_columns(line).into_pair()
    }

    #[test]
    fn test_split_four_spaces() {
        assert_eq!(pair("hello    world"), ("hello".into(), "world".into()));
    }

    #[test]
    fn test_three_spaces_is_single_column() {
        assert_eq!(pair("hello   world"), ("hello   world".into(), String::new()));
    }

    #[test]
    fn test_empty_line() {
        let split = split_columns("");
        assert!(split.is_empty());
        assert_eq!(split.into_pair(), (String::new(), String::new()));
    }

    #[test]
    fn test_whitespace_line() {
        assert!(split_columns("   \t  ").is_empty());
        assert!(split_columns("        \n").is_empty());
    }

    #[test]
    fn test_wide_gap() {
        assert_eq!(
            pair("  left text          right text\n"),
            ("left text".into(), "right text".into())
        );
    }

    #[test]
    fn test_only_first_gap_splits() {
        assert_eq!(pair("a    b    c"), ("a".into(), "b    c".into()));
    }

    #[test]
    fn test_gap_with_nothing_after() {
        assert_eq!(pair("left only      "), ("left only".into(), String::new()));
    }

    #[test]
    fn test_leading_gap_is_right_only() {
        assert_eq!(pair("        right side"), (String::new(), "right side".into()));
    }

    #[test]
    fn test_tabs_do_not_split() {
        assert_eq!(pair("a\t\t\t\tb"), ("a\t\t\t\tb".into(), String::new()));
    }

    #[test]
    fn test_unicode_text() {
        assert_eq!(pair("café    naïve"), ("café".into(), "naïve".into()));
    }
}
