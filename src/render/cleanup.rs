//! Text normalization applied to the flattened transcript.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalization preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePreset {
    /// No rewrites: output is the flattened text as joined
    Raw,
    /// Strip page numbers after sentence punctuation and collapse whitespace
    #[default]
    Standard,
    /// Unicode NFC first, then the standard rewrites
    Unicode,
}

/// Options for text normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form before the other rewrites
    pub normalize_unicode: bool,

    /// Drop digit runs that follow `.`, `!` or `?` (stray page numbers)
    pub strip_sentence_numbers: bool,

    /// Replace every whitespace run with a single space
    pub collapse_whitespace: bool,
}

impl NormalizeOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        match preset {
            NormalizePreset::Raw => Self::raw(),
            NormalizePreset::Standard => Self::standard(),
            NormalizePreset::Unicode => Self::unicode(),
        }
    }

    /// No rewrites at all.
    pub fn raw() -> Self {
        Self {
            normalize_unicode: false,
            strip_sentence_numbers: false,
            collapse_whitespace: false,
        }
    }

    /// Standard rewrites.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: false,
            strip_sentence_numbers: true,
            collapse_whitespace: true,
        }
    }

    /// Standard rewrites preceded by NFC normalization.
    pub fn unicode() -> Self {
        Self {
            normalize_unicode: true,
            ..Self::standard()
        }
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable sentence-number stripping.
    pub fn with_sentence_numbers_stripped(mut self, enabled: bool) -> Self {
        self.strip_sentence_numbers = enabled;
        self
    }

    /// Enable or disable whitespace collapsing.
    pub fn with_whitespace_collapsed(mut self, enabled: bool) -> Self {
        self.collapse_whitespace = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Text normalization pipeline.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    options: NormalizeOptions,
    sentence_number_regex: Regex,
    whitespace_regex: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            sentence_number_regex: Regex::new(r"([.!?])\s*\d+")
                .expect("sentence number pattern is valid"),
            whitespace_regex: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        }
    }

    /// Create a normalizer from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        Self::new(NormalizeOptions::from_preset(preset))
    }

    /// Options in effect.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Run the enabled rewrites over `text`.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.normalize_unicode {
            result = result.nfc().collect();
        }

        // Must run before whitespace collapse: the removed digits often sit
        // between two spaces, which the collapse then merges.
        if self.options.strip_sentence_numbers {
            result = self.strip_sentence_numbers(&result);
        }

        if self.options.collapse_whitespace {
            result = self.collapse_whitespace(&result);
        }

        result
    }

    /// Replace `<punct><ws?><digits>` with `<punct>`.
    pub fn strip_sentence_numbers(&self, text: &str) -> String {
        self.sentence_number_regex
            .replace_all(text, "$1")
            .into_owned()
    }

    /// Replace every run of whitespace with one space.
    pub fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace_regex.replace_all(text, " ").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_number_removal() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.process("Hello. 23 World"), "Hello. World");
        assert_eq!(normalizer.process("Wait! 7Next"), "Wait!Next");
        assert_eq!(normalizer.process("Really?12 yes"), "Really? yes");
    }

    #[test]
    fn test_strip_without_collapse() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.strip_sentence_numbers("Hello. 23 World"), "Hello. World");
        assert_eq!(normalizer.strip_sentence_numbers("a.\n\t4b"), "a.b");
    }

    #[test]
    fn test_sentence_number_global_replace() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.strip_sentence_numbers("One. 1 Two! 2 Three? 3 end"),
            "One. Two! Three? end"
        );
        // decimal numbers lose their fraction as well
        assert_eq!(normalizer.strip_sentence_numbers("pi is 3.14"), "pi is 3.");
    }

    #[test]
    fn test_non_overlapping_matches() {
        let normalizer = TextNormalizer::default();
        // after `.1` is consumed, the next `.` starts a new match
        assert_eq!(normalizer.strip_sentence_numbers("a.1.2"), "a..");
        assert_eq!(normalizer.strip_sentence_numbers("..5"), "..");
    }

    #[test]
    fn test_numbers_elsewhere_kept() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.process("page 12 of 30"), "page 12 of 30");
        assert_eq!(normalizer.process("Hello, 23 World"), "Hello, 23 World");
    }

    #[test]
    fn test_whitespace_collapse() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.collapse_whitespace("a \t\n  b"), "a b");
        assert_eq!(normalizer.collapse_whitespace("  lead"), " lead");
        assert_eq!(normalizer.collapse_whitespace("trail \n"), "trail ");
        assert_eq!(normalizer.collapse_whitespace(""), "");
    }

    #[test]
    fn test_whitespace_collapse_idempotent() {
        let normalizer = TextNormalizer::default();
        let once = normalizer.collapse_whitespace("x \u{00A0}\u{2003} y\n\n z");
        assert_eq!(normalizer.collapse_whitespace(&once), once);
    }

    #[test]
    fn test_raw_preset() {
        let normalizer = TextNormalizer::from_preset(NormalizePreset::Raw);
        assert_eq!(normalizer.process("Hello. 23  World"), "Hello. 23  World");
    }

    #[test]
    fn test_unicode_preset() {
        let normalizer = TextNormalizer::from_preset(NormalizePreset::Unicode);
        // e + combining acute accent composes to a single code point
        let result = normalizer.process("cafe\u{0301}.  4  ok");
        assert_eq!(result, "caf\u{00E9}. ok");
    }

    #[test]
    fn test_options_builder() {
        let options = NormalizeOptions::raw()
            .with_unicode(true)
            .with_whitespace_collapsed(true);
        assert!(options.normalize_unicode);
        assert!(options.collapse_whitespace);
        assert!(!options.strip_sentence_numbers);

        let options = NormalizeOptions::standard().with_sentence_numbers_stripped(false);
        assert!(!options.strip_sentence_numbers);
        assert_eq!(NormalizeOptions::default(), NormalizeOptions::standard());
    }
}
