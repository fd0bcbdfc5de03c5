//! Rendering module: normalizing the flattened text and reporting results.

mod cleanup;
mod json;
mod result;

pub use cleanup::{NormalizeOptions, NormalizePreset, TextNormalizer};
pub use json::{to_json, JsonFormat};
pub use result::{ReflowReport, ReflowStats};

/// Normalize text with the standard rewrites.
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().process(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_standard() {
        assert_eq!(normalize("Done.  4\tNext"), "Done. Next");
    }
}
