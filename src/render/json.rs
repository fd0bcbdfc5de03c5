//! JSON rendering for reflow reports.

use crate::error::{Error, Result};

use super::ReflowReport;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON.
pub fn to_json(report: &ReflowReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::PageMarkerDetector;

    fn sample_report() -> ReflowReport {
        let marker = PageMarkerDetector::new()
            .parse("JOHN 10:15 3 MARY 10:16")
            .unwrap();
        let mut report = ReflowReport {
            source: Some("hearing.txt".to_string()),
            markers: vec![marker],
            ..Default::default()
        };
        report.stats.marker_count = 1;
        report
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_report(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"source\""));
        assert!(json.contains("hearing.txt"));
        assert!(json.contains("\"page_number\": \"3\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let report = ReflowReport::default();
        let json = to_json(&report, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(!json.contains("\"source\""));
        assert!(json.contains("\"markers\":[]"));
    }

    #[test]
    fn test_json_roundtrip_stats() {
        let json = to_json(&sample_report(), JsonFormat::Compact).unwrap();
        let parsed: ReflowReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.stats.marker_count, 1);
        assert_eq!(parsed.markers[0].right_label, "MARY");
    }
}
