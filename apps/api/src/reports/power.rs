//! Power report extraction: Total / Dynamic / Static figures in watts.

use std::sync::LazyLock;

use regex::Regex;

use super::record::PowerReport;

/// A labeled number search. The label's own line is tried first; only when
/// that line carries no number does the search widen to the rest of the
/// content. The wider scan can attribute a number from an unrelated later
/// line to the label, so it is strictly a fallback.
struct LabelScan {
    line: Regex,
    wide: Regex,
}

impl LabelScan {
    fn new(label: &str) -> Self {
        let label = regex::escape(label);
        Self {
            line: Regex::new(&format!(r"{label}[^\r\n]*?(\d+(?:\.\d+)?)")).unwrap(),
            wide: Regex::new(&format!(r"(?s){label}.*?(\d+(?:\.\d+)?)")).unwrap(),
        }
    }

    fn first_decimal(&self, content: &str) -> Option<f64> {
        self.line
            .captures(content)
            .or_else(|| self.wide.captures(content))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

static TOTAL: LazyLock<LabelScan> = LazyLock::new(|| LabelScan::new("Total On-Chip Power"));
static DYNAMIC: LazyLock<LabelScan> = LazyLock::new(|| LabelScan::new("Dynamic"));
static STATIC: LazyLock<LabelScan> = LazyLock::new(|| LabelScan::new("Static Power"));

/// Pulls the three power figures out of a power report. Each label is
/// searched independently; a label with no number anywhere after it yields
/// `None` for that field alone.
pub fn extract_power(content: &str) -> PowerReport {
    PowerReport {
        total: TOTAL.first_decimal(content),
        dynamic: DYNAMIC.first_decimal(content),
        static_power: STATIC.first_decimal(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POWER_RPT: &str = "\
+--------------------------+--------+
| Total On-Chip Power (W)  | 0.162  |
| Design Power Budget (W)  | Unspecified* |
| Dynamic (W)              | 0.095  |
| Static Power (W)         | 0.067  |
+--------------------------+--------+";

    #[test]
    fn test_extracts_all_three_figures() {
        let report = extract_power(POWER_RPT);
        assert_eq!(report.total, Some(0.162));
        assert_eq!(report.dynamic, Some(0.095));
        assert_eq!(report.static_power, Some(0.067));
    }

    #[test]
    fn test_missing_dynamic_is_null_others_unaffected() {
        let content = "| Total On-Chip Power (W) | 0.162 |\n| Static Power (W) | 0.067 |";
        let report = extract_power(content);
        assert_eq!(report.total, Some(0.162));
        assert_eq!(report.dynamic, None);
        assert_eq!(report.static_power, Some(0.067));
    }

    #[test]
    fn test_no_labels_yields_all_null() {
        let report = extract_power("nothing resembling a power table");
        assert_eq!(report.total, None);
        assert_eq!(report.dynamic, None);
        assert_eq!(report.static_power, None);
    }

    #[test]
    fn test_label_occurrence_without_number_skips_to_labeled_row() {
        // The first "Dynamic" has no number on its line; the row further down
        // does. The same-line search must pick 0.095, not the stray 0.5.
        let content = "Dynamic power analysis\nsome context 0.5 here\n| Dynamic (W) | 0.095 |";
        let report = extract_power(content);
        assert_eq!(report.dynamic, Some(0.095));
    }

    #[test]
    fn test_wide_scan_fallback_when_no_labeled_line_has_a_number() {
        let content = "Total On-Chip Power exceeded budget\nsee summary table: 1.25 W";
        let report = extract_power(content);
        assert_eq!(report.total, Some(1.25));
    }

    #[test]
    fn test_integer_literal_is_accepted() {
        let report = extract_power("Total On-Chip Power estimate: 2 W");
        assert_eq!(report.total, Some(2.0));
    }
}
