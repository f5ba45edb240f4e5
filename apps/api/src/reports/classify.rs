use super::record::ReportKind;

/// Assigns a report kind from characteristic substrings of the raw content.
/// The checks are a strict priority chain: the first rule that matches wins,
/// regardless of what later rules would also match.
pub fn classify(content: &str) -> ReportKind {
    if content.contains("Total On-Chip Power") {
        ReportKind::Power
    } else if content.contains("Slice LUTs") || content.contains("LUT as Logic") {
        ReportKind::Utilization
    } else if content.contains("Slack") && content.contains("Data Path Delay") {
        ReportKind::Timing
    } else if content.contains("Vivado") && content.contains("INFO:") {
        ReportKind::Log
    } else {
        ReportKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_marker_classifies_as_power() {
        assert_eq!(classify("| Total On-Chip Power (W) | 0.162 |"), ReportKind::Power);
    }

    #[test]
    fn test_slice_luts_classifies_as_utilization() {
        assert_eq!(classify("| Slice LUTs | 4520 |"), ReportKind::Utilization);
    }

    #[test]
    fn test_lut_as_logic_classifies_as_utilization() {
        assert_eq!(classify("LUT as Logic usage summary"), ReportKind::Utilization);
    }

    #[test]
    fn test_timing_requires_slack_and_data_path_delay() {
        assert_eq!(
            classify("Slack (MET): 0.5ns\nData Path Delay: 4.2ns"),
            ReportKind::Timing
        );
        assert_eq!(classify("Slack (MET): 0.5ns"), ReportKind::Unknown);
    }

    #[test]
    fn test_log_requires_vivado_and_info() {
        assert_eq!(
            classify("Vivado v2023.2\nINFO: [Synth 8-7075] helper launched"),
            ReportKind::Log
        );
        assert_eq!(classify("Vivado v2023.2"), ReportKind::Unknown);
    }

    #[test]
    fn test_empty_content_is_unknown() {
        assert_eq!(classify(""), ReportKind::Unknown);
    }

    #[test]
    fn test_priority_power_beats_all_later_rules() {
        let mixed = "Total On-Chip Power (W) 0.2\n\
                     Slice LUTs | 10 |\n\
                     Slack: 1.0 Data Path Delay: 2.0\n\
                     Vivado INFO: everything at once";
        assert_eq!(classify(mixed), ReportKind::Power);
    }

    #[test]
    fn test_priority_utilization_beats_timing_and_log() {
        let mixed = "Slice LUTs | 10 |\nSlack: 1.0\nData Path Delay: 2.0\nVivado INFO:";
        assert_eq!(classify(mixed), ReportKind::Utilization);
    }

    #[test]
    fn test_priority_timing_beats_log() {
        let mixed = "Slack: 1.0\nData Path Delay: 2.0\nVivado INFO:";
        assert_eq!(classify(mixed), ReportKind::Timing);
    }
}
