//! Timing report extraction: worst slack.

use std::sync::LazyLock;

use regex::Regex;

use super::record::TimingReport;

// "Slack (VIOLATED): -0.045ns" / "Slack: 0.312" / "Slack: inf".
// Case-insensitive throughout; "inf" means the path is unconstrained.
static SLACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Slack(?:\s*\(VIOLATED\))?\s*:\s*(inf|-?\d+(?:\.\d+)?)").unwrap()
});

pub fn extract_timing(content: &str) -> TimingReport {
    let slack = SLACK_RE.captures(content).and_then(|caps| {
        let raw = caps.get(1)?.as_str();
        if raw.eq_ignore_ascii_case("inf") {
            Some(f64::INFINITY)
        } else {
            raw.parse().ok()
        }
    });
    TimingReport { slack }
}
