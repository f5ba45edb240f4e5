//! Utilization report extraction: used/available/percentage triples for the
//! five fixed resource categories.

use std::sync::LazyLock;

use regex::Regex;

use super::record::{ResourceTable, ResourceUsage, UtilizationReport};

fn row_regex(name: &str) -> Regex {
    // <name> | <used> | <fixed> | <prohibited> | <available> | <pct> |
    Regex::new(&format!(
        r"{}\s*\|\s*(\d+)\s*\|\s*\d+\s*\|\s*\d+\s*\|\s*(\d+)\s*\|\s*([<>]?\d+\.\d+)\s*\|",
        regex::escape(name)
    ))
    .unwrap()
}

static LUTS_ROW: LazyLock<Regex> = LazyLock::new(|| row_regex("Slice LUTs"));
static REGISTERS_ROW: LazyLock<Regex> = LazyLock::new(|| row_regex("Slice Registers"));
static BRAM_ROW: LazyLock<Regex> = LazyLock::new(|| row_regex("Block RAM Tile"));
static DSP_ROW: LazyLock<Regex> = LazyLock::new(|| row_regex("DSPs"));
static IO_ROW: LazyLock<Regex> = LazyLock::new(|| row_regex("Bonded IOB"));

/// Pulls the resource table out of a utilization report. A category with no
/// matching row keeps the all-zero default.
pub fn extract_utilization(content: &str) -> UtilizationReport {
    UtilizationReport {
        resources: ResourceTable {
            luts: scan_row(content, &LUTS_ROW),
            registers: scan_row(content, &REGISTERS_ROW),
            bram: scan_row(content, &BRAM_ROW),
            dsp: scan_row(content, &DSP_ROW),
            io: scan_row(content, &IO_ROW),
        },
    }
}

fn scan_row(content: &str, row: &Regex) -> ResourceUsage {
    match row.captures(content) {
        Some(caps) => ResourceUsage {
            used: caps[1].parse().unwrap_or(0),
            available: caps[2].parse().unwrap_or(0),
            utilization_percentage: parse_percentage(&caps[3]),
        },
        None => ResourceUsage::default(),
    }
}

/// A "<" prefix means the tool printed a "less than X%" bound; the value is
/// clamped to 0.0. A ">" prefix keeps the numeric part.
fn parse_percentage(raw: &str) -> f64 {
    if raw.starts_with('<') {
        0.0
    } else {
        raw.trim_start_matches('>').parse().unwrap_or(0.0)
    }
}
