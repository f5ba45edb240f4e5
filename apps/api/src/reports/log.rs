//! Build-log extraction: ERROR/WARNING lines and stage completion flags.

use super::record::{LogReport, StageStatus};

/// Collects every line containing `ERROR` or `WARNING` (verbatim,
/// case-sensitive) in file order, and computes the three stage flags
/// independently. Stages that did not complete stay `None` and are omitted
/// from the serialized record.
pub fn extract_log(content: &str) -> LogReport {
    let errors = matching_lines(content, "ERROR");
    let warnings = matching_lines(content, "WARNING");

    let synthesis = content.contains("synth_design completed successfully")
        || content.contains("Finished Synth");
    let implementation = content.contains("place_design completed successfully")
        && content.contains("route_design completed successfully");
    let bitstream = content.contains("write_bitstream completed successfully");

    LogReport {
        errors,
        warnings,
        stage_status: StageStatus {
            synthesis_completed: synthesis.then_some(true),
            implementation_completed: implementation.then_some(true),
            bitstream_generated: bitstream.then_some(true),
        },
    }
}

fn matching_lines(content: &str, needle: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.contains(needle))
        .map(str::to_owned)
        .collect()
}
