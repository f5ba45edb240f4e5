//! Prompt construction for the report-analysis LLM call.

use crate::reports::record::ReportCollection;

/// System prompt for the analysis call.
pub const ANALYSIS_SYSTEM: &str = "You are a hardware synthesis and FPGA analysis expert.";

const PROMPT_PREAMBLE: &str = "You are an expert FPGA design assistant.\n\
    Given the following implementation reports, summarize key insights and provide possible optimization suggestions.\n\n";

const PROMPT_INSTRUCTION: &str = "Please summarize the timing, utilization, power and log status. \
    If any problems are found (e.g. negative slack, critical warnings), suggest fixes.\n";

/// Serializes the collection verbatim into the prompt body: a fixed
/// preamble, one pretty-JSON section per file, and a fixed instruction
/// footer. The JSON carries the omission semantics with it: an absent
/// stage flag reads as "not yet done".
pub fn build_prompt(reports: &ReportCollection) -> String {
    let mut prompt = String::from(PROMPT_PREAMBLE);
    for (file, record) in reports {
        prompt.push_str(&format!("--- {file} ---\n"));
        prompt.push_str(
            &serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string()),
        );
        prompt.push_str("\n\n");
    }
    prompt.push_str(PROMPT_INSTRUCTION);
    prompt
}
