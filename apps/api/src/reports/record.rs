//! Typed records produced by the report extractors.
//!
//! Every record carries a `type` tag equal to its report kind, and every
//! kind has a fixed field set: a missing match becomes an explicit `null`
//! or a zeroed default, never an omitted key. The one documented exception
//! is `StageStatus`, where only stages that completed appear in the
//! serialized output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four recognized report dialects plus the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Power,
    Utilization,
    Timing,
    Log,
    Unknown,
}

/// One extracted record, tagged with its report kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ReportRecord {
    Power(PowerReport),
    Utilization(UtilizationReport),
    Timing(TimingReport),
    Log(LogReport),
}

/// Extracted power figures in watts. A label with no matching number is
/// `None`, serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerReport {
    #[serde(rename = "Total")]
    pub total: Option<f64>,
    #[serde(rename = "Dynamic")]
    pub dynamic: Option<f64>,
    #[serde(rename = "Static")]
    pub static_power: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationReport {
    pub resources: ResourceTable,
}

/// The five resource categories reported by the utilization table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTable {
    pub luts: ResourceUsage,
    pub registers: ResourceUsage,
    pub bram: ResourceUsage,
    pub dsp: ResourceUsage,
    pub io: ResourceUsage,
}

/// Usage triple for one resource category. A category with no matching
/// table row keeps the all-zero default rather than going null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub used: u64,
    pub available: u64,
    pub utilization_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Worst slack in nanoseconds. `Some(f64::INFINITY)` for unconstrained
    /// designs ("Slack: inf"), `None` when the report carries no slack line.
    #[serde(with = "slack_format")]
    pub slack: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stage_status: StageStatus,
}

/// Build-stage completion flags. Only stages that completed are present in
/// the serialized form; an absent stage means "not yet done", which is the
/// contract downstream prompt text relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthesis_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitstream_generated: Option<bool>,
}

/// Aggregate result of a directory sweep, keyed by file name. A `BTreeMap`
/// keeps the collection (and its JSON dump) in sorted, platform-independent
/// order.
pub type ReportCollection = BTreeMap<String, ReportRecord>;

/// Slack (de)serialization. Plain JSON has no representation for Infinity,
/// so positive infinity is carried as the string `"inf"`; finite values are
/// numbers and absence is `null`.
mod slack_format {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(slack: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match slack {
            None => serializer.serialize_none(),
            Some(v) if v.is_infinite() && v.is_sign_positive() => serializer.serialize_str("inf"),
            Some(v) => serializer.serialize_f64(*v),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(v)) => Ok(Some(v)),
            Some(Raw::Text(s)) if s.eq_ignore_ascii_case("inf") => Ok(Some(f64::INFINITY)),
            Some(Raw::Text(s)) => Err(D::Error::invalid_value(
                Unexpected::Str(&s),
                &"a number or the string \"inf\"",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_record_carries_type_tag() {
        let record = ReportRecord::Power(PowerReport {
            total: Some(0.162),
            dynamic: Some(0.095),
            static_power: None,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "power");
        assert_eq!(json["Total"], 0.162);
        assert_eq!(json["Static"], serde_json::Value::Null);
    }

    #[test]
    fn test_utilization_record_type_tag_and_zero_defaults() {
        let record = ReportRecord::Utilization(UtilizationReport {
            resources: ResourceTable::default(),
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "utilization");
        assert_eq!(json["resources"]["dsp"]["used"], 0);
        assert_eq!(json["resources"]["dsp"]["utilization_percentage"], 0.0);
    }

    #[test]
    fn test_slack_infinity_serializes_as_inf_string() {
        let record = TimingReport {
            slack: Some(f64::INFINITY),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"inf\""));
    }

    #[test]
    fn test_slack_infinity_round_trips() {
        let record = TimingReport {
            slack: Some(f64::INFINITY),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: TimingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_slack_finite_round_trips_as_number() {
        let record = TimingReport {
            slack: Some(-0.045),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["slack"], -0.045);
        let back: TimingReport = serde_json::from_str(&json.to_string()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_slack_null_round_trips() {
        let record = TimingReport { slack: None };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"slack":null}"#);
        let back: TimingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_stage_status_omits_absent_stages() {
        let record = LogReport {
            errors: vec![],
            warnings: vec![],
            stage_status: StageStatus {
                synthesis_completed: Some(true),
                implementation_completed: None,
                bitstream_generated: None,
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("synthesis_completed"));
        assert!(!json.contains("implementation_completed"));
        assert!(!json.contains("bitstream_generated"));
    }

    #[test]
    fn test_stage_status_absent_stages_deserialize_to_none() {
        let json = r#"{"synthesis_completed":true}"#;
        let status: StageStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.synthesis_completed, Some(true));
        assert_eq!(status.implementation_completed, None);
    }
}
