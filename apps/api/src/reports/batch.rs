//! Directory sweep: classify and extract every `.rpt`/`.log` file in a
//! directory into a single `ReportCollection`.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use super::classify::classify;
use super::record::{ReportCollection, ReportKind, ReportRecord};
use super::{log, power, timing, utilization};
use crate::errors::AppError;

/// Parses every recognized report file directly under `dir` (non-recursive).
///
/// File names are sorted before processing so the collection and its JSON
/// dump come out in the same order on every platform. Files ending in `.log`
/// always take the log strategy; `.rpt` files are classified by content and
/// dispatched, with unrecognized dialects silently excluded. Entries that
/// cannot be read mid-sweep are skipped with a warning rather than aborting
/// the batch.
pub fn collect(dir: &Path) -> Result<ReportCollection, AppError> {
    if !dir.is_dir() {
        return Err(AppError::InvalidDirectory(dir.display().to_string()));
    }

    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.file_name().to_string_lossy().into_owned()),
            Err(e) => {
                warn!("skipping unreadable directory entry: {e}");
                None
            }
        })
        .collect();
    names.sort();

    let mut reports = ReportCollection::new();
    for name in names {
        if !(name.ends_with(".rpt") || name.ends_with(".log")) {
            continue;
        }
        let path = dir.join(&name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("skipping unreadable file {}: {e}", path.display());
                continue;
            }
        };
        // Invalid byte sequences are replaced, never fatal.
        let content = String::from_utf8_lossy(&bytes);

        let record = if name.ends_with(".log") {
            ReportRecord::Log(log::extract_log(&content))
        } else {
            match classify(&content) {
                ReportKind::Power => ReportRecord::Power(power::extract_power(&content)),
                ReportKind::Utilization => {
                    ReportRecord::Utilization(utilization::extract_utilization(&content))
                }
                ReportKind::Timing => ReportRecord::Timing(timing::extract_timing(&content)),
                ReportKind::Log => ReportRecord::Log(log::extract_log(&content)),
                ReportKind::Unknown => {
                    debug!("skipping {name}: unrecognized report dialect");
                    continue;
                }
            }
        };
        reports.insert(name, record);
    }

    Ok(reports)
}

/// Writes the pretty-printed JSON dump of a collection to `path`.
pub fn persist(reports: &ReportCollection, path: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(reports).map_err(io::Error::other)?;
    fs::write(path, json)
}
