//! User-facing messages, the error list and the JSON report.

use std::path::Path;

use recolor_common::{RecolorError, TargetFormat};
use recolor_core::ConversionResult;
use serde::Serialize;

use crate::run::Source;

/// `Cannot convert N color(s). a, b, ...` listing at most `max_shown` tokens.
pub fn error_message(errors: &[String], max_shown: usize) -> String {
    let displayed = errors
        .iter()
        .take(max_shown)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Cannot convert {} color(s). {displayed}", errors.len())
}

/// Informational line for a conversion that changed nothing.
pub fn notice(result: &ConversionResult, selection: bool) -> Option<&'static str> {
    if result.matches_found() == 0 {
        Some(if selection {
            "No color declarations found in the selection."
        } else {
            "No color declarations found in the document."
        })
    } else if result.is_noop() {
        Some("Found color declarations, but none could be converted.")
    } else {
        None
    }
}

/// Write every failed token to `path`, one per line.
pub fn write_error_list(path: &Path, errors: &[String]) -> Result<(), RecolorError> {
    let mut content = errors.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Per-input entry of the JSON report.
#[derive(Debug, Serialize)]
pub struct InputReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    pub matches_found: usize,
    pub edits_applied: usize,
    pub errors: Vec<String>,
    pub summary: String,
    /// Converted text, present when it was not written back to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl InputReport {
    pub fn converted(source: &Source, result: &ConversionResult, written: bool) -> Self {
        Self {
            input: source.to_string(),
            failure: None,
            matches_found: result.matches_found(),
            edits_applied: result.edits_applied,
            errors: result.error_colors.clone(),
            summary: result.summary(),
            output: (!written).then(|| result.output.clone()),
        }
    }

    pub fn failed(source: &Source, error: &RecolorError) -> Self {
        Self {
            input: source.to_string(),
            failure: Some(error.to_string()),
            matches_found: 0,
            edits_applied: 0,
            errors: Vec::new(),
            summary: "not converted".to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub format: TargetFormat,
    pub precision: u8,
    pub inputs: Vec<InputReport>,
}

impl Report {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {e}\"}}"))
    }
}
