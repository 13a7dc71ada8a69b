//! Turns a [`PresentationModel`] snapshot into terminal output.

use crate::config::OutputFormat;
use crate::core::{PageState, PresentationModel};
use crate::utils::error::{HiringError, Result};
use std::fmt::Write;

pub fn render(model: &PresentationModel, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(model)),
        OutputFormat::Json => render_json(model),
        OutputFormat::Csv => render_csv(model),
    }
}

pub fn render_text(model: &PresentationModel) -> String {
    match model.status {
        PageState::Loading => "Loading candidates...".to_string(),
        PageState::Failed => format!("{}\nRetry to try again.", model.error_message),
        PageState::Success if model.groups.is_empty() => "No candidates.".to_string(),
        PageState::Success => {
            let mut out = String::new();
            for group in &model.groups {
                let _ = writeln!(out, "List {}", group.list_id);
                for candidate in &group.candidates {
                    let _ = writeln!(
                        out,
                        "  #{} {}",
                        candidate.id,
                        candidate.name.as_deref().unwrap_or_default()
                    );
                }
            }
            out.truncate(out.trim_end().len());
            out
        }
    }
}

pub fn render_json(model: &PresentationModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(model)?)
}

/// One row per candidate, in presentation order.
pub fn render_csv(model: &PresentationModel) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["listId", "id", "name"])?;
    for group in &model.groups {
        for candidate in &group.candidates {
            writer.write_record([
                group.list_id.to_string(),
                candidate.id.to_string(),
                candidate.name.clone().unwrap_or_default(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HiringError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| HiringError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
