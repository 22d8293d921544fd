// src/render.rs
//! Plain-text rendering of the shell and panel

use std::fmt::Write;

use crate::panel::Panel;
use crate::shell::Shell;
use crate::types::{RankedResume, UploadAction};
use crate::utils::format_score;

pub const DROP_ZONE_HINT: &str = "Drag & drop a resume (PDF/DOCX) or click to select";
pub const LOADING_LABEL: &str = "Uploading...";

pub fn render_toggles(shell: &Shell) -> String {
    shell
        .toggles()
        .iter()
        .map(|toggle| {
            if toggle.active {
                format!("[*] {}", toggle.label)
            } else {
                format!("[ ] {}", toggle.label)
            }
        })
        .collect::<Vec<_>>()
        .join("   ")
}

pub fn drop_zone_caption(panel: &Panel) -> &str {
    panel
        .selected_file()
        .map(|file| file.name.as_str())
        .unwrap_or(DROP_ZONE_HINT)
}

pub fn button_label(panel: &Panel, action: UploadAction) -> &'static str {
    if panel.is_loading() {
        LOADING_LABEL
    } else {
        action.button_label()
    }
}

pub fn render_button(panel: &Panel, action: UploadAction) -> String {
    let label = button_label(panel, action);
    if panel.can_upload() {
        format!("<{}>", label)
    } else {
        format!("<{}> (disabled)", label)
    }
}

pub fn ranked_line(resume: &RankedResume) -> String {
    format!("{} - {}% match", resume.filename, format_score(resume.score))
}

/// Error line, extracted data and ranking, each only when present
pub fn render_results(panel: &Panel) -> String {
    let mut out = String::new();

    if let Some(error) = panel.error() {
        let _ = writeln!(out, "Error: {}", error);
    }

    if let Some(analysis) = panel.analysis().value() {
        let pretty = serde_json::to_string_pretty(analysis).unwrap_or_else(|_| analysis.to_string());
        let _ = writeln!(out, "Extracted Data");
        let _ = writeln!(out, "{}", pretty);
    }

    let ranked = panel.ranked_resumes();
    if !ranked.is_empty() {
        let _ = writeln!(out, "Ranked Resumes");
        for resume in ranked {
            let _ = writeln!(out, "  {}", ranked_line(resume));
        }
    }

    out
}

pub fn render_panel(panel: &Panel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Job Description");
    if panel.job_description().is_empty() {
        let _ = writeln!(out, "  (empty)");
    } else {
        for line in panel.job_description().lines() {
            let _ = writeln!(out, "  {}", line);
        }
    }
    let _ = writeln!(out, "File: {}", drop_zone_caption(panel));
    let _ = writeln!(
        out,
        "{}  {}",
        render_button(panel, UploadAction::Analyze),
        render_button(panel, UploadAction::Rank)
    );
    out.push_str(&render_results(panel));

    out
}

pub fn render_shell(shell: &Shell) -> String {
    format!(
        "AI Resume Scanner\n{}\n\n{}",
        render_toggles(shell),
        render_panel(shell.panel())
    )
}
