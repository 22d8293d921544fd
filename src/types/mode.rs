// src/types/mode.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use super::selected_file::{DOCX_MIME, PDF_MIME, ZIP_MIME};

const SINGLE_ACCEPT: &[&str] = &[PDF_MIME, DOCX_MIME];
const BULK_ACCEPT: &[&str] = &[ZIP_MIME];

/// Upload mode chosen in the shell; decides which files the panel accepts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Single,
    Bulk,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Single, Mode::Bulk];

    /// MIME types the drop/select control lets through in this mode
    pub fn accepted_mime_types(self) -> &'static [&'static str] {
        match self {
            Mode::Single => SINGLE_ACCEPT,
            Mode::Bulk => BULK_ACCEPT,
        }
    }

    pub fn accepts(self, mime_type: &str) -> bool {
        self.accepted_mime_types().contains(&mime_type)
    }

    /// Label of the shell toggle that selects this mode
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Single => "Single Resume Upload",
            Mode::Bulk => "Bulk Resume Upload",
        }
    }

    /// Action the CLI runs when none is given explicitly
    pub fn default_action(self) -> UploadAction {
        match self {
            Mode::Single => UploadAction::Analyze,
            Mode::Bulk => UploadAction::Rank,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::Bulk => "bulk",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The panel's two action buttons
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UploadAction {
    /// Upload & Analyze
    Analyze,
    /// Upload Zip & Rank
    Rank,
}

impl UploadAction {
    pub fn button_label(self) -> &'static str {
        match self {
            UploadAction::Analyze => "Upload & Analyze",
            UploadAction::Rank => "Upload Zip & Rank",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UploadAction::Analyze => "analyze",
            UploadAction::Rank => "rank",
        }
    }
}

impl fmt::Display for UploadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
