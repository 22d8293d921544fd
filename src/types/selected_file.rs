// src/types/selected_file.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::utils::get_file_extension;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const ZIP_MIME: &str = "application/zip";
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Map a file name to the MIME type the upload control recognises
pub fn mime_for_filename(file_name: &str) -> &'static str {
    match get_file_extension(file_name).as_deref() {
        Some("pdf") => PDF_MIME,
        Some("docx") => DOCX_MIME,
        Some("zip") => ZIP_MIME,
        _ => UNKNOWN_MIME,
    }
}

/// A file picked through drop or browse, held in memory until uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_for_filename(&name).to_string();
        Self {
            name,
            content,
            mime_type,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Read a file from disk, naming it after the last path component
    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?
            .to_string();

        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self::new(name, content))
    }
}
