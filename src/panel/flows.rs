// src/panel/flows.rs
//! The two upload flows as plain sequential tasks

use anyhow::{Context, Result};

use crate::app_log;
use crate::core::ResumeBackend;
use crate::types::{AnalysisResult, RankRequest, RankedResume, SelectedFile};

/// Upload one resume and return the backend's analysis untouched
pub async fn analyze_single<B>(backend: &B, file: &SelectedFile) -> Result<AnalysisResult>
where
    B: ResumeBackend + ?Sized,
{
    backend
        .upload(file)
        .await
        .with_context(|| format!("Failed to analyze {}", file.name))
}

/// Upload a zip, then rank what the backend extracted from it.
/// The ranking call is only made once the upload succeeded.
pub async fn upload_and_rank<B>(
    backend: &B,
    file: &SelectedFile,
    job_description: &str,
) -> Result<Vec<RankedResume>>
where
    B: ResumeBackend + ?Sized,
{
    let resumes = backend
        .upload_zip(file)
        .await
        .with_context(|| format!("Failed to upload archive {}", file.name))?;

    app_log!(
        info,
        "Ranking {} resumes from {} against job description ({} chars)",
        resumes.len(),
        file.name,
        job_description.chars().count()
    );

    let request = RankRequest {
        job_description: job_description.to_string(),
        resumes,
    };

    backend
        .rank(&request)
        .await
        .context("Failed to rank resumes")
}
