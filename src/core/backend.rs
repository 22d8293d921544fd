// src/core/backend.rs
//! The seam between the panel and whatever answers its three backend calls

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{AnalysisResult, RankRequest, RankedResume, ResumeRecord, SelectedFile};

#[async_trait]
pub trait ResumeBackend: Send + Sync {
    /// `POST /upload` - one PDF/DOCX, returns the raw analysis payload
    async fn upload(&self, file: &SelectedFile) -> Result<AnalysisResult>;

    /// `POST /upload-zip` - one zip archive, returns the extracted resume records
    async fn upload_zip(&self, file: &SelectedFile) -> Result<Vec<ResumeRecord>>;

    /// `POST /rank` - job description plus resume records, returns the ranking
    async fn rank(&self, request: &RankRequest) -> Result<Vec<RankedResume>>;
}
