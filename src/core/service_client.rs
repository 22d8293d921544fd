// src/core/service_client.rs
//! HTTP client for the resume analysis backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::app_log;
use crate::core::backend::ResumeBackend;
use crate::types::{
    AnalysisResult, BackendErrorBody, RankRequest, RankResponse, RankedResume, ResumeRecord,
    SelectedFile, UploadZipResponse,
};
use crate::utils::endpoint_url;

pub const UPLOAD_ENDPOINT: &str = "/upload";
pub const UPLOAD_ZIP_ENDPOINT: &str = "/upload-zip";
pub const RANK_ENDPOINT: &str = "/rank";

const FILE_FIELD: &str = "file";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a client; without a timeout the transport default applies
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Send a file as multipart field `file` and parse the JSON answer
    async fn post_file<R>(&self, endpoint: &str, file: &SelectedFile) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = endpoint_url(&self.base_url, endpoint);

        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .context("Failed to create multipart")?;
        let form = Form::new().part(FILE_FIELD, part);

        app_log!(
            info,
            "Uploading {} ({} bytes) to {}",
            file.name,
            file.content.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::read_json(response, &url).await
    }

    /// Generic POST request with JSON
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = endpoint_url(&self.base_url, endpoint);
        app_log!(trace, "Calling backend: {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::read_json(response, &url).await
    }

    async fn read_json<R>(response: reqwest::Response, url: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        app_log!(debug, "Response status from {}: {}", url, status);

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<BackendErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            app_log!(error, "Backend error response from {}: {}", url, detail);
            anyhow::bail!("HTTP {} error: {}", status, detail)
        }

        serde_json::from_str(&body).with_context(|| {
            format!("Failed to parse response from {}. Raw response: {}", url, body)
        })
    }
}

#[async_trait]
impl ResumeBackend for ServiceClient {
    async fn upload(&self, file: &SelectedFile) -> Result<AnalysisResult> {
        self.post_file(UPLOAD_ENDPOINT, file).await
    }

    async fn upload_zip(&self, file: &SelectedFile) -> Result<Vec<ResumeRecord>> {
        let response: UploadZipResponse = self.post_file(UPLOAD_ZIP_ENDPOINT, file).await?;
        app_log!(info, "Backend extracted {} resumes", response.resumes.len());
        Ok(response.resumes)
    }

    async fn rank(&self, request: &RankRequest) -> Result<Vec<RankedResume>> {
        let response: RankResponse = self.post_json(RANK_ENDPOINT, request).await?;
        Ok(response.ranked_resumes)
    }
}
