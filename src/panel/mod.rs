// src/panel/mod.rs
//! Upload-and-analyze panel: file selection, job description, and the two upload actions

pub mod flows;
pub mod state;

use crate::core::ResumeBackend;
use crate::error::{DisabledReason, PanelError, GENERIC_UPLOAD_ERROR};
use crate::types::{AnalysisResult, Mode, RankedResume, SelectedFile, UploadAction};
use crate::{app_log, app_span};
use tracing::Instrument;

pub use state::{ActionState, Phase};

#[derive(Debug, Clone, Default)]
pub struct Panel {
    mode: Mode,
    selected: Option<SelectedFile>,
    job_description: String,
    analysis: ActionState<AnalysisResult>,
    ranking: ActionState<Vec<RankedResume>>,
}

/// Puts an action state back to idle if the request future is dropped
/// before it settles. The last result survives either way.
struct PendingGuard<'a, T> {
    state: &'a mut ActionState<T>,
}

impl<'a, T> PendingGuard<'a, T> {
    fn begin(state: &'a mut ActionState<T>) -> Self {
        state.begin();
        Self { state }
    }

    fn succeed(self, value: T) {
        self.state.succeed(value);
    }

    fn fail(self, message: &str) {
        self.state.fail(message);
    }
}

impl<T> Drop for PendingGuard<'_, T> {
    fn drop(&mut self) {
        self.state.abandon();
    }
}

impl Panel {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Take a new mode from the shell. A selected file the new mode does not
    /// accept is dropped; results stay.
    pub fn apply_mode(&mut self, mode: Mode) {
        self.mode = mode;

        let stale = self
            .selected
            .as_ref()
            .filter(|file| !mode.accepts(&file.mime_type))
            .map(|file| file.name.clone());

        if let Some(name) = stale {
            app_log!(
                info,
                "Clearing selected file {}: not accepted in {} mode",
                name,
                mode
            );
            self.selected = None;
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn analysis(&self) -> &ActionState<AnalysisResult> {
        &self.analysis
    }

    pub fn ranking(&self) -> &ActionState<Vec<RankedResume>> {
        &self.ranking
    }

    /// Ranked resumes from the last successful bulk run, empty otherwise
    pub fn ranked_resumes(&self) -> &[RankedResume] {
        self.ranking.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.analysis.is_pending() || self.ranking.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.analysis.error().or_else(|| self.ranking.error())
    }

    /// Both action buttons are enabled iff a file is selected and nothing is in flight
    pub fn can_upload(&self) -> bool {
        self.disabled_reason().is_none()
    }

    fn disabled_reason(&self) -> Option<DisabledReason> {
        if self.selected.is_none() {
            Some(DisabledReason::NoFileSelected)
        } else if self.is_loading() {
            Some(DisabledReason::Busy)
        } else {
            None
        }
    }

    fn ensure_enabled(&self) -> Result<(), PanelError> {
        match self.disabled_reason() {
            Some(reason) => Err(PanelError::ActionDisabled { reason }),
            None => Ok(()),
        }
    }

    /// Drop or browse: keep the first candidate the current mode accepts.
    /// Any accepted selection clears previous results and errors.
    pub fn select_files(
        &mut self,
        candidates: Vec<SelectedFile>,
    ) -> Result<&SelectedFile, PanelError> {
        let names: Vec<String> = candidates.iter().map(|f| f.name.clone()).collect();
        let mode = self.mode;

        let Some(accepted) = candidates
            .into_iter()
            .find(|file| mode.accepts(&file.mime_type))
        else {
            app_log!(
                warn,
                "Rejected selection [{}] in {} mode",
                names.join(", "),
                mode
            );
            return Err(PanelError::FileRejected { names, mode });
        };

        app_log!(
            info,
            "Selected {} ({}, {} bytes)",
            accepted.name,
            accepted.mime_type,
            accepted.content.len()
        );

        self.analysis.reset();
        self.ranking.reset();
        Ok(&*self.selected.insert(accepted))
    }

    pub fn select_file(&mut self, file: SelectedFile) -> Result<&SelectedFile, PanelError> {
        self.select_files(vec![file])
    }

    /// Upload & Analyze
    pub async fn upload_and_analyze<B>(&mut self, backend: &B) -> Result<(), PanelError>
    where
        B: ResumeBackend + ?Sized,
    {
        self.ensure_enabled()?;
        self.ranking.clear_error();

        let Some(file) = self.selected.as_ref() else {
            return Err(PanelError::ActionDisabled {
                reason: DisabledReason::NoFileSelected,
            });
        };

        let span = app_span!("upload_and_analyze", file = %file.name);
        let guard = PendingGuard::begin(&mut self.analysis);
        match flows::analyze_single(backend, file).instrument(span).await {
            Ok(analysis) => {
                app_log!(info, "Analysis received for {}", file.name);
                guard.succeed(analysis);
                Ok(())
            }
            Err(e) => {
                app_log!(error, "Error uploading file: {:#}", e);
                guard.fail(GENERIC_UPLOAD_ERROR);
                Err(PanelError::UploadFailed(GENERIC_UPLOAD_ERROR.to_string()))
            }
        }
    }

    /// Upload Zip & Rank
    pub async fn upload_zip_and_rank<B>(&mut self, backend: &B) -> Result<(), PanelError>
    where
        B: ResumeBackend + ?Sized,
    {
        self.ensure_enabled()?;
        self.analysis.clear_error();

        let Some(file) = self.selected.as_ref() else {
            return Err(PanelError::ActionDisabled {
                reason: DisabledReason::NoFileSelected,
            });
        };

        let span = app_span!("upload_zip_and_rank", file = %file.name);
        let guard = PendingGuard::begin(&mut self.ranking);
        match flows::upload_and_rank(backend, file, &self.job_description)
            .instrument(span)
            .await
        {
            Ok(ranked) => {
                app_log!(info, "Received ranking of {} resumes", ranked.len());
                guard.succeed(ranked);
                Ok(())
            }
            Err(e) => {
                app_log!(error, "Error uploading file: {:#}", e);
                guard.fail(GENERIC_UPLOAD_ERROR);
                Err(PanelError::UploadFailed(GENERIC_UPLOAD_ERROR.to_string()))
            }
        }
    }

    /// Press one of the two action buttons
    pub async fn trigger<B>(&mut self, action: UploadAction, backend: &B) -> Result<(), PanelError>
    where
        B: ResumeBackend + ?Sized,
    {
        match action {
            UploadAction::Analyze => self.upload_and_analyze(backend).await,
            UploadAction::Rank => self.upload_zip_and_rank(backend).await,
        }
    }
}
