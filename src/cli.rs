// src/cli.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::app_log;
use crate::core::{ResumeBackend, ServiceOverrides};
use crate::error::PanelError;
use crate::panel::Panel;
use crate::render::{render_results, render_shell};
use crate::shell::Shell;
use crate::types::{
    mime_for_filename, AnalysisResult, Mode, RankedResume, SelectedFile, UploadAction,
};
use crate::utils::report_file_path;

#[derive(Parser)]
#[command(name = "resume-scanner", version)]
#[command(about = "Upload resumes to the analysis backend and show the results")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend origin, e.g. http://localhost:5000
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Request timeout in seconds (transport default when unset)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Also write JSON log lines to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ServiceOverrides {
        ServiceOverrides {
            backend_url: self.backend_url.clone(),
            timeout_seconds: self.timeout_secs,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Select files, press one action and print the result
    Scan(ScanArgs),
    /// Drive the scanner from terminal prompts
    Interactive,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Upload mode; decides which file types are accepted
    #[arg(long, value_enum, default_value_t = Mode::Single)]
    pub mode: Mode,

    /// Action to run; defaults to analyze in single mode and rank in bulk mode
    #[arg(long, value_enum)]
    pub action: Option<UploadAction>,

    /// Job description text used for ranking
    #[arg(long, conflicts_with = "job_description_file")]
    pub job_description: Option<String>,

    /// Read the job description from a file
    #[arg(long)]
    pub job_description_file: Option<PathBuf>,

    /// Print the raw backend result as JSON
    #[arg(long)]
    pub json: bool,

    /// Write a JSON report to this file or directory
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Files to drop onto the panel; the first accepted one is used
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub mode: Mode,
    pub action: UploadAction,
    pub file: &'a str,
    pub job_description: &'a str,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<&'a AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked_resumes: Option<&'a [RankedResume]>,
}

impl<'a> ScanReport<'a> {
    /// Report for the action's last successful result, if any
    pub fn from_panel(panel: &'a Panel, action: UploadAction) -> Option<Self> {
        let file = panel.selected_file()?;
        let (analysis, ranked_resumes) = match action {
            UploadAction::Analyze => (Some(panel.analysis().value()?), None),
            UploadAction::Rank => (None, Some(panel.ranking().value()?.as_slice())),
        };

        Some(Self {
            mode: panel.mode(),
            action,
            file: &file.name,
            job_description: panel.job_description(),
            generated_at: Utc::now(),
            analysis,
            ranked_resumes,
        })
    }
}

fn path_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read the first path whose name `mode` accepts. Paths that would be
/// rejected anyway are never opened; `Ok(None)` means none was accepted.
pub async fn read_first_accepted(
    paths: &[PathBuf],
    mode: Mode,
) -> Result<Option<SelectedFile>> {
    let Some(path) = paths
        .iter()
        .find(|path| mode.accepts(mime_for_filename(&path_name(path))))
    else {
        return Ok(None);
    };

    SelectedFile::from_path(path).await.map(Some)
}

/// Put files from disk onto the panel, reading only the one it would keep
pub async fn select_paths(
    panel: &mut Panel,
    paths: &[PathBuf],
) -> Result<Result<(), PanelError>> {
    let mode = panel.mode();
    match read_first_accepted(paths, mode).await? {
        Some(file) => Ok(panel.select_file(file).map(|_| ())),
        None => {
            let names: Vec<String> = paths.iter().map(|p| path_name(p)).collect();
            app_log!(warn, "Rejected selection [{}] in {} mode", names.join(", "), mode);
            Ok(Err(PanelError::FileRejected { names, mode }))
        }
    }
}

async fn load_job_description(args: &ScanArgs) -> Result<String> {
    match (&args.job_description, &args.job_description_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description: {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

/// Text printed after the action: raw JSON with `--json`, the rendered shell otherwise
pub fn scan_output(shell: &Shell, action: UploadAction, json: bool) -> Result<String> {
    if !json {
        return Ok(render_shell(shell));
    }

    let panel = shell.panel();
    let value = match action {
        UploadAction::Analyze => panel.analysis().value().cloned(),
        UploadAction::Rank => panel
            .ranking()
            .value()
            .map(|ranked| serde_json::json!({ "ranked_resumes": ranked })),
    };

    match value {
        Some(value) => {
            serde_json::to_string_pretty(&value).context("Failed to serialize result")
        }
        None => Ok(render_results(panel)),
    }
}

async fn write_report(panel: &Panel, action: UploadAction, target: &Path) -> Result<PathBuf> {
    let report = ScanReport::from_panel(panel, action)
        .context("No result to write")?;
    let path = report_file_path(target, action.as_str());
    let content = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write report: {}", path.display()))?;

    app_log!(info, "Report written to {}", path.display());
    Ok(path)
}

/// Run one scan; `Ok(false)` means the selection was rejected or the upload failed
pub async fn run_scan<B>(args: ScanArgs, backend: &B) -> Result<bool>
where
    B: ResumeBackend + ?Sized,
{
    let mut shell = Shell::with_mode(args.mode);
    let action = args.action.unwrap_or_else(|| args.mode.default_action());

    let job_description = load_job_description(&args).await?;
    if action == UploadAction::Rank && job_description.trim().is_empty() {
        app_log!(warn, "Ranking without a job description");
    }
    shell.panel_mut().set_job_description(job_description);

    if let Err(e) = select_paths(shell.panel_mut(), &args.files).await? {
        eprintln!("{}", e);
        return Ok(false);
    }

    let outcome = shell.panel_mut().trigger(action, backend).await;

    println!("{}", scan_output(&shell, action, args.json)?);

    if outcome.is_err() {
        return Ok(false);
    }

    if let Some(target) = &args.output {
        let path = write_report(shell.panel(), action, target).await?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(true)
}
