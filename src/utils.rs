// src/utils.rs
use std::path::{Path, PathBuf};

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Format a match score the way the browser prints numbers: `87`, `87.5`
pub fn format_score(score: f64) -> String {
    // -0 prints as "0"
    let score = if score == 0.0 { 0.0 } else { score };
    if score.is_finite() && score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{:.0}", score)
    } else {
        format!("{}", score)
    }
}

/// Join an endpoint onto a base URL, tolerating a trailing slash on the base
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint)
}

/// Build report file path; directories get a timestamped file name
pub fn report_file_path(target: &Path, action: &str) -> PathBuf {
    if target.is_dir() {
        target.join(format!(
            "resume_{}_{}.json",
            action,
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ))
    } else {
        target.to_path_buf()
    }
}
