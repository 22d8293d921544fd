//! Client for a resume analysis backend: pick single or bulk mode, select a
//! resume or a zip of resumes, and upload it for analysis or ranking.

pub mod cli;
pub mod core;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod panel;
pub mod render;
pub mod shell;
pub mod types;
pub mod utils;

#[doc(hidden)]
pub use tracing as __tracing;

pub use crate::core::{ConfigManager, ResumeBackend, ServiceClient};
pub use error::{PanelError, GENERIC_UPLOAD_ERROR};
pub use panel::{ActionState, Panel};
pub use shell::Shell;
pub use types::{Mode, RankedResume, SelectedFile, UploadAction};
