// src/types/mod.rs
pub mod mode;
pub mod response;
pub mod selected_file;

pub use mode::{Mode, UploadAction};
pub use response::{
    AnalysisResult, BackendErrorBody, RankRequest, RankResponse, RankedResume, ResumeRecord,
    UploadZipResponse,
};
pub use selected_file::{mime_for_filename, SelectedFile};
