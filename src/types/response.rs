// src/types/response.rs
use serde::{Deserialize, Serialize};

/// Raw payload of `POST /upload`, shown verbatim
pub type AnalysisResult = serde_json::Value;

/// One extracted resume from `POST /upload-zip`, passed untouched to `POST /rank`
pub type ResumeRecord = serde_json::Value;

// ===== Service Request/Response Types =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub filename: String,
    pub score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadZipResponse {
    pub resumes: Vec<ResumeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRequest {
    pub job_description: String,
    pub resumes: Vec<ResumeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub ranked_resumes: Vec<RankedResume>,
}

/// Error body the backend sends with 4xx/5xx statuses
#[derive(Debug, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rank_request_wire_shape() {
        let request = RankRequest {
            job_description: "backend engineer".to_string(),
            resumes: vec![json!({"filename": "a.pdf"})],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"job_description": "backend engineer", "resumes": [{"filename": "a.pdf"}]})
        );
    }

    #[test]
    fn test_rank_response_accepts_integer_and_fractional_scores() {
        let response: RankResponse = serde_json::from_value(json!({
            "ranked_resumes": [
                {"filename": "a.pdf", "score": 87},
                {"filename": "b.docx", "score": 41.25}
            ]
        }))
        .unwrap();
        assert_eq!(response.ranked_resumes[0].score, 87.0);
        assert_eq!(response.ranked_resumes[1].filename, "b.docx");
    }

    #[test]
    fn test_upload_zip_response_requires_resumes() {
        let result: Result<UploadZipResponse, _> =
            serde_json::from_value(json!({"error": "No valid resumes found in the ZIP file."}));
        assert!(result.is_err());
    }
}
