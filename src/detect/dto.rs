use serde::{Deserialize, Serialize};

/// Body of `/detect`. The image is accepted in any JSON shape and never inspected.
#[derive(Debug, Default, Deserialize)]
pub struct DetectRequest {
    #[serde(default)]
    pub image: Option<serde_json::Value>,
}

/// Structured result of the placeholder detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropReport {
    pub crop: String,
    pub confidence: f64,
    pub mode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseReport {
    pub disease: String,
    pub confidence: f64,
    pub solution: String,
    pub mode: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
