use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{ExtractionResult, RankedCandidate};

/// Response for the extract endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    #[serde(rename = "extractionId")]
    pub extraction_id: uuid::Uuid,
    #[serde(rename = "extractedAt")]
    pub extracted_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub result: ExtractionResult,
    pub cached: bool,
}

/// Response for the skills-only extract endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub rankings: Vec<RankedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// The configured vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyResponse {
    pub skills: Vec<String>,
    pub aliases: BTreeMap<String, Vec<String>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
