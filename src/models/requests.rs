use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::CandidateSkills;

/// Request to extract facts from plain résumé text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
}

/// Request to score one candidate against a job's required skills
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(alias = "required_skills", rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(alias = "candidate_skills", rename = "candidateSkills", default)]
    pub candidate_skills: Vec<String>,
}

/// Request to rank many candidates against a job's required skills
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "required_skills", rename = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub candidates: Vec<CandidateSkills>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}
