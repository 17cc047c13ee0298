use serde::{Deserialize, Serialize};

/// Facts extracted from one résumé text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Canonical skill names, sorted and duplicate-free
    pub skills: Vec<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(rename = "experienceYears")]
    pub experience_years: u32,
    /// Heuristic confidence in [5, 95]
    pub confidence: f64,
    /// Character count of the analyzed text
    #[serde(rename = "textLength")]
    pub text_length: usize,
}

impl ExtractionResult {
    /// Helper to check whether any contact detail was found
    pub fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }
}

/// Overlap between a job's required skills and a candidate's skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
}

/// A candidate's skill set, as supplied for ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSkills {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Ranked match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    #[serde(flatten)]
    pub record: MatchRecord,
}
