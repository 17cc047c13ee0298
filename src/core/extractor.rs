use std::sync::Arc;

use crate::core::{
    confidence::calculate_confidence,
    fields::{extract_education, extract_email, extract_experience_years, extract_phone},
    skills::extract_skills,
    vocabulary::SkillVocabulary,
};
use crate::models::ExtractionResult;

/// Main extraction orchestrator - runs every extractor over one text
///
/// # Pipeline Stages
/// 1. Lexical skill matching against the vocabulary
/// 2. Field extraction (email, phone, education, experience years)
/// 3. Confidence scoring from skill count and text length
///
/// Holds no state besides a handle to the read-only vocabulary, so one
/// instance can be cloned into every worker and called concurrently.
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    vocabulary: Arc<SkillVocabulary>,
}

impl ResumeExtractor {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        Self { vocabulary }
    }

    pub fn with_builtin_vocabulary() -> Self {
        Self {
            vocabulary: Arc::new(SkillVocabulary::builtin()),
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Canonical skills found in `text`
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        extract_skills(&self.vocabulary, text)
    }

    /// Extract every supported fact from plain résumé text
    ///
    /// # Arguments
    /// * `text` - Text already decoded from the source document
    ///
    /// # Returns
    /// ExtractionResult with skills, contact fields, education, experience
    /// years and a confidence estimate
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let skills = self.extract_skills(text);
        let text_length = text.chars().count();
        let confidence = calculate_confidence(&skills, text_length);

        ExtractionResult {
            email: extract_email(text),
            phone: extract_phone(text),
            education: extract_education(text),
            experience_years: extract_experience_years(text),
            confidence,
            text_length,
            skills,
        }
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::with_builtin_vocabulary()
    }
}
