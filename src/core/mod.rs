// Core engine exports
pub mod confidence;
pub mod extractor;
pub mod fields;
pub mod scoring;
pub mod skills;
pub mod vocabulary;

pub use confidence::calculate_confidence;
pub use extractor::ResumeExtractor;
pub use fields::{extract_education, extract_email, extract_experience_years, extract_phone};
pub use scoring::{compute_match, rank_candidates};
pub use skills::extract_skills;
pub use vocabulary::{SkillVocabulary, VocabularyError};
