//! Skill Match - résumé fact extraction and skill match scoring
//!
//! This library provides a lexical skill matcher over a fixed vocabulary,
//! single-purpose field extractors (email, phone, education, experience),
//! a bounded confidence heuristic, and deterministic match scoring between
//! a candidate's skills and a job's required skills.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_confidence, compute_match, extract_education, extract_email,
    extract_experience_years, extract_phone, extract_skills, rank_candidates, ResumeExtractor,
    SkillVocabulary, VocabularyError,
};
pub use crate::models::{ExtractionResult, MatchRecord, CandidateSkills, RankedCandidate};
