// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ExtractionResult, MatchRecord, CandidateSkills, RankedCandidate};
pub use requests::{ExtractRequest, MatchRequest, RankRequest};
pub use responses::{ExtractionResponse, SkillsResponse, RankResponse, VocabularyResponse, HealthResponse, ErrorResponse};
