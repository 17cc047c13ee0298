use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;
use validator::Validate;

use crate::core::{compute_match, rank_candidates, ResumeExtractor};
use crate::models::{
    ErrorResponse, ExtractRequest, ExtractionResponse, HealthResponse, MatchRequest, RankRequest,
    RankResponse, SkillsResponse, VocabularyResponse,
};
use crate::routes::ApiError;
use crate::services::ExtractionCache;

/// Upper bound on rankings returned by one request
const MAX_RANK_LIMIT: usize = 100;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub extractor: ResumeExtractor,
    pub cache: ExtractionCache,
    pub max_text_bytes: usize,
}

/// Configure all extraction and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/skills", web::get().to(list_skills))
        .route("/extract", web::post().to(extract))
        .route("/extract/skills", web::post().to(extract_skills))
        .route("/match", web::post().to(match_skills))
        .route("/match/rank", web::post().to(rank));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Vocabulary endpoint
///
/// GET /api/v1/skills
async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    let vocab = state.extractor.vocabulary();

    let aliases: BTreeMap<String, Vec<String>> = vocab
        .all_skills()
        .iter()
        .filter_map(|skill| {
            let list = vocab.aliases_of(skill);
            (!list.is_empty()).then(|| {
                (skill.clone(), list.into_iter().map(str::to_string).collect())
            })
        })
        .collect();

    HttpResponse::Ok().json(VocabularyResponse {
        skills: vocab.all_skills().to_vec(),
        aliases,
    })
}

/// Full extraction endpoint
///
/// POST /api/v1/extract
///
/// Request body:
/// ```json
/// { "text": "string" }
/// ```
async fn extract(
    state: web::Data<AppState>,
    req: web::Json<ExtractRequest>,
) -> Result<HttpResponse, ApiError> {
    let text = req.into_inner().text;
    check_text_size(&text, state.max_text_bytes)?;

    let (result, cached) = match state.cache.get(&text).await {
        Some(result) => (result, true),
        None => {
            let extractor = state.extractor.clone();
            let (text, result) = web::block(move || {
                let result = extractor.extract(&text);
                (text, result)
            })
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;

            state.cache.set(&text, &result).await;
            (result, false)
        }
    };

    tracing::info!(
        "Extracted {} skills from {} chars (confidence {:.2}, cached: {})",
        result.skills.len(),
        result.text_length,
        result.confidence,
        cached
    );

    Ok(HttpResponse::Ok().json(ExtractionResponse {
        extraction_id: uuid::Uuid::new_v4(),
        extracted_at: chrono::Utc::now(),
        result,
        cached,
    }))
}

/// Skills-only extraction endpoint
///
/// POST /api/v1/extract/skills
async fn extract_skills(
    state: web::Data<AppState>,
    req: web::Json<ExtractRequest>,
) -> Result<HttpResponse, ApiError> {
    let text = req.into_inner().text;
    check_text_size(&text, state.max_text_bytes)?;

    let skills = match state.cache.get(&text).await {
        Some(result) => result.skills,
        None => {
            let extractor = state.extractor.clone();
            web::block(move || extractor.extract_skills(&text))
                .await
                .map_err(|e| ApiError::Internal(e.to_string()))?
        }
    };

    tracing::debug!("Extracted {} skills", skills.len());

    Ok(HttpResponse::Ok().json(SkillsResponse { skills }))
}

/// Match scoring endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "requiredSkills": ["string"],
///   "candidateSkills": ["string"]
/// }
/// ```
///
/// Scores are never recomputed behind the caller's back; call this again
/// whenever either skill list changes.
async fn match_skills(req: web::Json<MatchRequest>) -> impl Responder {
    let record = compute_match(&req.required_skills, &req.candidate_skills);

    tracing::info!(
        "Match score {:.2} ({} of {} required skills)",
        record.match_score,
        record.matching_skills.len(),
        record.matching_skills.len() + record.missing_skills.len()
    );

    HttpResponse::Ok().json(record)
}

/// Candidate ranking endpoint
///
/// POST /api/v1/match/rank
///
/// Request body:
/// ```json
/// {
///   "requiredSkills": ["string"],
///   "candidates": [{ "candidateId": "string", "skills": ["string"] }],
///   "limit": 20
/// }
/// ```
async fn rank(req: web::Json<RankRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    // Cap limit at 100 to bound response size
    let limit = (req.limit as usize).min(MAX_RANK_LIMIT);
    let total_candidates = req.candidates.len();

    let rankings = rank_candidates(&req.required_skills, req.candidates, limit);

    tracing::info!(
        "Returning {} rankings (from {} candidates)",
        rankings.len(),
        total_candidates
    );

    HttpResponse::Ok().json(RankResponse {
        rankings,
        total_candidates,
    })
}

fn check_text_size(text: &str, max_text_bytes: usize) -> Result<(), ApiError> {
    if text.len() > max_text_bytes {
        tracing::warn!(
            "Rejected text of {} bytes (limit {} bytes)",
            text.len(),
            max_text_bytes
        );
        return Err(ApiError::PayloadTooLarge {
            size: text.len(),
            limit: max_text_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_text_size() {
        assert!(check_text_size("abc", 3).is_ok());
        assert!(matches!(
            check_text_size("abcd", 3),
            Err(ApiError::PayloadTooLarge { size: 4, limit: 3 })
        ));
    }
}
