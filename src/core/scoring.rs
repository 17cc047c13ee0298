use std::collections::HashSet;

use crate::models::{CandidateSkills, MatchRecord, RankedCandidate};

/// Score how well a candidate's skills cover a job's required skills
///
/// Scoring formula:
/// match_score = round(100 × |matching| / |required|, 2)   # 0 when nothing is required
///
/// Membership is case-insensitive. Matching and missing skills keep the order
/// and casing of `required`; a required skill repeated under a different
/// casing is counted once, at its first occurrence.
pub fn compute_match<R, C>(required: &[R], candidate: &[C]) -> MatchRecord
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    let candidate_lower: HashSet<String> = candidate
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut matching_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for skill in required {
        let skill = skill.as_ref();
        let lower = skill.to_lowercase();
        if !seen.insert(lower.clone()) {
            continue;
        }

        if candidate_lower.contains(&lower) {
            matching_skills.push(skill.to_string());
        } else {
            missing_skills.push(skill.to_string());
        }
    }

    let match_score = calculate_match_score(matching_skills.len(), seen.len());

    MatchRecord {
        match_score,
        matching_skills,
        missing_skills,
    }
}

/// Percentage of required skills matched, rounded to 2 decimal places
#[inline]
fn calculate_match_score(matching: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }

    let score = matching as f64 / required as f64 * 100.0;
    (score * 100.0).round() / 100.0
}

/// Score every candidate against the same required skills and rank them
///
/// Sorted by score (descending) and then by candidate id (ascending), so
/// equal scores never produce an unstable order.
pub fn rank_candidates<R: AsRef<str>>(
    required: &[R],
    candidates: Vec<CandidateSkills>,
    limit: usize,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            record: compute_match(required, &candidate.skills),
            candidate_id: candidate.candidate_id,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.record
            .match_score
            .partial_cmp(&a.record.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate_id.cmp(&b.candidate_id))
    });

    ranked.truncate(limit);
    ranked
}
