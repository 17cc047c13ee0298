/// Floor: extraction always carries some baseline uncertainty
pub const BASE_CONFIDENCE: f64 = 5.0;
/// Points contributed by each extracted skill
pub const POINTS_PER_SKILL: f64 = 5.0;
/// Cap on the skill-count contribution
pub const MAX_SKILL_POINTS: f64 = 50.0;
/// Characters of text per length point
pub const CHARS_PER_POINT: f64 = 100.0;
/// Cap on the text-length contribution
pub const MAX_LENGTH_POINTS: f64 = 40.0;
/// Ceiling: an unsupervised heuristic is never certain
pub const MAX_CONFIDENCE: f64 = 95.0;

/// Calculate a confidence percentage (5-95) for an extraction
///
/// Scoring formula:
/// confidence = min(
///     5 +
///     min(skills × 5, 50) +        # More skills found = higher
///     min(text_length / 100, 40),  # More text to analyze = higher
///     95
/// )
pub fn calculate_confidence<S: AsRef<str>>(skills: &[S], text_length: usize) -> f64 {
    let skill_points = (skills.len() as f64 * POINTS_PER_SKILL).min(MAX_SKILL_POINTS);
    let length_points = (text_length as f64 / CHARS_PER_POINT).min(MAX_LENGTH_POINTS);

    (BASE_CONFIDENCE + skill_points + length_points).min(MAX_CONFIDENCE)
}
