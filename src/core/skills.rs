use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::core::vocabulary::SkillVocabulary;

/// Maximal runs of word characters plus `+`, `#` and `.`
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w+#.]+").unwrap());

/// Lead-in phrases that introduce a list of skills
static CONTEXT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"proficient in ([a-z0-9+#./, -]+)",
        r"experience (?:with|in) ([a-z0-9+#./, -]+)",
        r"knowledge of ([a-z0-9+#./, -]+)",
        r"skilled in ([a-z0-9+#./, -]+)",
        r"expertise in ([a-z0-9+#./, -]+)",
        r"working with ([a-z0-9+#./, -]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// A period that closes a sentence rather than sitting inside a name
static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.(?:\s|$)").unwrap());

/// Separators between items of a captured skill list
static LIST_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",|\sand\s").unwrap());

/// Extract the canonical skills mentioned in `text`
///
/// Runs the four detection strategies independently and unions their hits.
/// The result is duplicate-free and sorted by canonical name.
pub fn extract_skills(vocab: &SkillVocabulary, text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();

    let tokens = match_single_tokens(vocab, &text_lower);
    let phrases = match_multi_word(vocab, &text_lower);
    let aliases = match_aliases(vocab, &text_lower);
    let context = match_context_phrases(vocab, &text_lower);

    tracing::trace!(
        tokens = tokens.len(),
        phrases = phrases.len(),
        aliases = aliases.len(),
        context = context.len(),
        "Skill strategy hits"
    );

    let found: BTreeSet<String> = tokens
        .into_iter()
        .chain(phrases)
        .chain(aliases)
        .chain(context)
        .collect();

    found.into_iter().collect()
}

/// Strategy 1: tokens that equal a canonical skill name
///
/// Dots at either end of a token are sentence punctuation, not part of a name
/// ("MongoDB." is "MongoDB"), so they are stripped before lookup.
pub fn match_single_tokens(vocab: &SkillVocabulary, text_lower: &str) -> BTreeSet<String> {
    TOKEN_RE
        .find_iter(text_lower)
        .map(|m| m.as_str().trim_matches('.'))
        .filter(|token| !token.is_empty())
        .filter_map(|token| vocab.lookup(token))
        .map(str::to_string)
        .collect()
}

/// Strategy 2: literal presence of names that do not survive tokenization
/// as a single token ("Machine Learning", "CI/CD", "scikit-learn")
pub fn match_multi_word(vocab: &SkillVocabulary, text_lower: &str) -> BTreeSet<String> {
    vocab
        .all_skills()
        .iter()
        .filter(|skill| !is_single_token(skill))
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Strategy 3: boundary-safe alias matches, one hit per canonical skill
pub fn match_aliases(vocab: &SkillVocabulary, text_lower: &str) -> BTreeSet<String> {
    vocab
        .alias_patterns()
        .filter(|(_, patterns)| patterns.iter().any(|p| p.pattern.is_match(text_lower)))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Strategy 4: skills listed after a lead-in phrase such as "proficient in"
///
/// The captured list ends at the first sentence-closing period and is split
/// on commas and the word "and"; every fragment must equal a canonical name.
pub fn match_context_phrases(vocab: &SkillVocabulary, text_lower: &str) -> BTreeSet<String> {
    let mut found = BTreeSet::new();

    for re in CONTEXT_RES.iter() {
        for caps in re.captures_iter(text_lower) {
            let Some(list) = caps.get(1) else { continue };
            let list = list.as_str();
            let list = match SENTENCE_END_RE.find(list) {
                Some(end) => &list[..end.start()],
                None => list,
            };

            found.extend(
                LIST_SEPARATOR_RE
                    .split(list)
                    .map(str::trim)
                    .filter(|fragment| !fragment.is_empty())
                    .filter_map(|fragment| vocab.lookup(fragment))
                    .map(str::to_string),
            );
        }
    }

    found
}

fn is_single_token(skill: &str) -> bool {
    let lower = skill.to_lowercase();
    TOKEN_RE
        .find(&lower)
        .is_some_and(|m| m.start() == 0 && m.end() == lower.len())
}
