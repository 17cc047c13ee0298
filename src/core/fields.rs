use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Phone formats, tried in priority order
///
/// 1. international / parenthesized: `+1 (123) 456-7890`
/// 2. bare ten digits: `1234567890`
/// 3. 3-3-4 grouping: `123-456-7890`
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+?\d{1,3}[-.\s]?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
        r"\b\d{10}\b",
        r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Degree names, tried in priority order
///
/// Dotted abbreviations carry no trailing `\b` since they already end on a
/// non-word character. The bare two-letter forms "BE" and "ME" are matched
/// case-sensitively so the English words "be" and "me" are not degrees.
static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:B\.?Tech\b|Bachelor of Technology\b|B\.E\.|Bachelor of Engineering\b|(?-i:BE)\b)",
        r"(?i)\b(?:M\.?Tech\b|Master of Technology\b|M\.E\.|Master of Engineering\b|(?-i:ME)\b)",
        r"(?i)\b(?:MBA\b|Master of Business Administration\b)",
        r"(?i)\b(?:B\.?Sc\b|Bachelor of Science\b|M\.?Sc\b|Master of Science\b)",
        r"(?i)\b(?:BCA\b|Bachelor of Computer Applications\b|MCA\b|Master of Computer Applications\b)",
        r"(?i)\b(?:PhD\b|Ph\.D\.|Doctorate\b)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// "N years of experience", "N years in/with", "experience: N years"
static EXPERIENCE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\d+)\+?\s*years?\s+(?:of\s+)?experience",
        r"(\d+)\+?\s*years?\s+(?:in|with)",
        r"experience[:\s]+(\d+)\+?\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// First email address in document order
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone number, taken from the first format that matches anywhere
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

/// Literal text of the first degree pattern that matches
pub fn extract_education(text: &str) -> Option<String> {
    DEGREE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
}

/// Largest number of years stated across all experience phrasings, or 0
pub fn extract_experience_years(text: &str) -> u32 {
    let text_lower = text.to_lowercase();

    EXPERIENCE_RES
        .iter()
        .flat_map(|re| re.captures_iter(&text_lower))
        .filter_map(|caps| caps.get(1))
        .filter_map(|years| years.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
