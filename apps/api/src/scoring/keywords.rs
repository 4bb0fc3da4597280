//! Keyword Match — vocabulary overlap between the resume and the target role.
//!
//! Matching is plain substring containment on lower-cased text, so "analytics"
//! also counts inside "people-analytics" or "analyticsplatform".

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::text::fold;

/// Used when no job description is supplied.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "project management",
    "leadership",
    "communication",
    "problem solving",
    "team collaboration",
    "analytics",
];

/// Tokens of this many characters or fewer are dropped from the JD.
const MIN_TOKEN_EXCLUSIVE: usize = 2;

/// Runs of non-word characters. ASCII word class, so accented letters split tokens.
static TOKEN_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("token separator regex is valid"));

/// Unique significant tokens of a job description, in first-seen order.
/// Falls back to `DEFAULT_KEYWORDS` when the JD is blank.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let jd = fold(job_description);
    if jd.trim().is_empty() {
        return DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }

    let mut seen = HashSet::new();
    TOKEN_SEPARATOR
        .split(&jd)
        .filter(|token| token.chars().count() > MIN_TOKEN_EXCLUSIVE)
        .filter(|token| seen.insert(*token))
        .map(String::from)
        .collect()
}

/// Fraction of keywords found in the resume, in [0, 1].
pub fn score_keyword_match(resume_text: &str, job_description: &str) -> f64 {
    let keywords = extract_keywords(job_description);
    if keywords.is_empty() {
        return 0.0;
    }

    let resume = fold(resume_text);
    let matched = keywords.iter().filter(|kw| resume.contains(kw.as_str())).count();
    (matched as f64 / keywords.len() as f64).min(1.0)
}
