//! Structural scorers: formatting, experience, education, skills and parsability.
//!
//! Every scorer here is a pure `&str -> f64` in [0, 1].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::text::{contains_any, fold, is_blank_char, missing_any, trim_blank, utf16_len};

// ────────────────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────────────────

const CANONICAL_SECTIONS: &[&str] = &["experience", "education", "skills", "summary"];

const LONG_CAPS_PENALTY: f64 = 0.25;
const MIXED_CASE_PENALTY: f64 = 0.10;
const MISSING_SECTION_PENALTY: f64 = 0.20;

static LONG_CAPS_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{8,}").expect("long caps regex is valid"));
static CAPS_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{2,}").expect("caps run regex is valid"));

/// Starts at 1.0 and subtracts flat penalties. Any missing canonical section costs
/// the same as all of them missing.
pub fn score_formatting(text: &str) -> f64 {
    let mut score = 1.0;

    if LONG_CAPS_RUN.is_match(text) {
        score -= LONG_CAPS_PENALTY;
    }

    let has_lowercase = text.chars().any(|c| c.is_ascii_lowercase());
    if CAPS_RUN.is_match(text) && has_lowercase && text.contains('\n') {
        score -= MIXED_CASE_PENALTY;
    }

    if missing_any(&fold(text), CANONICAL_SECTIONS) {
        score -= MISSING_SECTION_PENALTY;
    }

    f64::max(0.0, score)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Cumulative years at which experience credit saturates.
const EXPERIENCE_YEARS_CAP: f64 = 10.0;

static EXPERIENCE_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(work experience|professional experience|career)")
        .expect("experience section regex is valid")
});

static YEARS_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)([0-9]+)\s*(?:\+|-|to)?\s*(?:year|yr|years)(?-u:\b)")
        .expect("years mention regex is valid")
});

/// Sum of every "N years" style mention, saturating at ten years.
/// Zero without an identifiable experience section.
pub fn score_experience(text: &str) -> f64 {
    if !EXPERIENCE_SECTION.is_match(text) {
        return 0.0;
    }

    let total_years: f64 = YEARS_MENTION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|years| years.as_str().parse::<f64>().unwrap_or(0.0))
        .sum();

    f64::min(1.0, total_years / EXPERIENCE_YEARS_CAP)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// Short markers only need a trailing boundary, so "MBA " and "BS," both count.
static DEGREE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(bachelor|master|phd|degree|ba(?-u:\b)|bs(?-u:\b)|msc(?-u:\b)|b\.tech|btech)",
    )
    .expect("degree marker regex is valid")
});

pub fn score_education(text: &str) -> f64 {
    if DEGREE_MARKER.is_match(text) {
        1.0
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

const SKILL_MARKERS: &[&str] = &["skills", "technical skills", "competencies", "proficienc"];

/// Score when no skills section is found. Absence is a partial deduction only.
const SKILLS_ABSENT_SCORE: f64 = 0.5;

pub fn score_skills(text: &str) -> f64 {
    if contains_any(&fold(text), SKILL_MARKERS) {
        1.0
    } else {
        SKILLS_ABSENT_SCORE
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ATS parsability
// ────────────────────────────────────────────────────────────────────────────

/// Trimmed bodies shorter than this (UTF-16 units) are not treated as resumes.
const MIN_PARSABLE_UNITS: usize = 120;
/// Share of exotic glyphs above which a naive parser is likely to choke.
const MAX_EXOTIC_RATIO: f64 = 0.05;
/// Punctuation that parsers handle fine, on top of word characters and whitespace.
const ALLOWED_PUNCTUATION: &str = "%$€₹.,:/()-";

const PARSABLE_SECTIONS: &[&str] = &["experience", "education", "skills"];

const EXOTIC_SCORE: f64 = 0.4;
const NO_SECTIONS_SCORE: f64 = 0.6;

fn is_exotic(c: char) -> bool {
    !(c.is_ascii_alphanumeric()
        || c == '_'
        || is_blank_char(c)
        || ALLOWED_PUNCTUATION.contains(c))
}

/// Lengths and glyph counts are in UTF-16 code units, so an emoji weighs twice
/// as much as a letter.
pub fn score_parsability(text: &str) -> f64 {
    if utf16_len(trim_blank(text)) < MIN_PARSABLE_UNITS {
        return 0.0;
    }

    let exotic: usize = text
        .chars()
        .filter(|&c| is_exotic(c))
        .map(char::len_utf16)
        .sum();
    let ratio = exotic as f64 / utf16_len(text).max(1) as f64;
    if ratio > MAX_EXOTIC_RATIO {
        return EXOTIC_SCORE;
    }

    if contains_any(&fold(text), PARSABLE_SECTIONS) {
        1.0
    } else {
        NO_SECTIONS_SCORE
    }
}
