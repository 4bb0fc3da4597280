//! Signal scorers: contact details, quantified achievements, and writing style.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scoring::text::{count_present, fold};

// ────────────────────────────────────────────────────────────────────────────
// Contact info
// ────────────────────────────────────────────────────────────────────────────

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}(?-u:\b)")
        .expect("email regex is valid")
});

/// Optional country code, then 8–15 digits loosely separated by spaces or hyphens.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?[0-9]{1,3}[\s-]?)?(?:[0-9][\s-]?){7,14}[0-9]")
        .expect("phone regex is valid")
});

pub fn score_contact_info(text: &str) -> f64 {
    let has_email = EMAIL.is_match(text);
    let has_phone = PHONE.is_match(text);
    match (has_email, has_phone) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Achievements
// ────────────────────────────────────────────────────────────────────────────

/// Currency or percent symbols, thousands-grouped numbers, or impact verbs.
static IMPACT_SIGNAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)[%$€₹]|(?-u:\b)[0-9]{1,3}(?:,[0-9]{3})+(?-u:\b)|(?-u:\b)(?:increased|reduced|improved|grew|growth|decreased|boosted)(?-u:\b)",
    )
    .expect("impact signal regex is valid")
});

const STRONG_IMPACT_THRESHOLD: usize = 2;

pub fn score_achievements(text: &str) -> f64 {
    match IMPACT_SIGNAL.find_iter(text).count() {
        0 => 0.2,
        n if n >= STRONG_IMPACT_THRESHOLD => 1.0,
        _ => 0.6,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Style & readability
// ────────────────────────────────────────────────────────────────────────────

pub const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "worked on",
    "familiar with",
    "involved in",
    "assisted with",
    "participated in",
];

const WEAK_PHRASE_PENALTY: f64 = 0.25;

/// Each distinct weak phrase costs a quarter, however often it repeats.
pub fn score_style(text: &str) -> f64 {
    let weak = count_present(&fold(text), WEAK_PHRASES);
    f64::max(0.0, 1.0 - weak as f64 * WEAK_PHRASE_PENALTY)
}
