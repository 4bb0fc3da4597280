//! ATS Scoring — nine weighted heuristic scorers combined into a 0–100 score.
//!
//! Every scorer is a pure function of the resume text (Keyword Match also sees the
//! job description). The engine never fails: empty or garbage input just scores low.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; `HeuristicScorer` is the only backend.

pub mod handlers;
pub mod keywords;
pub mod signals;
pub mod structure;
pub mod text;
pub mod weights;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use weights::Category;

/// Final score plus the per-category breakdown, all on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub total_score: f64,
    pub category_scores: BTreeMap<Category, f64>,
}

/// Scorer seam. Implement this to swap the scoring backend without touching
/// the handlers.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, resume_text: &str, job_description: &str) -> ScoreReport;
}

/// Regex and substring heuristics. Deterministic, no I/O.
pub struct HeuristicScorer;

impl ResumeScorer for HeuristicScorer {
    fn score(&self, resume_text: &str, job_description: &str) -> ScoreReport {
        compute_score(resume_text, job_description)
    }
}

impl Category {
    /// Raw [0, 1] score for this category.
    pub fn score(self, resume_text: &str, job_description: &str) -> f64 {
        match self {
            Category::KeywordMatch => keywords::score_keyword_match(resume_text, job_description),
            Category::Formatting => structure::score_formatting(resume_text),
            Category::Experience => structure::score_experience(resume_text),
            Category::Education => structure::score_education(resume_text),
            Category::Skills => structure::score_skills(resume_text),
            Category::AtsParsability => structure::score_parsability(resume_text),
            Category::ContactInfo => signals::score_contact_info(resume_text),
            Category::Achievements => signals::score_achievements(resume_text),
            Category::StyleReadability => signals::score_style(resume_text),
        }
    }
}

fn to_percent(unit_score: f64) -> f64 {
    (unit_score * 100.0).clamp(0.0, 100.0)
}

/// Scores a resume against an optional job description (pass `""` for none).
pub fn compute_score(resume_text: &str, job_description: &str) -> ScoreReport {
    let mut category_scores = BTreeMap::new();
    let mut total = 0.0;

    for category in Category::ALL {
        let unit = category.score(resume_text, job_description);
        total += category.weight() * unit;
        category_scores.insert(category, to_percent(unit));
    }

    let total_score = to_percent(total);
    debug!(
        total_score,
        resume_chars = resume_text.len(),
        jd_chars = job_description.len(),
        "Computed ATS score"
    );

    ScoreReport {
        total_score,
        category_scores,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\njane@example.com | +1 555-123-4567\n\
        Summary\nBackend engineer focused on reliability.\n\
        Professional Experience\nAcme Corp, 6 years: reduced p99 latency by 40% and \
        grew revenue to $2,000,000. Led project management for the analytics team.\n\
        Education\nBachelor of Science in Computer Science\n\
        Technical Skills\nRust, SQL, Kubernetes, communication, leadership";

    fn category(report: &ScoreReport, category: Category) -> f64 {
        report.category_scores[&category]
    }

    #[test]
    fn test_report_has_every_category() {
        let report = compute_score(RESUME, "");
        assert_eq!(report.category_scores.len(), 9);
        for c in Category::ALL {
            assert!(report.category_scores.contains_key(&c), "Missing {c}");
        }
    }

    #[test]
    fn test_scores_bounded_for_assorted_inputs() {
        let shouting = "AAAAAAAAAAAAAAAA\n".repeat(500);
        let inputs = [
            ("", ""),
            (RESUME, ""),
            (RESUME, "Senior Rust engineer"),
            ("\u{0}\u{fffd}★★★★", "§§§"),
            (shouting.as_str(), "x"),
        ];
        for (resume, jd) in inputs {
            let report = compute_score(resume, jd);
            assert!((0.0..=100.0).contains(&report.total_score));
            assert!(report
                .category_scores
                .values()
                .all(|s| (0.0..=100.0).contains(s)));
        }
    }

    #[test]
    fn test_identical_input_is_bit_identical() {
        let a = compute_score(RESUME, "Rust backend engineer");
        let b = compute_score(RESUME, "Rust backend engineer");
        assert_eq!(a, b);
        assert_eq!(a.total_score.to_bits(), b.total_score.to_bits());
    }

    #[test]
    fn test_total_is_weighted_sum_of_categories() {
        let report = compute_score(RESUME, "Rust engineer with Kafka");
        let expected: f64 = Category::ALL
            .iter()
            .map(|c| c.weight() * report.category_scores[c])
            .sum();
        assert!((report.total_score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_scores() {
        let report = compute_score("", "");
        assert_eq!(category(&report, Category::KeywordMatch), 0.0);
        assert_eq!(category(&report, Category::AtsParsability), 0.0);
        assert_eq!(category(&report, Category::Skills), 50.0);
        assert_eq!(category(&report, Category::Achievements), 20.0);
        assert_eq!(category(&report, Category::StyleReadability), 100.0);
        assert!((category(&report, Category::Formatting) - 80.0).abs() < 1e-9);
        // 0.15*0.8 + 0.10*0.5 + 0.05*0.2 + 0.05*1.0
        assert!((report.total_score - 23.0).abs() < 1e-9, "Total was {}", report.total_score);
    }

    #[test]
    fn test_short_resume_has_zero_parsability() {
        let report = compute_score("Experience, education and skills.", "");
        assert_eq!(category(&report, Category::AtsParsability), 0.0);
    }

    #[test]
    fn test_contact_with_email_only_is_fifty() {
        let report = compute_score("jane@example.com", "");
        assert_eq!(category(&report, Category::ContactInfo), 50.0);
    }

    #[test]
    fn test_two_weak_phrases_is_fifty() {
        let report = compute_score("Responsible for billing; worked on search", "");
        assert_eq!(category(&report, Category::StyleReadability), 50.0);
    }

    #[test]
    fn test_adding_degree_flips_education() {
        let without = compute_score("Self-taught engineer", "");
        let with = compute_score("Self-taught engineer. Bachelor of Science", "");
        assert_eq!(category(&without, Category::Education), 0.0);
        assert_eq!(category(&with, Category::Education), 100.0);
    }

    #[test]
    fn test_strong_resume_scores_high() {
        let report = compute_score(RESUME, "");
        assert_eq!(category(&report, Category::ContactInfo), 100.0);
        assert_eq!(category(&report, Category::Education), 100.0);
        assert_eq!(category(&report, Category::Skills), 100.0);
        assert_eq!(category(&report, Category::AtsParsability), 100.0);
        assert_eq!(category(&report, Category::Achievements), 100.0);
        assert!(report.total_score > 70.0, "Total was {}", report.total_score);
    }

    #[test]
    fn test_serialized_shape_uses_display_labels() {
        let json = serde_json::to_value(compute_score("", "")).unwrap();
        assert!(json["totalScore"].is_number());
        assert_eq!(json["categoryScores"]["Keyword Match"], 0.0);
        assert_eq!(json["categoryScores"]["Style & Readability"], 100.0);
        assert_eq!(json["categoryScores"].as_object().unwrap().len(), 9);
    }

    #[test]
    fn test_heuristic_scorer_matches_compute_score() {
        let scorer: &dyn ResumeScorer = &HeuristicScorer;
        assert_eq!(scorer.score(RESUME, "rust"), compute_score(RESUME, "rust"));
    }
}
