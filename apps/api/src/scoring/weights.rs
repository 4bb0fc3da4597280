use serde::{Deserialize, Serialize};

/// One evaluation dimension of the ATS score.
///
/// Declaration order is the report order: `ScoreReport` keeps category scores in a
/// `BTreeMap`, so `Ord` here decides the JSON key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Keyword Match")]
    KeywordMatch,
    #[serde(rename = "Formatting")]
    Formatting,
    #[serde(rename = "Experience")]
    Experience,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Skills")]
    Skills,
    #[serde(rename = "ATS Parsability")]
    AtsParsability,
    #[serde(rename = "Contact Info")]
    ContactInfo,
    #[serde(rename = "Achievements")]
    Achievements,
    #[serde(rename = "Style & Readability")]
    StyleReadability,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::KeywordMatch,
        Category::Formatting,
        Category::Experience,
        Category::Education,
        Category::Skills,
        Category::AtsParsability,
        Category::ContactInfo,
        Category::Achievements,
        Category::StyleReadability,
    ];

    /// Contribution of this category to the total. All weights sum to 1.0.
    pub const fn weight(self) -> f64 {
        match self {
            Category::KeywordMatch => 0.25,
            Category::Formatting => 0.15,
            Category::Experience => 0.15,
            Category::Education => 0.10,
            Category::Skills => 0.10,
            Category::AtsParsability => 0.10,
            Category::ContactInfo => 0.05,
            Category::Achievements => 0.05,
            Category::StyleReadability => 0.05,
        }
    }

    /// Human-readable label, identical to the serialized key.
    pub const fn label(self) -> &'static str {
        match self {
            Category::KeywordMatch => "Keyword Match",
            Category::Formatting => "Formatting",
            Category::Experience => "Experience",
            Category::Education => "Education",
            Category::Skills => "Skills",
            Category::AtsParsability => "ATS Parsability",
            Category::ContactInfo => "Contact Info",
            Category::Achievements => "Achievements",
            Category::StyleReadability => "Style & Readability",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = Category::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9, "Weights summed to {total}");
    }

    #[test]
    fn test_all_weights_positive() {
        assert!(Category::ALL.iter().all(|c| c.weight() > 0.0));
    }

    #[test]
    fn test_all_lists_every_category_once() {
        let mut sorted = Category::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 9);
        assert_eq!(sorted, Category::ALL.to_vec());
    }

    #[test]
    fn test_label_matches_serialized_key() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_category_round_trips_from_label() {
        let category: Category = serde_json::from_str(r#""Style & Readability""#).unwrap();
        assert_eq!(category, Category::StyleReadability);
    }
}
