use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::compute_footprint;
use crate::comparison::{compare_to_averages, Comparison};
use crate::profile::LifestyleProfile;
use crate::suggestions::{build_suggestions, trees_needed, Suggestion};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transportation,
    Electricity,
    Diet,
    Waste,
    Lifestyle,
}

impl Category {
    /// Declaration order; ranking ties resolve in this order.
    pub const ALL: [Category; 5] = [
        Category::Transportation,
        Category::Electricity,
        Category::Diet,
        Category::Waste,
        Category::Lifestyle,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Electricity => "electricity",
            Self::Diet => "diet",
            Self::Waste => "waste",
            Self::Lifestyle => "lifestyle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Electricity => "Electricity",
            Self::Diet => "Diet",
            Self::Waste => "Waste & Water",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unrounded monthly kg CO2e per category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RawBreakdown {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub lifestyle: f64,
}

impl RawBreakdown {
    pub fn total(&self) -> f64 {
        self.transportation + self.electricity + self.diet + self.waste + self.lifestyle
    }
}

/// Monthly kg CO2e per category plus the total, each rounded to one decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Breakdown {
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub lifestyle: f64,
    pub total: f64,
}

impl Breakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
            Category::Lifestyle => self.lifestyle,
        }
    }

    pub fn entries(&self) -> [(Category, f64); 5] {
        Category::ALL.map(|category| (category, self.get(category)))
    }

    /// Categories ordered by emissions, highest first. Stable, so equal
    /// values stay in declaration order.
    pub fn ranked(&self) -> Vec<(Category, f64)> {
        let mut entries = self.entries().to_vec();
        // partial_cmp keeps 0.0 and -0.0 tied
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        entries
    }
}

/// Everything the dashboard shows for one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub generated_at: DateTime<Utc>,
    pub profile: LifestyleProfile,
    pub breakdown: Breakdown,
    pub comparison: Comparison,
    pub trees_needed: i64,
    pub suggestions: Vec<Suggestion>,
}

impl EstimateReport {
    pub fn build(profile: LifestyleProfile) -> Self {
        let breakdown = compute_footprint(&profile);
        Self {
            generated_at: Utc::now(),
            comparison: compare_to_averages(&breakdown),
            trees_needed: trees_needed(breakdown.total),
            suggestions: build_suggestions(&breakdown, &profile),
            profile,
            breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Breakdown {
        Breakdown {
            transportation: 189.0,
            electricity: 200.0,
            diet: 180.4,
            waste: 34.1,
            lifestyle: 85.0,
            total: 688.4,
        }
    }

    #[test]
    fn ranks_by_value_descending() {
        let ranked = sample().ranked();
        let order: Vec<Category> = ranked.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Electricity,
                Category::Transportation,
                Category::Diet,
                Category::Lifestyle,
                Category::Waste,
            ]
        );
    }

    #[test]
    fn ties_keep_declaration_order() {
        let breakdown = Breakdown {
            transportation: 0.0,
            electricity: 0.0,
            diet: 0.0,
            waste: 0.0,
            lifestyle: 0.0,
            total: 0.0,
        };
        let order: Vec<Category> = breakdown.ranked().iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn report_combines_all_parts() {
        let report = EstimateReport::build(LifestyleProfile::default());
        assert_eq!(report.breakdown.total, 688.4);
        assert_eq!(report.trees_needed, 28);
        assert_eq!(report.comparison.total, report.breakdown.total);
        assert_eq!(report.suggestions.len(), 3);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["profile"]["transportMode"], "car");
        assert_eq!(json["comparison"]["position"], "below");
    }
}
