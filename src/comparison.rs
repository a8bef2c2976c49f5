use serde::{Deserialize, Serialize};

use crate::factors::{ReferenceAverages, REFERENCE_AVERAGES};
use crate::types::{Breakdown, Category};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Below,
    Above,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryComparison {
    pub category: Category,
    pub yours: f64,
    pub average: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comparison {
    pub total: f64,
    pub average: f64,
    pub percent_vs_average: f64,
    pub position: Position,
    pub categories: Vec<CategoryComparison>,
}

impl Comparison {
    pub fn headline(&self) -> String {
        match self.position {
            Position::Below => format!(
                "You're {:.1}% below average!",
                self.percent_vs_average.abs()
            ),
            Position::Above => format!("You're {:.1}% above average", self.percent_vs_average),
        }
    }
}

pub fn compare_with(breakdown: &Breakdown, averages: &ReferenceAverages) -> Comparison {
    let percent_vs_average = (breakdown.total - averages.overall) / averages.overall * 100.0;
    let position = if percent_vs_average < 0.0 {
        Position::Below
    } else {
        Position::Above
    };
    let categories = breakdown
        .entries()
        .into_iter()
        .map(|(category, yours)| {
            let average = averages.category(category);
            CategoryComparison {
                category,
                yours,
                average,
                delta: yours - average,
            }
        })
        .collect();

    Comparison {
        total: breakdown.total,
        average: averages.overall,
        percent_vs_average,
        position,
        categories,
    }
}

pub fn compare_to_averages(breakdown: &Breakdown) -> Comparison {
    compare_with(breakdown, &REFERENCE_AVERAGES)
}

/// Percentage contributed by `category`, relative to the sum of the displayed
/// category values rather than the separately rounded total. 0 when that sum
/// is 0.
pub fn share_of_total(breakdown: &Breakdown, category: Category) -> f64 {
    let sum: f64 = breakdown.entries().iter().map(|(_, value)| value).sum();
    if sum == 0.0 {
        return 0.0;
    }
    breakdown.get(category) / sum * 100.0
}
