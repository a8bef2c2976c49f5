pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::factors::TREE_OFFSET_KG_PER_MONTH;
use crate::profile::LifestyleProfile;
use crate::types::{Breakdown, Category};

use rules::{evaluate_rules, rules_for};

pub const MAX_SUGGESTIONS: usize = 5;

/// A suggestion with the category and rule it came from. The tree offset
/// message has neither.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub category: Option<Category>,
    pub rule: Option<String>,
    pub priority: bool,
    pub message: String,
}

/// Trees needed to offset `total` kg CO2e in a month.
pub fn trees_needed(total: f64) -> i64 {
    (total / TREE_OFFSET_KG_PER_MONTH).ceil() as i64
}

pub fn tree_message(total: f64) -> String {
    format!(
        "🌳 Plant {} trees this month to offset your carbon footprint",
        trees_needed(total)
    )
}

/// Rule suggestions for the two highest-emitting categories, followed by the
/// tree offset, deduplicated and capped at [`MAX_SUGGESTIONS`].
pub fn build_suggestions(breakdown: &Breakdown, profile: &LifestyleProfile) -> Vec<Suggestion> {
    let ranked = breakdown.ranked();
    let top = ranked[0].0;
    let second = ranked[1].0;
    debug!(%top, %second, "ranked emission categories");

    let mut candidates = Vec::new();
    for category in Category::ALL {
        if category != top && category != second {
            continue;
        }
        for rule in evaluate_rules(rules_for(category), profile) {
            candidates.push(Suggestion {
                category: Some(category),
                rule: Some(rule.name.to_string()),
                priority: rule.priority,
                message: rule.message.to_string(),
            });
        }
    }
    candidates.push(Suggestion {
        category: None,
        rule: None,
        priority: false,
        message: tree_message(breakdown.total),
    });

    let mut out: Vec<Suggestion> = Vec::with_capacity(MAX_SUGGESTIONS);
    for candidate in candidates {
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
        if out.iter().any(|s| s.message == candidate.message) {
            continue;
        }
        out.push(candidate);
    }
    out
}

pub fn generate_suggestions(breakdown: &Breakdown, profile: &LifestyleProfile) -> Vec<String> {
    build_suggestions(breakdown, profile)
        .into_iter()
        .map(|s| s.message)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_footprint;
    use crate::profile::{AcUsage, TransportMode, YesNo};

    #[test]
    fn default_profile_suggestions() {
        let profile = LifestyleProfile::default();
        let breakdown = compute_footprint(&profile);
        let suggestions = generate_suggestions(&breakdown, &profile);
        // electricity (200.0) and transportation (189.0) rank top two
        assert_eq!(
            suggestions,
            vec![
                "🚗 TOP PRIORITY: Carpooling can cut your transport emissions in half!".to_string(),
                "⚡ TOP PRIORITY: Switch to renewable energy plans to reduce electricity emissions by 30%".to_string(),
                "🌳 Plant 28 trees this month to offset your carbon footprint".to_string(),
            ]
        );
    }

    #[test]
    fn tree_count_rounds_up() {
        assert_eq!(trees_needed(688.4), 28);
        assert_eq!(trees_needed(700.0), 28);
        assert_eq!(trees_needed(700.1), 29);
        assert_eq!(trees_needed(0.0), 0);
    }

    #[test]
    fn only_top_two_categories_contribute() {
        let profile = LifestyleProfile {
            online_orders: 30,
            shopping_freq: 20,
            ..LifestyleProfile::default()
        };
        let breakdown = compute_footprint(&profile);
        let built = build_suggestions(&breakdown, &profile);
        let categories: Vec<Option<Category>> = built.iter().map(|s| s.category).collect();
        assert!(categories.contains(&Some(Category::Lifestyle)));
        assert!(!categories.contains(&Some(Category::Diet)));
        assert!(!categories.contains(&Some(Category::Waste)));
    }

    #[test]
    fn caps_at_five_and_keeps_tree_only_when_room() {
        let profile = LifestyleProfile {
            travel_km_per_day: 5.0,
            transport_mode: TransportMode::Car,
            electricity_units: 1000.0,
            ac_usage: AcUsage::Daily,
            meat_meals_per_week: 21.0,
            dairy_liters_per_day: 3.0,
            ..LifestyleProfile::default()
        };
        let breakdown = compute_footprint(&profile);
        let suggestions = generate_suggestions(&breakdown, &profile);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(!suggestions.iter().any(|s| s.starts_with("🌳")));
        assert!(suggestions[0].starts_with("⚡ TOP PRIORITY"));
    }

    #[test]
    fn tree_message_is_always_a_candidate() {
        let profile = LifestyleProfile {
            travel_km_per_day: 0.0,
            transport_mode: TransportMode::Walk,
            carpool: YesNo::No,
            electricity_units: 0.0,
            ac_usage: AcUsage::Never,
            renewable_energy: YesNo::Yes,
            meat_meals_per_week: 0.0,
            dairy_liters_per_day: 0.0,
            local_food: YesNo::Yes,
            waste_kg_per_week: 0.0,
            recycle: YesNo::Yes,
            water_usage_liters: 0.0,
            shopping_freq: 0,
            online_orders: 0,
        };
        let breakdown = compute_footprint(&profile);
        assert_eq!(breakdown.total, 0.0);
        let suggestions = generate_suggestions(&breakdown, &profile);
        assert_eq!(
            suggestions,
            vec!["🌳 Plant 0 trees this month to offset your carbon footprint".to_string()]
        );
    }

    #[test]
    fn suggestions_are_unique_and_deterministic() {
        let profiles = [
            LifestyleProfile::default(),
            LifestyleProfile {
                transport_mode: TransportMode::Bus,
                travel_km_per_day: 3.0,
                waste_kg_per_week: 40.0,
                water_usage_liters: 900.0,
                ..LifestyleProfile::default()
            },
            LifestyleProfile {
                recycle: YesNo::Yes,
                waste_kg_per_week: 50.0,
                online_orders: 30,
                ..LifestyleProfile::default()
            },
        ];
        for profile in profiles {
            let breakdown = compute_footprint(&profile);
            let first = generate_suggestions(&breakdown, &profile);
            let second = generate_suggestions(&breakdown, &profile);
            assert_eq!(first, second);
            assert!(first.len() <= MAX_SUGGESTIONS);
            for (i, s) in first.iter().enumerate() {
                assert!(!first[i + 1..].contains(s), "duplicate suggestion: {s}");
            }
        }
    }
}
