use std::fmt::{Debug, Formatter};

use crate::profile::{AcUsage, LifestyleProfile, TransportMode, YesNo};
use crate::types::Category;

/// One advisory rule. A rule with `otherwise` set is the else branch of the
/// rule(s) directly above it and only fires when none of them did.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&LifestyleProfile) -> bool,
    pub message: &'static str,
    pub priority: bool,
    pub otherwise: bool,
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("otherwise", &self.otherwise)
            .finish()
    }
}

const fn rule(
    name: &'static str,
    applies: fn(&LifestyleProfile) -> bool,
    message: &'static str,
) -> Rule {
    Rule {
        name,
        applies,
        message,
        priority: false,
        otherwise: false,
    }
}

const fn priority(
    name: &'static str,
    applies: fn(&LifestyleProfile) -> bool,
    message: &'static str,
) -> Rule {
    Rule {
        priority: true,
        ..rule(name, applies, message)
    }
}

const fn otherwise(
    name: &'static str,
    applies: fn(&LifestyleProfile) -> bool,
    message: &'static str,
) -> Rule {
    Rule {
        otherwise: true,
        ..rule(name, applies, message)
    }
}

fn drives_alone(p: &LifestyleProfile) -> bool {
    p.transport_mode == TransportMode::Car && p.carpool == YesNo::No
}

fn drives(p: &LifestyleProfile) -> bool {
    p.transport_mode == TransportMode::Car
}

fn short_motorized_trips(p: &LifestyleProfile) -> bool {
    !p.transport_mode.is_active() && p.travel_km_per_day < 10.0
}

pub const TRANSPORTATION_RULES: &[Rule] = &[
    priority(
        "carpool",
        drives_alone,
        "🚗 TOP PRIORITY: Carpooling can cut your transport emissions in half!",
    ),
    otherwise(
        "public_transport",
        drives,
        "🚌 Consider using public transport 2-3 times per week to reduce emissions by up to 40%",
    ),
    rule(
        "cycle_short_trips",
        short_motorized_trips,
        "🚴 Try cycling or walking for short distances under 10km",
    ),
];

fn no_renewables(p: &LifestyleProfile) -> bool {
    p.renewable_energy == YesNo::No
}

fn daily_ac(p: &LifestyleProfile) -> bool {
    p.ac_usage == AcUsage::Daily
}

fn occasional_ac_high_usage(p: &LifestyleProfile) -> bool {
    p.ac_usage == AcUsage::Occasionally && p.electricity_units > 400.0
}

fn very_high_usage(p: &LifestyleProfile) -> bool {
    p.electricity_units > 500.0
}

pub const ELECTRICITY_RULES: &[Rule] = &[
    priority(
        "renewable_plan",
        no_renewables,
        "⚡ TOP PRIORITY: Switch to renewable energy plans to reduce electricity emissions by 30%",
    ),
    rule(
        "efficient_ac",
        daily_ac,
        "❄️ Use AC efficiently: set to 24°C and use fans to save 20-30% energy",
    ),
    otherwise(
        "efficient_appliances",
        occasional_ac_high_usage,
        "💡 Replace old appliances with energy-efficient models to save up to 40% energy",
    ),
    rule(
        "phantom_load",
        very_high_usage,
        "🔌 Unplug devices when not in use - phantom load accounts for 10% of home energy",
    ),
];

fn heavy_meat(p: &LifestyleProfile) -> bool {
    p.meat_meals_per_week > 10.0
}

fn moderate_meat(p: &LifestyleProfile) -> bool {
    p.meat_meals_per_week > 5.0 && p.meat_meals_per_week <= 10.0
}

fn non_local_food(p: &LifestyleProfile) -> bool {
    p.local_food == YesNo::No
}

fn heavy_dairy(p: &LifestyleProfile) -> bool {
    p.dairy_liters_per_day > 1.5
}

pub const DIET_RULES: &[Rule] = &[
    priority(
        "meatless_mondays",
        heavy_meat,
        "🌱 TOP PRIORITY: Try Meatless Mondays - reducing meat by just 2 meals/week saves ~30kg CO2/month",
    ),
    otherwise(
        "one_more_plant_day",
        moderate_meat,
        "🥗 Great job on reducing meat! Try one more plant-based day per week",
    ),
    rule(
        "local_produce",
        non_local_food,
        "🥬 Choose local, seasonal produce to reduce food transportation emissions by 15%",
    ),
    rule(
        "plant_milk",
        heavy_dairy,
        "🥛 Consider plant-based milk alternatives to reduce dairy emissions",
    ),
];

fn not_recycling(p: &LifestyleProfile) -> bool {
    p.recycle == YesNo::No
}

fn heavy_waste(p: &LifestyleProfile) -> bool {
    p.waste_kg_per_week > 20.0
}

fn recycling_with_high_waste(p: &LifestyleProfile) -> bool {
    p.waste_kg_per_week > 15.0 && p.recycle == YesNo::Yes
}

fn heavy_water(p: &LifestyleProfile) -> bool {
    p.water_usage_liters > 300.0
}

pub const WASTE_RULES: &[Rule] = &[
    priority(
        "start_recycling",
        not_recycling,
        "♻️ TOP PRIORITY: Start recycling! It can reduce waste emissions by 30%",
    ),
    rule(
        "cut_plastics",
        heavy_waste,
        "🗑️ Reduce single-use plastics and start composting to cut waste by 50%",
    ),
    otherwise(
        "compost",
        recycling_with_high_waste,
        "🍂 Compost food waste to further reduce landfill emissions",
    ),
    rule(
        "low_flow_fixtures",
        heavy_water,
        "💧 Install low-flow fixtures to reduce water usage by 30%",
    ),
];

fn frequent_online_orders(p: &LifestyleProfile) -> bool {
    p.online_orders > 15
}

fn heavy_shopping(p: &LifestyleProfile) -> bool {
    p.shopping_freq > 10
}

fn regular_shopping(p: &LifestyleProfile) -> bool {
    p.shopping_freq > 5
}

pub const LIFESTYLE_RULES: &[Rule] = &[
    priority(
        "bundle_orders",
        frequent_online_orders,
        "📦 TOP PRIORITY: Bundle online orders to reduce delivery emissions by 40%",
    ),
    rule(
        "quality_over_quantity",
        heavy_shopping,
        "👕 Buy quality over quantity - fast fashion contributes 10% of global emissions",
    ),
    otherwise(
        "second_hand",
        regular_shopping,
        "🛍️ Consider second-hand shopping for clothes and furniture",
    ),
];

pub fn rules_for(category: Category) -> &'static [Rule] {
    match category {
        Category::Transportation => TRANSPORTATION_RULES,
        Category::Electricity => ELECTRICITY_RULES,
        Category::Diet => DIET_RULES,
        Category::Waste => WASTE_RULES,
        Category::Lifestyle => LIFESTYLE_RULES,
    }
}

/// Evaluates `rules` in order and returns the ones that fire.
pub fn evaluate_rules(rules: &'static [Rule], profile: &LifestyleProfile) -> Vec<&'static Rule> {
    let mut fired = Vec::new();
    let mut chain_fired = false;
    for rule in rules {
        let hit = if rule.otherwise && chain_fired {
            false
        } else {
            (rule.applies)(profile)
        };
        chain_fired = if rule.otherwise {
            chain_fired || hit
        } else {
            hit
        };
        if hit {
            fired.push(rule);
        }
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(category: Category, profile: &LifestyleProfile) -> Vec<&'static str> {
        evaluate_rules(rules_for(category), profile)
            .into_iter()
            .map(|r| r.name)
            .collect()
    }

    #[test]
    fn every_table_leads_with_a_priority_rule() {
        for category in Category::ALL {
            let rules = rules_for(category);
            assert!(rules[0].priority, "{category}");
            assert!(rules[0].message.contains("TOP PRIORITY"));
            assert!(rules.iter().skip(1).all(|r| !r.priority));
            assert!(!rules[0].otherwise);
        }
    }

    #[test]
    fn carpool_suppresses_public_transport() {
        let profile = LifestyleProfile::default();
        assert_eq!(names(Category::Transportation, &profile), vec!["carpool"]);

        let carpooling = LifestyleProfile {
            carpool: YesNo::Yes,
            ..profile
        };
        assert_eq!(
            names(Category::Transportation, &carpooling),
            vec!["public_transport"]
        );
    }

    #[test]
    fn short_trips_suggest_cycling_unless_already_active() {
        let bus = LifestyleProfile {
            transport_mode: TransportMode::Bus,
            travel_km_per_day: 9.0,
            ..LifestyleProfile::default()
        };
        assert_eq!(names(Category::Transportation, &bus), vec!["cycle_short_trips"]);

        let walking = LifestyleProfile {
            transport_mode: TransportMode::Walk,
            ..bus
        };
        assert!(names(Category::Transportation, &walking).is_empty());

        let ten_km = LifestyleProfile {
            travel_km_per_day: 10.0,
            ..bus
        };
        assert!(names(Category::Transportation, &ten_km).is_empty());
    }

    #[test]
    fn electricity_rules_are_independent_of_the_renewable_rule() {
        let profile = LifestyleProfile {
            ac_usage: AcUsage::Daily,
            electricity_units: 600.0,
            ..LifestyleProfile::default()
        };
        assert_eq!(
            names(Category::Electricity, &profile),
            vec!["renewable_plan", "efficient_ac", "phantom_load"]
        );

        let occasional = LifestyleProfile {
            ac_usage: AcUsage::Occasionally,
            renewable_energy: YesNo::Yes,
            ..profile
        };
        assert_eq!(
            names(Category::Electricity, &occasional),
            vec!["efficient_appliances", "phantom_load"]
        );

        let boundary = LifestyleProfile {
            electricity_units: 400.0,
            ..occasional
        };
        assert!(names(Category::Electricity, &boundary).is_empty());
    }

    #[test]
    fn diet_thresholds() {
        let heavy = LifestyleProfile {
            meat_meals_per_week: 11.0,
            local_food: YesNo::Yes,
            ..LifestyleProfile::default()
        };
        assert_eq!(names(Category::Diet, &heavy), vec!["meatless_mondays"]);

        let ten = LifestyleProfile {
            meat_meals_per_week: 10.0,
            ..heavy
        };
        assert_eq!(names(Category::Diet, &ten), vec!["one_more_plant_day"]);

        let five = LifestyleProfile {
            meat_meals_per_week: 5.0,
            dairy_liters_per_day: 2.0,
            local_food: YesNo::No,
            ..heavy
        };
        assert_eq!(names(Category::Diet, &five), vec!["local_produce", "plant_milk"]);
    }

    #[test]
    fn waste_rules() {
        let heavy = LifestyleProfile {
            waste_kg_per_week: 25.0,
            water_usage_liters: 350.0,
            ..LifestyleProfile::default()
        };
        assert_eq!(
            names(Category::Waste, &heavy),
            vec!["start_recycling", "cut_plastics", "low_flow_fixtures"]
        );

        let recycling = LifestyleProfile {
            waste_kg_per_week: 18.0,
            recycle: YesNo::Yes,
            water_usage_liters: 100.0,
            ..LifestyleProfile::default()
        };
        assert_eq!(names(Category::Waste, &recycling), vec!["compost"]);

        let not_recycling = LifestyleProfile {
            recycle: YesNo::No,
            ..recycling
        };
        assert_eq!(names(Category::Waste, &not_recycling), vec!["start_recycling"]);
    }

    #[test]
    fn lifestyle_rules() {
        let profile = LifestyleProfile {
            online_orders: 16,
            shopping_freq: 11,
            ..LifestyleProfile::default()
        };
        assert_eq!(
            names(Category::Lifestyle, &profile),
            vec!["bundle_orders", "quality_over_quantity"]
        );

        let moderate = LifestyleProfile {
            online_orders: 15,
            shopping_freq: 6,
            ..profile
        };
        assert_eq!(names(Category::Lifestyle, &moderate), vec!["second_hand"]);

        let light = LifestyleProfile {
            shopping_freq: 5,
            ..moderate
        };
        assert!(names(Category::Lifestyle, &light).is_empty());
    }
}
