//! Emission factors and reference averages.
//!
//! Factors are monthly kg CO2e unless noted. Values follow EPA,
//! CarbonFootprint.com and FAO figures.

use serde::Serialize;

use crate::profile::{AcUsage, TransportMode, YesNo};
use crate::types::Category;

/// Days per month for daily quantities.
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Weeks per month for weekly quantities.
pub const WEEKS_PER_MONTH: f64 = 4.3;

/// kg CO2 per electricity unit.
pub const ELECTRICITY_PER_UNIT: f64 = 0.5;
/// kg CO2 per meat meal.
pub const MEAT_PER_MEAL: f64 = 3.5;
/// kg CO2 per liter of dairy.
pub const DAIRY_PER_LITER: f64 = 2.5;
/// kg CO2 per kg of waste.
pub const WASTE_PER_KG: f64 = 0.5;
/// kg CO2 per liter of water.
pub const WATER_PER_LITER: f64 = 0.0003;
/// kg CO2 per shopping trip.
pub const SHOPPING_PER_TRIP: f64 = 5.0;
/// kg CO2 per online order, packaging and delivery included.
pub const ONLINE_PER_ORDER: f64 = 6.0;

/// kg CO2 one tree offsets per month.
pub const TREE_OFFSET_KG_PER_MONTH: f64 = 25.0;

/// kg CO2 per km travelled.
pub fn transport_factor(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Car => 0.21,
        TransportMode::Bike => 0.05,
        TransportMode::Bus => 0.08,
        TransportMode::Metro => 0.04,
        TransportMode::Bicycle | TransportMode::Walk => 0.0,
    }
}

pub fn carpool_factor(carpool: YesNo) -> f64 {
    match carpool {
        YesNo::Yes => 0.5,
        YesNo::No => 1.0,
    }
}

/// Flat monthly addition for air conditioning.
pub fn ac_factor(usage: AcUsage) -> f64 {
    match usage {
        AcUsage::Never => 0.0,
        AcUsage::Occasionally => 50.0,
        AcUsage::Daily => 150.0,
    }
}

pub fn renewable_factor(renewable: YesNo) -> f64 {
    match renewable {
        YesNo::Yes => 0.7,
        YesNo::No => 1.0,
    }
}

pub fn local_food_factor(local: YesNo) -> f64 {
    match local {
        YesNo::Yes => 0.85,
        YesNo::No => 1.0,
    }
}

pub fn recycle_factor(recycle: YesNo) -> f64 {
    match recycle {
        YesNo::Yes => 0.7,
        YesNo::No => 1.0,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ReferenceAverages {
    pub overall: f64,
    pub transportation: f64,
    pub electricity: f64,
    pub diet: f64,
    pub waste: f64,
    pub lifestyle: f64,
}

impl ReferenceAverages {
    pub fn category(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Diet => self.diet,
            Category::Waste => self.waste,
            Category::Lifestyle => self.lifestyle,
        }
    }
}

pub const REFERENCE_AVERAGES: ReferenceAverages = ReferenceAverages {
    overall: 850.0,
    transportation: 180.0,
    electricity: 250.0,
    diet: 220.0,
    waste: 100.0,
    lifestyle: 100.0,
};

/// Average monthly footprint in kg CO2e.
pub fn average_footprint() -> f64 {
    REFERENCE_AVERAGES.overall
}

pub fn category_averages() -> [(Category, f64); 5] {
    Category::ALL.map(|category| (category, REFERENCE_AVERAGES.category(category)))
}
