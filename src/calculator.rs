use tracing::debug;

use crate::factors::{
    ac_factor, carpool_factor, local_food_factor, recycle_factor, renewable_factor,
    transport_factor, DAIRY_PER_LITER, DAYS_PER_MONTH, ELECTRICITY_PER_UNIT, MEAT_PER_MEAL,
    ONLINE_PER_ORDER, SHOPPING_PER_TRIP, WASTE_PER_KG, WATER_PER_LITER, WEEKS_PER_MONTH,
};
use crate::profile::LifestyleProfile;
use crate::types::{Breakdown, RawBreakdown};

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn compute_raw_footprint(profile: &LifestyleProfile) -> RawBreakdown {
    let transportation = profile.travel_km_per_day
        * transport_factor(profile.transport_mode)
        * DAYS_PER_MONTH
        * carpool_factor(profile.carpool);

    let electricity = (profile.electricity_units * ELECTRICITY_PER_UNIT
        + ac_factor(profile.ac_usage))
        * renewable_factor(profile.renewable_energy);

    let meat = profile.meat_meals_per_week * MEAT_PER_MEAL * WEEKS_PER_MONTH;
    let dairy = profile.dairy_liters_per_day * DAIRY_PER_LITER * DAYS_PER_MONTH;
    let diet = (meat + dairy) * local_food_factor(profile.local_food);

    let waste_only = profile.waste_kg_per_week * WASTE_PER_KG * WEEKS_PER_MONTH;
    let water = profile.water_usage_liters * WATER_PER_LITER * DAYS_PER_MONTH;
    let waste = (waste_only + water) * recycle_factor(profile.recycle);

    let lifestyle = f64::from(profile.shopping_freq) * SHOPPING_PER_TRIP
        + f64::from(profile.online_orders) * ONLINE_PER_ORDER;

    RawBreakdown {
        transportation,
        electricity,
        diet,
        waste,
        lifestyle,
    }
}

/// Monthly footprint for `profile`. The total is the raw sum rounded once,
/// not the sum of the rounded categories.
pub fn compute_footprint(profile: &LifestyleProfile) -> Breakdown {
    let raw = compute_raw_footprint(profile);
    debug!(?raw, "computed raw footprint");
    Breakdown {
        transportation: round1(raw.transportation),
        electricity: round1(raw.electricity),
        diet: round1(raw.diet),
        waste: round1(raw.waste),
        lifestyle: round1(raw.lifestyle),
        total: round1(raw.total()),
    }
}
