use crate::profile::LifestyleProfile;

pub const MAX_TRAVEL_KM_PER_DAY: f64 = 100.0;
pub const MAX_ELECTRICITY_UNITS: f64 = 1000.0;
pub const MAX_MEAT_MEALS_PER_WEEK: f64 = 21.0;
pub const MAX_DAIRY_LITERS_PER_DAY: f64 = 3.0;
pub const MAX_WASTE_KG_PER_WEEK: f64 = 50.0;
pub const MAX_WATER_USAGE_LITERS: f64 = 1000.0;
pub const MAX_SHOPPING_FREQ: u32 = 20;
pub const MAX_ONLINE_ORDERS: u32 = 30;

fn clamp_field(value: &mut f64, max: f64, name: &'static str, changed: &mut Vec<&'static str>) {
    // clamp() passes NaN through.
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, max) };
    if clamped != *value {
        *value = clamped;
        changed.push(name);
    }
}

fn clamp_count(value: &mut u32, max: u32, name: &'static str, changed: &mut Vec<&'static str>) {
    if *value > max {
        *value = max;
        changed.push(name);
    }
}

/// Clamps every numeric answer into the range the input form allows.
/// Returns the wire names of the fields that were changed.
pub fn normalize_profile(profile: &mut LifestyleProfile) -> Vec<&'static str> {
    let mut changed = Vec::new();
    clamp_field(
        &mut profile.travel_km_per_day,
        MAX_TRAVEL_KM_PER_DAY,
        "travelKmPerDay",
        &mut changed,
    );
    clamp_field(
        &mut profile.electricity_units,
        MAX_ELECTRICITY_UNITS,
        "electricityUnits",
        &mut changed,
    );
    clamp_field(
        &mut profile.meat_meals_per_week,
        MAX_MEAT_MEALS_PER_WEEK,
        "meatMealsPerWeek",
        &mut changed,
    );
    clamp_field(
        &mut profile.dairy_liters_per_day,
        MAX_DAIRY_LITERS_PER_DAY,
        "dairyLitersPerDay",
        &mut changed,
    );
    clamp_field(
        &mut profile.waste_kg_per_week,
        MAX_WASTE_KG_PER_WEEK,
        "wasteKgPerWeek",
        &mut changed,
    );
    clamp_field(
        &mut profile.water_usage_liters,
        MAX_WATER_USAGE_LITERS,
        "waterUsageLiters",
        &mut changed,
    );
    clamp_count(
        &mut profile.shopping_freq,
        MAX_SHOPPING_FREQ,
        "shoppingFreq",
        &mut changed,
    );
    clamp_count(
        &mut profile.online_orders,
        MAX_ONLINE_ORDERS,
        "onlineOrders",
        &mut changed,
    );
    changed
}
