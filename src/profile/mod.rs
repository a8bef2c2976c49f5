pub mod normalize;
pub mod schema;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FootprintError;

pub use schema::{AcUsage, TransportMode, YesNo};

/// Lifestyle answers collected for one estimate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LifestyleProfile {
    pub travel_km_per_day: f64,
    pub transport_mode: TransportMode,
    pub carpool: YesNo,
    pub electricity_units: f64,
    pub ac_usage: AcUsage,
    pub renewable_energy: YesNo,
    pub meat_meals_per_week: f64,
    pub dairy_liters_per_day: f64,
    pub local_food: YesNo,
    pub waste_kg_per_week: f64,
    pub recycle: YesNo,
    pub water_usage_liters: f64,
    pub shopping_freq: u32,
    pub online_orders: u32,
}

impl Default for LifestyleProfile {
    fn default() -> Self {
        Self {
            travel_km_per_day: 30.0,
            transport_mode: TransportMode::Car,
            carpool: YesNo::No,
            electricity_units: 300.0,
            ac_usage: AcUsage::Occasionally,
            renewable_energy: YesNo::No,
            meat_meals_per_week: 7.0,
            dairy_liters_per_day: 1.0,
            local_food: YesNo::No,
            waste_kg_per_week: 15.0,
            recycle: YesNo::No,
            water_usage_liters: 200.0,
            shopping_freq: 5,
            online_orders: 10,
        }
    }
}

impl LifestyleProfile {
    /// Parses a JSON profile. Missing fields keep their form defaults.
    pub fn from_json(raw: &str) -> Result<Self, FootprintError> {
        let patch: ProfilePatch = serde_json::from_str(raw)?;
        let mut profile = Self::default();
        profile.apply(&patch);
        Ok(profile)
    }

    pub fn apply(&mut self, patch: &ProfilePatch) {
        if let Some(v) = patch.travel_km_per_day {
            self.travel_km_per_day = v;
        }
        if let Some(v) = patch.transport_mode {
            self.transport_mode = v;
        }
        if let Some(v) = patch.carpool {
            self.carpool = v;
        }
        if let Some(v) = patch.electricity_units {
            self.electricity_units = v;
        }
        if let Some(v) = patch.ac_usage {
            self.ac_usage = v;
        }
        if let Some(v) = patch.renewable_energy {
            self.renewable_energy = v;
        }
        if let Some(v) = patch.meat_meals_per_week {
            self.meat_meals_per_week = v;
        }
        if let Some(v) = patch.dairy_liters_per_day {
            self.dairy_liters_per_day = v;
        }
        if let Some(v) = patch.local_food {
            self.local_food = v;
        }
        if let Some(v) = patch.waste_kg_per_week {
            self.waste_kg_per_week = v;
        }
        if let Some(v) = patch.recycle {
            self.recycle = v;
        }
        if let Some(v) = patch.water_usage_liters {
            self.water_usage_liters = v;
        }
        if let Some(v) = patch.shopping_freq {
            self.shopping_freq = v;
        }
        if let Some(v) = patch.online_orders {
            self.online_orders = v;
        }
    }

    pub fn with_patch(mut self, patch: &ProfilePatch) -> Self {
        self.apply(patch);
        self
    }
}

/// A partial profile: config `[profile]` tables, JSON profile files and CLI
/// flags all layer onto a [`LifestyleProfile`] through this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_km_per_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_mode: Option<TransportMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carpool: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity_units: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_usage: Option<AcUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewable_energy: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meat_meals_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dairy_liters_per_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_food: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_kg_per_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycle: Option<YesNo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_usage_liters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_freq: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_orders: Option<u32>,
}

impl ProfilePatch {
    pub fn from_json(raw: &str) -> Result<Self, FootprintError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, FootprintError> {
        let raw = fs::read_to_string(path).map_err(|source| FootprintError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_form_defaults() {
        let profile = LifestyleProfile::default();
        assert_eq!(profile.travel_km_per_day, 30.0);
        assert_eq!(profile.transport_mode, TransportMode::Car);
        assert_eq!(profile.ac_usage, AcUsage::Occasionally);
        assert_eq!(profile.shopping_freq, 5);
        assert_eq!(profile.online_orders, 10);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let profile =
            LifestyleProfile::from_json(r#"{"transportMode": "bus", "onlineOrders": 2}"#)
                .expect("failed to parse profile");
        assert_eq!(profile.transport_mode, TransportMode::Bus);
        assert_eq!(profile.online_orders, 2);
        assert_eq!(profile.electricity_units, 300.0);
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let err = LifestyleProfile::from_json(r#"{"acUsage": "always"}"#).unwrap_err();
        assert!(matches!(err, FootprintError::ProfileParse(_)));
        assert!(err.to_string().contains("always"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(ProfilePatch::from_json(r#"{"travelMilesPerDay": 4}"#).is_err());
    }

    #[test]
    fn patches_layer_in_order() {
        let first = ProfilePatch {
            travel_km_per_day: Some(12.0),
            recycle: Some(YesNo::Yes),
            ..Default::default()
        };
        let second = ProfilePatch {
            travel_km_per_day: Some(4.0),
            ..Default::default()
        };
        let profile = LifestyleProfile::default()
            .with_patch(&first)
            .with_patch(&second);
        assert_eq!(profile.travel_km_per_day, 4.0);
        assert_eq!(profile.recycle, YesNo::Yes);
        assert!(ProfilePatch::default().is_empty());
        assert!(!first.is_empty());
    }

    #[test]
    fn profile_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(LifestyleProfile::default()).unwrap();
        assert_eq!(json["travelKmPerDay"], 30.0);
        assert_eq!(json["transportMode"], "car");
        assert_eq!(json["renewableEnergy"], "no");
    }
}
