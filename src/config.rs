use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::profile::{LifestyleProfile, ProfilePatch};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "ProfilePatch::is_empty")]
    pub profile: ProfilePatch,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub clamp: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output: Option<OutputFormat>,
    pub clamp: Option<bool>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/carbon-footprint/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        Self::from_toml(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(output) = overrides.output {
            self.output.format = output;
        }
        if let Some(clamp) = overrides.clamp {
            self.input.clamp = clamp;
        }
    }

    /// Form defaults with the `[profile]` table layered on top.
    pub fn base_profile(&self) -> LifestyleProfile {
        LifestyleProfile::default().with_patch(&self.profile)
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r#"# Answers used when no flag or profile file overrides them.
[profile]
travelKmPerDay = 30
transportMode = "car"
carpool = "no"
electricityUnits = 300
acUsage = "occasionally"
renewableEnergy = "no"
meatMealsPerWeek = 7
dairyLitersPerDay = 1
localFood = "no"
wasteKgPerWeek = 15
recycle = "no"
waterUsageLiters = 200
shoppingFreq = 5
onlineOrders = 10

[output]
format = "table"

[input]
clamp = false
"#;
        template.to_string()
    }
}
