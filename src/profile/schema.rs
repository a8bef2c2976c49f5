use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FootprintError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bike,
    Bus,
    Metro,
    Bicycle,
    Walk,
}

impl TransportMode {
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Car,
        TransportMode::Bike,
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Bicycle,
        TransportMode::Walk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Bus => "bus",
            Self::Metro => "metro",
            Self::Bicycle => "bicycle",
            Self::Walk => "walk",
        }
    }

    /// Muscle-powered modes emit nothing.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Bicycle | Self::Walk)
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| FootprintError::invalid("transportMode", s))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AcUsage {
    Never,
    Occasionally,
    Daily,
}

impl AcUsage {
    pub const ALL: [AcUsage; 3] = [AcUsage::Never, AcUsage::Occasionally, AcUsage::Daily];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Occasionally => "occasionally",
            Self::Daily => "daily",
        }
    }
}

impl Display for AcUsage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AcUsage {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|usage| usage.as_str() == s)
            .ok_or_else(|| FootprintError::invalid("acUsage", s))
    }
}

/// Two-valued answer used by the carpool, renewable, local food and recycle
/// questions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Parses a yes/no answer, reporting failures against `field`.
    pub fn parse_field(field: &'static str, s: &str) -> Result<Self, FootprintError> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(FootprintError::invalid(field, s)),
        }
    }
}

impl Display for YesNo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field("yes/no", s)
    }
}
