//! Propulsion and oxidizer identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use rocket_core::ident::normalize;
use serde::{Serialize, Serializer};

/// Engine/fuel family. Selects engine mass and the range formula branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropulsionType {
    /// Water heated by an external source; uses the steam range formula.
    Steam,
    Petroleum,
    /// Accepts `hydrogen` as an alias.
    LiquidHydrogen,
    /// Any identifier a custom catalog may define.
    Other(String),
}

impl PropulsionType {
    /// Parse a caller-supplied identifier. Never fails; unknown names become [`PropulsionType::Other`].
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "steam" => Self::Steam,
            "petroleum" => Self::Petroleum,
            "liquid_hydrogen" | "hydrogen" => Self::LiquidHydrogen,
            other => Self::Other(other.to_string()),
        }
    }

    /// Catalog key for this propulsion type.
    pub fn key(&self) -> &str {
        match self {
            Self::Steam => "steam",
            Self::Petroleum => "petroleum",
            Self::LiquidHydrogen => "liquid_hydrogen",
            Self::Other(name) => name,
        }
    }

    pub fn is_steam(&self) -> bool {
        matches!(self, Self::Steam)
    }
}

impl FromStr for PropulsionType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PropulsionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for PropulsionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Oxidizer selection, including the explicit "no oxidizer" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OxidizerType {
    #[default]
    None,
    Oxylite,
    LiquidOxygen,
    Other(String),
}

impl OxidizerType {
    /// Parse a caller-supplied identifier; empty strings and `none` map to [`OxidizerType::None`].
    pub fn parse(raw: &str) -> Self {
        match normalize(raw).as_str() {
            "" | "none" => Self::None,
            "oxylite" => Self::Oxylite,
            "liquid_oxygen" => Self::LiquidOxygen,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse an optional identifier; `None` is the "no oxidizer" sentinel.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn key(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Oxylite => "oxylite",
            Self::LiquidOxygen => "liquid_oxygen",
            Self::Other(name) => name,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for OxidizerType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for OxidizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for OxidizerType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Whether a rocket carries an oxidizer tank: never for steam, never without an oxidizer.
pub fn needs_oxidizer_tank(propulsion: &PropulsionType, oxidizer: &OxidizerType) -> bool {
    !(propulsion.is_steam() || oxidizer.is_none())
}
