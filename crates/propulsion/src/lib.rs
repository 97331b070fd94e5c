//! Propulsion identifiers, mass accounting, and range estimation.
//!
//! The two calculators are pure functions over an injected [`Catalog`]:
//! [`mass::total_mass`] sums part masses, [`distance::distance`] turns the
//! total into a range estimate. [`Calculator`] bundles them for callers that
//! start from plain strings.

pub mod calculator;
pub mod distance;
pub mod mass;
pub mod penalty;
pub mod sweep;
pub mod types;

pub use calculator::{CalculationReport, Calculator, RocketConfiguration};
pub use distance::{distance, try_distance};
pub use mass::{MassAccount, MassBreakdown, mass_breakdown, total_mass};
pub use penalty::{PenaltyPolicy, weight_penalty};
pub use rocket_config::Catalog;
pub use sweep::{
    FuelRange, MAX_SWEEP_SAMPLES, SweepError, SweepPoint, best_point, fuel_for_distance,
};
pub use types::{OxidizerType, PropulsionType, needs_oxidizer_tank};

use thiserror::Error;

/// Catalog lookups that did not resolve. Always recoverable: the calculators
/// fall back to a zero or default value and report one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("fuel type '{0}' not found in catalog")]
    UnknownFuel(String),
    #[error("oxidizer type '{0}' not found in catalog")]
    UnknownOxidizer(String),
    #[error("engine type '{name}' not found in catalog; using default mass of {default_kg} kg")]
    UnknownEngine { name: String, default_kg: f64 },
    #[error("component '{0}' not found in catalog; counted as 0 kg")]
    UnknownComponent(String),
}
