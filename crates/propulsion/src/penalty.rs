//! Superlinear mass penalty.
//!
//! Not part of the reference range formula; the [`crate::Calculator`] applies
//! it only under [`PenaltyPolicy::EffectiveMass`].

use rocket_core::constants::{PENALTY_EXPONENT, PENALTY_REFERENCE_MASS_KG};
use serde::Serialize;

/// `max(mass, (mass / 300)^3.2)`.
pub fn weight_penalty(mass_kg: f64) -> f64 {
    mass_kg.max((mass_kg / PENALTY_REFERENCE_MASS_KG).powf(PENALTY_EXPONENT))
}

/// How total mass feeds the range formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyPolicy {
    /// Range uses the plain total mass.
    #[default]
    Disabled,
    /// Range uses [`weight_penalty`] of the total mass.
    EffectiveMass,
}

impl PenaltyPolicy {
    pub fn effective_mass(self, total_mass_kg: f64) -> f64 {
        match self {
            Self::Disabled => total_mass_kg,
            Self::EffectiveMass => weight_penalty(total_mass_kg),
        }
    }
}
