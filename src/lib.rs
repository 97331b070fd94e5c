//! Mass and range estimates for simple Oxygen Not Included rockets.
//!
//! The calculation engine lives in the workspace crates; this facade re-exports
//! them and offers the entry points most callers need, bound to the
//! canonical `oni-base` catalog. Keeping the logic in library crates lets
//! multiple front-ends (CLI, web bridge, tests) share it.

pub use rocket_config as config;
pub use rocket_core as common;
pub use rocket_export as export;
pub use rocket_propulsion as propulsion;

use rocket_propulsion::Calculator;

/// Total rocket mass in kg under the canonical catalog.
///
/// `extras` are auxiliary component identifiers; duplicates are counted once each.
pub fn total_mass<S: AsRef<str>>(
    propulsion: &str,
    fuel_mass_kg: f64,
    extras: &[S],
    has_oxidizer_tank: bool,
) -> f64 {
    Calculator::canonical().total_mass(propulsion, fuel_mass_kg, extras, has_oxidizer_tank)
}

/// Range in km for a rocket whose total mass is already known.
pub fn distance(
    propulsion: &str,
    oxidizer: Option<&str>,
    fuel_mass_kg: f64,
    total_mass_kg: f64,
) -> f64 {
    Calculator::canonical().distance(propulsion, oxidizer, fuel_mass_kg, total_mass_kg)
}

/// Range in km from raw inputs: the oxidizer tank and total mass are derived.
pub fn estimate_range(
    propulsion: &str,
    oxidizer: Option<&str>,
    fuel_mass_kg: f64,
    extra_components_mass_kg: f64,
) -> f64 {
    Calculator::canonical().estimate_range(
        propulsion,
        oxidizer,
        fuel_mass_kg,
        extra_components_mass_kg,
    )
}

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
