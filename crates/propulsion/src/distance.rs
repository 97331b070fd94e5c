//! Range estimation.
//!
//! Steam engines and chemical engines use structurally different formulas and
//! stay separate branches:
//!
//! * steam: `STEAM_RANGE_KM * water_kg / total_mass_kg`
//! * chemical: `fuel_efficiency * oxidizer_multiplier * RANGE_SCALING_FACTOR / total_mass_kg`

use rocket_config::{Catalog, EfficiencyKind};
use rocket_core::constants::{DISTANCE_DECIMALS, RANGE_SCALING_FACTOR, STEAM_RANGE_KM};
use rocket_core::units::round_to;

use crate::LookupError;
use crate::types::{OxidizerType, PropulsionType};

/// Estimated range in km, rounded to two decimals.
///
/// A non-positive (or NaN) total mass yields `0.0`. For chemical
/// engines, an identifier missing from the catalog yields the corresponding
/// [`LookupError`].
pub fn try_distance(
    catalog: &Catalog,
    propulsion: &PropulsionType,
    oxidizer: &OxidizerType,
    fuel_mass_kg: f64,
    total_mass_kg: f64,
) -> Result<f64, LookupError> {
    if total_mass_kg.is_nan() || total_mass_kg <= 0.0 {
        return Ok(0.0);
    }

    let raw = match propulsion {
        PropulsionType::Steam => steam_range_km(fuel_mass_kg, total_mass_kg),
        _ => {
            let fuel_efficiency = catalog
                .efficiency_of(EfficiencyKind::Fuel, propulsion.key())
                .ok_or_else(|| LookupError::UnknownFuel(propulsion.key().to_string()))?;
            let oxidizer_multiplier = catalog
                .efficiency_of(EfficiencyKind::Oxidizer, oxidizer.key())
                .ok_or_else(|| LookupError::UnknownOxidizer(oxidizer.key().to_string()))?;
            chemical_range_km(fuel_efficiency, oxidizer_multiplier, total_mass_kg)
        }
    };

    Ok(round_to(raw, DISTANCE_DECIMALS))
}

/// Infallible form of [`try_distance`]: lookup failures are logged and yield `0.0`.
pub fn distance(
    catalog: &Catalog,
    propulsion: &PropulsionType,
    oxidizer: &OxidizerType,
    fuel_mass_kg: f64,
    total_mass_kg: f64,
) -> f64 {
    match try_distance(catalog, propulsion, oxidizer, fuel_mass_kg, total_mass_kg) {
        Ok(km) => km,
        Err(err) => {
            log::warn!("{err}");
            0.0
        }
    }
}

fn steam_range_km(water_kg: f64, total_mass_kg: f64) -> f64 {
    (STEAM_RANGE_KM * water_kg) / total_mass_kg
}

fn chemical_range_km(fuel_efficiency: f64, oxidizer_multiplier: f64, total_mass_kg: f64) -> f64 {
    (fuel_efficiency * oxidizer_multiplier * RANGE_SCALING_FACTOR) / total_mass_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::oni_base()
    }

    #[test]
    fn steam_branch_ignores_oxidizer() {
        let catalog = catalog();
        let steam = PropulsionType::Steam;
        let expected = round_to(240.0 * 500.0 / 800.0, 2);
        for oxidizer in [
            OxidizerType::None,
            OxidizerType::Oxylite,
            OxidizerType::Other("fertilizer".into()),
        ] {
            assert_eq!(distance(&catalog, &steam, &oxidizer, 500.0, 800.0), expected);
        }
        assert_eq!(expected, 150.0);
    }

    #[test]
    fn steam_branch_rounds_to_two_places() {
        let catalog = catalog();
        let km = distance(
            &catalog,
            &PropulsionType::Steam,
            &OxidizerType::None,
            100.0,
            700.0,
        );
        assert_eq!(km, 34.29);
    }

    #[test]
    fn petroleum_with_liquid_oxygen() {
        let catalog = catalog();
        let km = distance(
            &catalog,
            &PropulsionType::Petroleum,
            &OxidizerType::LiquidOxygen,
            208.0,
            608.0,
        );
        assert_eq!(km, round_to(40.0 * 1.33 * 100.0 / 608.0, 2));
        assert_eq!(km, 8.75);
    }

    #[test]
    fn non_positive_mass_yields_zero() {
        let catalog = catalog();
        for propulsion in [PropulsionType::Steam, PropulsionType::Petroleum] {
            for mass in [0.0, -5.0, f64::NAN] {
                assert_eq!(
                    try_distance(&catalog, &propulsion, &OxidizerType::Oxylite, 100.0, mass),
                    Ok(0.0)
                );
            }
        }
        assert_eq!(
            distance(
                &catalog,
                &PropulsionType::Other("mystery".into()),
                &OxidizerType::None,
                1.0,
                0.0
            ),
            0.0
        );
    }

    #[test]
    fn unknown_identifiers_are_reported() {
        let catalog = catalog();
        let unknown_fuel = PropulsionType::Other("plasma".into());
        assert_eq!(
            try_distance(&catalog, &unknown_fuel, &OxidizerType::LiquidOxygen, 10.0, 1000.0),
            Err(LookupError::UnknownFuel("plasma".into()))
        );
        assert_eq!(
            distance(&catalog, &unknown_fuel, &OxidizerType::LiquidOxygen, 10.0, 1000.0),
            0.0
        );

        assert_eq!(
            try_distance(
                &catalog,
                &PropulsionType::Petroleum,
                &OxidizerType::None,
                10.0,
                1000.0
            ),
            Err(LookupError::UnknownOxidizer("none".into()))
        );
        assert_eq!(
            distance(
                &catalog,
                &PropulsionType::LiquidHydrogen,
                &OxidizerType::Other("fertilizer".into()),
                10.0,
                1000.0
            ),
            0.0
        );
    }

    #[test]
    fn heavier_rockets_never_fly_further() {
        let catalog = catalog();
        let cases = [
            (PropulsionType::Steam, OxidizerType::None),
            (PropulsionType::Petroleum, OxidizerType::Oxylite),
            (PropulsionType::LiquidHydrogen, OxidizerType::LiquidOxygen),
        ];
        for (propulsion, oxidizer) in cases {
            let mut previous = f64::INFINITY;
            for mass in [1.0, 50.0, 608.0, 1_000.0, 12_345.0, 1.0e6] {
                let km = distance(&catalog, &propulsion, &oxidizer, 300.0, mass);
                assert!(km >= 0.0);
                assert!(km <= previous, "{propulsion} at {mass} kg: {km} > {previous}");
                previous = km;
            }
        }
    }
}
