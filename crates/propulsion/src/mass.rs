//! Total rocket mass under the fixed-tank accounting policy.
//!
//! total = engine + one fuel tank + fuel + (one oxidizer tank) + named components + raw extra mass

use rocket_config::{Catalog, MassKind};
use serde::Serialize;

use crate::LookupError;
use crate::types::PropulsionType;

/// Individual mass contributions in kg.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MassBreakdown {
    pub engine_kg: f64,
    pub fuel_tank_kg: f64,
    pub fuel_kg: f64,
    pub oxidizer_tank_kg: f64,
    pub components_kg: f64,
    pub extra_mass_kg: f64,
}

impl MassBreakdown {
    pub fn total_kg(&self) -> f64 {
        self.engine_kg
            + self.fuel_tank_kg
            + self.fuel_kg
            + self.oxidizer_tank_kg
            + self.components_kg
            + self.extra_mass_kg
    }
}

/// Breakdown together with the lookups that fell back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MassAccount {
    pub breakdown: MassBreakdown,
    pub diagnostics: Vec<LookupError>,
}

/// Itemize the mass of one configuration without emitting any log records.
///
/// Extras are counted once per occurrence; unknown ones weigh nothing and are
/// reported. An unknown engine uses the catalog's default engine mass.
pub fn mass_breakdown<I, S>(
    catalog: &Catalog,
    propulsion: &PropulsionType,
    fuel_mass_kg: f64,
    extras: I,
    extra_mass_kg: f64,
    has_oxidizer_tank: bool,
) -> MassAccount
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut diagnostics = Vec::new();

    let engine_kg = catalog
        .mass_of(MassKind::Engine, propulsion.key())
        .unwrap_or_else(|| {
            diagnostics.push(LookupError::UnknownEngine {
                name: propulsion.key().to_string(),
                default_kg: catalog.default_engine_mass_kg,
            });
            catalog.default_engine_mass_kg
        });

    let mut components_kg = 0.0;
    for extra in extras {
        let extra = extra.as_ref();
        match catalog.mass_of(MassKind::Component, extra) {
            Some(kg) => components_kg += kg,
            None => diagnostics.push(LookupError::UnknownComponent(extra.to_string())),
        }
    }

    let breakdown = MassBreakdown {
        engine_kg,
        fuel_tank_kg: catalog.fuel_tank_mass_kg,
        fuel_kg: fuel_mass_kg,
        oxidizer_tank_kg: if has_oxidizer_tank {
            catalog.oxidizer_tank_mass_kg
        } else {
            0.0
        },
        components_kg,
        extra_mass_kg,
    };
    log::debug!(
        "mass breakdown for {propulsion}: {breakdown:?} (total {} kg)",
        breakdown.total_kg()
    );

    MassAccount {
        breakdown,
        diagnostics,
    }
}

/// Total rocket mass in kg. Fallbacks are logged at warn level.
pub fn total_mass<I, S>(
    catalog: &Catalog,
    propulsion: &PropulsionType,
    fuel_mass_kg: f64,
    extras: I,
    has_oxidizer_tank: bool,
) -> f64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let account = mass_breakdown(
        catalog,
        propulsion,
        fuel_mass_kg,
        extras,
        0.0,
        has_oxidizer_tank,
    );
    for diagnostic in &account.diagnostics {
        log::warn!("{diagnostic}");
    }
    account.breakdown.total_kg()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_EXTRAS: [&str; 0] = [];

    #[test]
    fn petroleum_with_oxidizer_tank_weighs_608() {
        let catalog = Catalog::oni_base();
        let total = total_mass(&catalog, &PropulsionType::Petroleum, 208.0, NO_EXTRAS, true);
        assert_eq!(total, 608.0);
    }

    #[test]
    fn steam_skips_oxidizer_tank() {
        let catalog = Catalog::oni_base();
        let account = mass_breakdown(&catalog, &PropulsionType::Steam, 500.0, NO_EXTRAS, 0.0, false);
        assert_eq!(account.breakdown.oxidizer_tank_kg, 0.0);
        assert_eq!(account.breakdown.total_kg(), 800.0);
        assert!(account.diagnostics.is_empty());
    }

    #[test]
    fn duplicate_extras_are_each_counted() {
        let catalog = Catalog::oni_base();
        let account = mass_breakdown(
            &catalog,
            &PropulsionType::LiquidHydrogen,
            100.0,
            ["cargo_bay", "Cargo Bay", "research_station"],
            25.0,
            true,
        );
        assert_eq!(account.breakdown.engine_kg, 500.0);
        assert_eq!(account.breakdown.components_kg, 4200.0);
        assert_eq!(account.breakdown.total_kg(), 500.0 + 100.0 + 100.0 + 100.0 + 4200.0 + 25.0);
    }

    #[test]
    fn unknown_engine_and_component_fall_back() {
        let catalog = Catalog::oni_base();
        let account = mass_breakdown(
            &catalog,
            &PropulsionType::Other("ion".into()),
            0.0,
            vec!["warp_core".to_string()],
            0.0,
            true,
        );
        assert_eq!(account.breakdown.engine_kg, 200.0);
        assert_eq!(account.breakdown.components_kg, 0.0);
        assert_eq!(account.breakdown.total_kg(), 400.0);
        assert_eq!(
            account.diagnostics,
            vec![
                LookupError::UnknownEngine {
                    name: "ion".into(),
                    default_kg: 200.0
                },
                LookupError::UnknownComponent("warp_core".into()),
            ]
        );
    }

    #[test]
    fn mass_grows_with_fuel_and_extras() {
        let catalog = Catalog::oni_base();
        let mut previous = 0.0;
        for fuel in [0.0, 10.0, 250.0, 900.0, 5_000.0] {
            let total = total_mass(&catalog, &PropulsionType::Petroleum, fuel, NO_EXTRAS, true);
            assert!(total >= previous);
            assert!(total > 0.0);
            previous = total;
        }

        let mut extras: Vec<&str> = Vec::new();
        let mut previous = total_mass(&catalog, &PropulsionType::Steam, 100.0, &extras, false);
        for extra in ["sightseeing", "gas_cargo_bay", "unknown_part", "sightseeing"] {
            extras.push(extra);
            let total = total_mass(&catalog, &PropulsionType::Steam, 100.0, &extras, false);
            assert!(total >= previous);
            previous = total;
        }
    }
}
