//! String-facing facade over the mass and range calculators.

use rocket_config::Catalog;
use serde::Serialize;

use crate::LookupError;
use crate::distance::{distance, try_distance};
use crate::mass::{MassBreakdown, mass_breakdown, total_mass};
use crate::penalty::PenaltyPolicy;
use crate::types::{OxidizerType, PropulsionType, needs_oxidizer_tank};

/// One rocket as assembled by the caller. Lives for a single calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketConfiguration {
    pub propulsion: PropulsionType,
    pub oxidizer: OxidizerType,
    pub fuel_mass_kg: f64,
    /// Auxiliary component identifiers; duplicates count once each.
    pub extras: Vec<String>,
    /// Mass of further parts already summed by the caller.
    pub extra_mass_kg: f64,
}

impl RocketConfiguration {
    pub fn new(propulsion: &str, oxidizer: Option<&str>, fuel_mass_kg: f64) -> Self {
        Self {
            propulsion: PropulsionType::parse(propulsion),
            oxidizer: OxidizerType::from_option(oxidizer),
            fuel_mass_kg,
            extras: Vec::new(),
            extra_mass_kg: 0.0,
        }
    }

    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }

    pub fn with_extra_mass(mut self, extra_mass_kg: f64) -> Self {
        self.extra_mass_kg = extra_mass_kg;
        self
    }

    pub fn with_fuel_mass(&self, fuel_mass_kg: f64) -> Self {
        Self {
            fuel_mass_kg,
            ..self.clone()
        }
    }

    pub fn has_oxidizer_tank(&self) -> bool {
        needs_oxidizer_tank(&self.propulsion, &self.oxidizer)
    }
}

/// Everything computed for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationReport {
    pub catalog: String,
    pub configuration: RocketConfiguration,
    pub has_oxidizer_tank: bool,
    pub breakdown: MassBreakdown,
    pub total_mass_kg: f64,
    pub penalty: PenaltyPolicy,
    /// Mass fed to the range formula; equals `total_mass_kg` unless a penalty applies.
    pub effective_mass_kg: f64,
    pub distance_km: f64,
    pub warnings: Vec<String>,
}

/// Mass and range calculator bound to one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    catalog: &'a Catalog,
    penalty: PenaltyPolicy,
}

impl Calculator<'static> {
    /// Calculator over the process-wide canonical catalog.
    pub fn canonical() -> Self {
        Self::new(rocket_config::canonical())
    }
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<'a> Calculator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            penalty: PenaltyPolicy::Disabled,
        }
    }

    pub fn with_penalty(mut self, penalty: PenaltyPolicy) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn penalty(&self) -> PenaltyPolicy {
        self.penalty
    }

    /// Total mass in kg for a propulsion identifier and a list of extra components.
    pub fn total_mass<S: AsRef<str>>(
        &self,
        propulsion: &str,
        fuel_mass_kg: f64,
        extras: &[S],
        has_oxidizer_tank: bool,
    ) -> f64 {
        total_mass(
            self.catalog,
            &PropulsionType::parse(propulsion),
            fuel_mass_kg,
            extras,
            has_oxidizer_tank,
        )
    }

    /// Range in km for an already known total mass. The penalty policy is not applied here.
    pub fn distance(
        &self,
        propulsion: &str,
        oxidizer: Option<&str>,
        fuel_mass_kg: f64,
        total_mass_kg: f64,
    ) -> f64 {
        distance(
            self.catalog,
            &PropulsionType::parse(propulsion),
            &OxidizerType::from_option(oxidizer),
            fuel_mass_kg,
            total_mass_kg,
        )
    }

    /// End-to-end range: derive the oxidizer tank, sum the mass, estimate the distance.
    pub fn estimate_range(
        &self,
        propulsion: &str,
        oxidizer: Option<&str>,
        fuel_mass_kg: f64,
        extra_components_mass_kg: f64,
    ) -> f64 {
        let config = RocketConfiguration::new(propulsion, oxidizer, fuel_mass_kg)
            .with_extra_mass(extra_components_mass_kg);
        self.evaluate(&config).distance_km
    }

    /// Full evaluation; every diagnostic is logged at warn level and kept in the report.
    pub fn evaluate(&self, config: &RocketConfiguration) -> CalculationReport {
        let report = self.assess(config);
        for warning in &report.warnings {
            log::warn!("{warning}");
        }
        report
    }

    /// Same as [`Calculator::evaluate`] but without emitting log records.
    pub fn assess(&self, config: &RocketConfiguration) -> CalculationReport {
        let has_oxidizer_tank = config.has_oxidizer_tank();
        let account = mass_breakdown(
            self.catalog,
            &config.propulsion,
            config.fuel_mass_kg,
            &config.extras,
            config.extra_mass_kg,
            has_oxidizer_tank,
        );
        let mut diagnostics: Vec<LookupError> = account.diagnostics;

        let total_mass_kg = account.breakdown.total_kg();
        let effective_mass_kg = self.penalty.effective_mass(total_mass_kg);
        let distance_km = try_distance(
            self.catalog,
            &config.propulsion,
            &config.oxidizer,
            config.fuel_mass_kg,
            effective_mass_kg,
        )
        .unwrap_or_else(|err| {
            diagnostics.push(err);
            0.0
        });

        CalculationReport {
            catalog: self.catalog.label(),
            configuration: config.clone(),
            has_oxidizer_tank,
            breakdown: account.breakdown,
            total_mass_kg,
            penalty: self.penalty,
            effective_mass_kg,
            distance_km,
            warnings: diagnostics.iter().map(ToString::to_string).collect(),
        }
    }
}
