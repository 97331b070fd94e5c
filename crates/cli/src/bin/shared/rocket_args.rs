use anyhow::anyhow;
use clap::Args;
use oni_rocket_calculator::propulsion::{PenaltyPolicy, RocketConfiguration};

use super::catalog_args::CatalogArgs;

/// Rocket assembly flags shared by `rocket_range` and `range_sweep`.
#[derive(Args, Debug)]
pub struct RocketArgs {
    /// Propulsion type: steam, petroleum, liquid_hydrogen (alias hydrogen)
    #[arg(long)]
    pub propulsion: String,

    /// Oxidizer type: oxylite, liquid_oxygen, none (omit for steam)
    #[arg(long)]
    pub oxidizer: Option<String>,

    /// Fuel mass in kg (water for steam engines)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub fuel_mass: f64,

    /// Extra component identifier; repeat for several parts
    #[arg(long = "extra")]
    pub extras: Vec<String>,

    /// Mass of further parts in kg, added on top of --extra components
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub extra_mass: f64,

    /// Feed the superlinear weight penalty into the range formula
    #[arg(long, default_value_t = false)]
    pub weight_penalty: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

impl RocketArgs {
    pub fn configuration(&self) -> anyhow::Result<RocketConfiguration> {
        check_mass("--fuel-mass", self.fuel_mass)?;
        check_mass("--extra-mass", self.extra_mass)?;
        Ok(
            RocketConfiguration::new(&self.propulsion, self.oxidizer.as_deref(), self.fuel_mass)
                .with_extras(self.extras.iter().cloned())
                .with_extra_mass(self.extra_mass),
        )
    }

    pub fn penalty(&self) -> PenaltyPolicy {
        if self.weight_penalty {
            PenaltyPolicy::EffectiveMass
        } else {
            PenaltyPolicy::Disabled
        }
    }
}

fn check_mass(flag: &str, value: f64) -> anyhow::Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(anyhow!("{flag} must be a non-negative number of kg (got {value})"))
    }
}
