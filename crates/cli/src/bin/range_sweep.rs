//! Sweep fuel mass for one configuration and write the range curve as CSV.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use oni_rocket_calculator::export::{self, sweep as export_sweep};
use oni_rocket_calculator::propulsion::{Calculator, FuelRange, best_point, fuel_for_distance};

#[path = "shared/catalog_args.rs"]
mod catalog_args;
#[path = "shared/rocket_args.rs"]
mod rocket_args;

use rocket_args::RocketArgs;

/// Generate fuel-vs-distance data (CSV) by sweeping the fuel mass.
#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel mass sweep CSV generator")]
struct Cli {
    #[command(flatten)]
    rocket: RocketArgs,

    /// First fuel mass in kg
    #[arg(long, default_value_t = 100.0)]
    start: f64,

    /// Last fuel mass in kg (inclusive)
    #[arg(long, default_value_t = 5_000.0)]
    end: f64,

    /// Fuel mass step in kg
    #[arg(long, default_value_t = 100.0)]
    step: f64,

    /// Report the smallest swept fuel mass reaching this distance (km)
    #[arg(long)]
    target_distance: Option<f64>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/sweep.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    catalog_args::init_logging();
    let cli = Cli::parse();

    let configuration = cli.rocket.configuration()?;
    let range = FuelRange::new(cli.start, cli.end, cli.step)?;
    let catalog = cli.rocket.catalog.load()?;
    let calculator = Calculator::new(&catalog).with_penalty(cli.rocket.penalty());

    let points = calculator.sweep(&configuration, &range);
    let propulsion = configuration.propulsion.to_string();
    let oxidizer = configuration.oxidizer.to_string();
    let records: Vec<export_sweep::Record<'_>> = points
        .iter()
        .map(|point| export_sweep::Record {
            fuel_mass_kg: point.fuel_mass_kg,
            total_mass_kg: point.total_mass_kg,
            distance_km: point.distance_km,
            propulsion: &propulsion,
            oxidizer: &oxidizer,
        })
        .collect();

    let mut writer = export::writer_for_path(&cli.output)?;
    export_sweep::write_all(writer.as_mut(), &records)?;
    writer.flush()?;

    // keep stdout clean for the CSV when writing to '-'
    let to_stdout = cli.output.as_os_str() == "-";
    let mut summary: Box<dyn Write> = if to_stdout {
        Box::new(std::io::stderr())
    } else {
        Box::new(std::io::stdout())
    };

    if !to_stdout {
        writeln!(summary, "Wrote {} samples to {}", points.len(), cli.output.display())?;
    }
    if let Some(best) = best_point(&points) {
        writeln!(
            summary,
            "Best range     : {:.2} km at {:.0} kg fuel",
            best.distance_km, best.fuel_mass_kg
        )?;
    }
    if let Some(target) = cli.target_distance {
        match fuel_for_distance(&points, target) {
            Some(point) => writeln!(
                summary,
                "Target {:.2} km : reached with {:.0} kg fuel ({:.2} km)",
                target, point.fuel_mass_kg, point.distance_km
            )?,
            None => writeln!(
                summary,
                "Target {:.2} km : not reachable within the swept fuel range",
                target
            )?,
        }
    }

    Ok(())
}
