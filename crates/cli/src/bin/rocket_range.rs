//! Estimate total mass and range for one rocket configuration.

use std::path::PathBuf;

use clap::Parser;
use oni_rocket_calculator::export::report;
use oni_rocket_calculator::propulsion::{CalculationReport, Calculator};

#[path = "shared/catalog_args.rs"]
mod catalog_args;
#[path = "shared/rocket_args.rs"]
mod rocket_args;

use rocket_args::RocketArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rocket mass and range estimator")]
struct Cli {
    #[command(flatten)]
    rocket: RocketArgs,

    /// Print the full report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Also write the JSON report to this file (use '-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    catalog_args::init_logging();
    let cli = Cli::parse();

    let configuration = cli.rocket.configuration()?;
    let catalog = cli.rocket.catalog.load()?;
    let calculator = Calculator::new(&catalog).with_penalty(cli.rocket.penalty());
    let result = calculator.evaluate(&configuration);

    if cli.json {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        report::write_json(&mut handle, &result)?;
    } else {
        print_report(&result);
    }

    if let Some(path) = &cli.output {
        report::write_json_file(path, &result)?;
        log::info!("wrote report to {}", path.display());
    }

    Ok(())
}

fn print_report(result: &CalculationReport) {
    let config = &result.configuration;
    let parts = &result.breakdown;
    println!("Catalog        : {}", result.catalog);
    println!("Propulsion     : {}", config.propulsion);
    println!("Oxidizer       : {}", config.oxidizer);
    if !config.extras.is_empty() {
        println!("Extras         : {}", config.extras.join(", "));
    }
    println!("Mass breakdown :");
    let rows = [
        ("Engine", parts.engine_kg),
        ("Fuel tank", parts.fuel_tank_kg),
        ("Fuel", parts.fuel_kg),
        ("Oxidizer tank", parts.oxidizer_tank_kg),
        ("Components", parts.components_kg),
        ("Extra mass", parts.extra_mass_kg),
    ];
    for (label, kg) in rows {
        println!("  {label:<14} {kg:>12.1} kg");
    }
    println!("Total mass     : {:.1} kg", result.total_mass_kg);
    if result.effective_mass_kg != result.total_mass_kg {
        println!("Effective mass : {:.1} kg (weight penalty)", result.effective_mass_kg);
    }
    println!("Distance       : {:.2} km", result.distance_km);
    for warning in &result.warnings {
        println!("[warn] {warning}");
    }
}
