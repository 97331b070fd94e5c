//! Print the active part catalog.

use clap::{Parser, ValueEnum};
use oni_rocket_calculator::export::report;

#[path = "shared/catalog_args.rs"]
mod catalog_args;

use catalog_args::CatalogArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the part catalog used for range estimates")]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Toml)]
    format: Format,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Toml,
    Json,
}

fn main() -> anyhow::Result<()> {
    catalog_args::init_logging();
    let cli = Cli::parse();
    let catalog = cli.catalog.load()?;

    match cli.format {
        Format::Toml => print!("{}", toml::to_string_pretty(&catalog)?),
        Format::Json => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            report::write_json(&mut handle, &catalog)?;
        }
    }

    Ok(())
}
