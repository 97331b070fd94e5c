use std::path::PathBuf;

use clap::Args;
use oni_rocket_calculator::config::{self, Catalog};

/// Catalog selection shared by every binary.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file (.toml or YAML) or directory of .toml catalogs (defaults to the built-in oni-base catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Catalog name to pick when --catalog holds several catalogs
    #[arg(long, requires = "catalog")]
    pub catalog_name: Option<String>,
}

impl CatalogArgs {
    pub fn load(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog else {
            return Ok(config::canonical().clone());
        };
        let catalog = match &self.catalog_name {
            Some(name) => config::find_catalog(config::load_catalogs(path)?, name)?,
            None => config::load_catalog(path)?,
        };
        log::info!("using catalog {} from {}", catalog.label(), path.display());
        Ok(catalog)
    }
}

/// Warnings by default; `RUST_LOG` overrides.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();
}
