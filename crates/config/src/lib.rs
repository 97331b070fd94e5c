//! Part catalog models and loaders for the ONI Rocket Calculator.
//!
//! A [`Catalog`] is the read-only set of efficiency and mass constants keyed by
//! identifier. Exactly one catalog is canonical ([`Catalog::oni_base`]); other
//! catalogs can be loaded from TOML or YAML files but are never merged into it.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use rocket_core::ident::normalize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the canonical catalog.
pub const CANONICAL_NAME: &str = "oni-base";
/// Version of the canonical catalog.
pub const CANONICAL_VERSION: u32 = 1;

/// Which efficiency table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyKind {
    /// Fuel efficiency in km/kg, keyed by propulsion type.
    Fuel,
    /// Unitless oxidizer multiplier, keyed by oxidizer type.
    Oxidizer,
}

/// Which mass table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassKind {
    /// Engine mass in kg, keyed by propulsion type.
    Engine,
    /// Auxiliary component mass in kg, keyed by component identifier.
    Component,
}

/// Named, versioned set of part constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    pub version: u32,
    pub fuel_tank_mass_kg: f64,
    pub oxidizer_tank_mass_kg: f64,
    #[serde(default = "default_engine_mass_kg")]
    pub default_engine_mass_kg: f64,
    pub fuel_efficiency_km_per_kg: BTreeMap<String, f64>,
    pub oxidizer_multiplier: BTreeMap<String, f64>,
    pub engine_mass_kg: BTreeMap<String, f64>,
    #[serde(default)]
    pub component_mass_kg: BTreeMap<String, f64>,
}

fn default_engine_mass_kg() -> f64 {
    200.0
}

impl Catalog {
    /// The canonical `oni-base` v1 catalog.
    pub fn oni_base() -> Self {
        Self {
            name: CANONICAL_NAME.to_string(),
            version: CANONICAL_VERSION,
            fuel_tank_mass_kg: 100.0,
            oxidizer_tank_mass_kg: 100.0,
            default_engine_mass_kg: default_engine_mass_kg(),
            fuel_efficiency_km_per_kg: table(&[
                ("steam", 20.0),
                ("petroleum", 40.0),
                ("liquid_hydrogen", 60.0),
            ]),
            oxidizer_multiplier: table(&[("oxylite", 1.0), ("liquid_oxygen", 1.33)]),
            engine_mass_kg: table(&[
                ("steam", 200.0),
                ("petroleum", 200.0),
                ("liquid_hydrogen", 500.0),
            ]),
            component_mass_kg: table(&[
                ("cargo_bay", 2000.0),
                ("liquid_cargo_bay", 2000.0),
                ("gas_cargo_bay", 2000.0),
                ("sightseeing", 200.0),
                ("research_station", 200.0),
                ("command_capsule", 200.0),
            ]),
        }
    }

    /// Look up an efficiency constant. `identifier` is normalized first.
    pub fn efficiency_of(&self, kind: EfficiencyKind, identifier: &str) -> Option<f64> {
        let map = match kind {
            EfficiencyKind::Fuel => &self.fuel_efficiency_km_per_kg,
            EfficiencyKind::Oxidizer => &self.oxidizer_multiplier,
        };
        map.get(&normalize(identifier)).copied()
    }

    /// Look up a mass constant in kg. `identifier` is normalized first.
    pub fn mass_of(&self, kind: MassKind, identifier: &str) -> Option<f64> {
        let map = match kind {
            MassKind::Engine => &self.engine_mass_kg,
            MassKind::Component => &self.component_mass_kg,
        };
        map.get(&normalize(identifier)).copied()
    }

    /// Identifier and version label, e.g. `oni-base@v1`.
    pub fn label(&self) -> String {
        format!("{}@v{}", self.name, self.version)
    }

    /// Check that every constant is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("catalog name must not be empty".into()));
        }
        let scalars = [
            ("fuel_tank_mass_kg", self.fuel_tank_mass_kg),
            ("oxidizer_tank_mass_kg", self.oxidizer_tank_mass_kg),
            ("default_engine_mass_kg", self.default_engine_mass_kg),
        ];
        for (field, value) in scalars {
            check_constant(&self.name, field, value)?;
        }
        let tables = [
            ("fuel_efficiency_km_per_kg", &self.fuel_efficiency_km_per_kg),
            ("oxidizer_multiplier", &self.oxidizer_multiplier),
            ("engine_mass_kg", &self.engine_mass_kg),
            ("component_mass_kg", &self.component_mass_kg),
        ];
        for (table_name, entries) in tables {
            for (key, value) in entries {
                check_constant(&self.name, &format!("{table_name}.{key}"), *value)?;
            }
        }
        Ok(())
    }

    /// Rewrite every table key to its normalized form. Keys that collapse onto the
    /// same identifier are rejected rather than merged.
    fn normalize_keys(&mut self) -> Result<(), ConfigError> {
        let name = self.name.clone();
        for (table_name, map) in [
            ("fuel_efficiency_km_per_kg", &mut self.fuel_efficiency_km_per_kg),
            ("oxidizer_multiplier", &mut self.oxidizer_multiplier),
            ("engine_mass_kg", &mut self.engine_mass_kg),
            ("component_mass_kg", &mut self.component_mass_kg),
        ] {
            let mut normalized = BTreeMap::new();
            for (key, value) in std::mem::take(map) {
                let id = normalize(&key);
                if normalized.insert(id.clone(), value).is_some() {
                    return Err(ConfigError::Invalid(format!(
                        "catalog '{name}': duplicate identifier '{id}' in {table_name}"
                    )));
                }
            }
            *map = normalized;
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::oni_base()
    }
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

fn check_constant(catalog: &str, field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "catalog '{catalog}': {field} must be a finite non-negative number, got {value}"
        )))
    }
}

/// Process-wide canonical catalog, built once and never mutated.
pub fn canonical() -> &'static Catalog {
    static CANONICAL: OnceLock<Catalog> = OnceLock::new();
    CANONICAL.get_or_init(Catalog::oni_base)
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid catalog: {0}")]
    Invalid(String),
    #[error("no catalog found at {0}")]
    Empty(PathBuf),
    #[error("catalog '{0}' not found")]
    NotFound(String),
    #[error("{count} catalogs found at {path}; select one by name")]
    Ambiguous { path: PathBuf, count: usize },
}

/// Load every catalog at `path`: a single `.toml`/YAML file, or a directory of `.toml` files.
pub fn load_catalogs<P: AsRef<Path>>(path: P) -> Result<Vec<Catalog>, ConfigError> {
    let mut catalogs: Vec<Catalog> = load_records(path)?;
    for catalog in &mut catalogs {
        catalog.normalize_keys()?;
        catalog.validate()?;
    }
    Ok(catalogs)
}

/// Load exactly one catalog from `path`.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, ConfigError> {
    let path = path.as_ref();
    let mut catalogs = load_catalogs(path)?;
    match catalogs.len() {
        0 => Err(ConfigError::Empty(path.to_path_buf())),
        1 => Ok(catalogs.remove(0)),
        count => Err(ConfigError::Ambiguous {
            path: path.to_path_buf(),
            count,
        }),
    }
}

/// Select a catalog by name (case-insensitive).
pub fn find_catalog(catalogs: Vec<Catalog>, name: &str) -> Result<Catalog, ConfigError> {
    catalogs
        .into_iter()
        .find(|catalog| catalog.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        let record: T = serde_yaml::from_reader(reader)?;
        Ok(vec![record])
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
