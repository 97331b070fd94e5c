//! Core constants, units, and shared primitives for the ONI Rocket Calculator workspace.

/// Formula constants of the range model. Masses in kilograms, distances in kilometres.
pub mod constants {
    /// Kilometres of range per kilogram of water per kilogram of total mass (steam engines).
    pub const STEAM_RANGE_KM: f64 = 240.0;
    /// Scaling factor reconciling the units of the chemical-engine range formula.
    pub const RANGE_SCALING_FACTOR: f64 = 100.0;
    /// Mass at which the superlinear weight penalty starts to matter.
    pub const PENALTY_REFERENCE_MASS_KG: f64 = 300.0;
    /// Exponent of the superlinear weight penalty.
    pub const PENALTY_EXPONENT: f64 = 3.2;
    /// Decimal places kept on reported distances.
    pub const DISTANCE_DECIMALS: u32 = 2;
}

/// Numeric helpers.
pub mod units {
    /// Round `value` half away from zero to `decimals` decimal places.
    #[inline]
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    }
}

/// Identifier helpers shared by the catalog and the calculators.
pub mod ident {
    /// Normalize a user-supplied identifier for catalog lookup.
    ///
    /// Trims whitespace, lower-cases ASCII, and maps `-` and spaces to `_`, so
    /// `"Liquid Hydrogen"` and `"liquid-hydrogen"` both become `"liquid_hydrogen"`.
    pub fn normalize(raw: &str) -> String {
        raw.trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ident::normalize;
    use super::units::round_to;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(2.4, 2), 2.4);
        assert_eq!(round_to(87.5_f64 / 1.5, 2), 58.33);
        assert_eq!(round_to(-1.006, 2), -1.01);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn normalizes_identifiers() {
        assert_eq!(normalize("  Petroleum "), "petroleum");
        assert_eq!(normalize("Liquid Hydrogen"), "liquid_hydrogen");
        assert_eq!(normalize("liquid-oxygen"), "liquid_oxygen");
        assert_eq!(normalize(""), "");
    }
}
