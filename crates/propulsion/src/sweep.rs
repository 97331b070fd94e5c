//! Fuel-mass sweeps: re-evaluate one configuration across a range of fuel masses.

use serde::Serialize;
use thiserror::Error;

use crate::calculator::{Calculator, RocketConfiguration};

/// Upper bound on the number of samples a single sweep may produce.
pub const MAX_SWEEP_SAMPLES: usize = 100_000;

/// Inclusive fuel-mass range in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelRange {
    pub start_kg: f64,
    pub end_kg: f64,
    pub step_kg: f64,
}

impl Default for FuelRange {
    fn default() -> Self {
        Self {
            start_kg: 100.0,
            end_kg: 5_000.0,
            step_kg: 100.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("sweep step must be positive (got {0})")]
    NonPositiveStep(f64),
    #[error("sweep start must be non-negative (got {0})")]
    NegativeStart(f64),
    #[error("sweep end {end} lies before start {start}")]
    EmptyRange { start: f64, end: f64 },
    #[error("sweep of {samples} samples exceeds the limit of {max}; use a larger step")]
    TooManySamples { samples: f64, max: usize },
}

impl FuelRange {
    pub fn new(start_kg: f64, end_kg: f64, step_kg: f64) -> Result<Self, SweepError> {
        if !(step_kg.is_finite() && step_kg > 0.0) {
            return Err(SweepError::NonPositiveStep(step_kg));
        }
        if !(start_kg.is_finite() && start_kg >= 0.0) {
            return Err(SweepError::NegativeStart(start_kg));
        }
        if !(end_kg.is_finite() && end_kg >= start_kg) {
            return Err(SweepError::EmptyRange {
                start: start_kg,
                end: end_kg,
            });
        }
        let samples = sample_count(start_kg, end_kg, step_kg);
        if samples > MAX_SWEEP_SAMPLES as f64 {
            return Err(SweepError::TooManySamples {
                samples,
                max: MAX_SWEEP_SAMPLES,
            });
        }
        Ok(Self {
            start_kg,
            end_kg,
            step_kg,
        })
    }

    /// Number of sampled fuel masses. Saturates at `usize::MAX` for ranges built by hand.
    pub fn len(&self) -> usize {
        if self.step_kg.is_nan() || self.step_kg <= 0.0 || self.end_kg < self.start_kg {
            return 0;
        }
        let samples = sample_count(self.start_kg, self.end_kg, self.step_kg);
        if samples.is_finite() && samples < usize::MAX as f64 {
            samples as usize
        } else {
            usize::MAX
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sampled fuel masses, ascending.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start_kg + i as f64 * self.step_kg)
    }
}

/// Sample count as a float so oversized ranges can be detected before any cast.
fn sample_count(start_kg: f64, end_kg: f64, step_kg: f64) -> f64 {
    // tolerate float drift so 0..=1 step 0.1 keeps its last sample
    ((end_kg - start_kg) / step_kg + 1e-9).floor() + 1.0
}

/// One sample of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub fuel_mass_kg: f64,
    pub total_mass_kg: f64,
    pub distance_km: f64,
}

impl Calculator<'_> {
    /// Evaluate `config` at every fuel mass of `range`, keeping everything else fixed.
    ///
    /// Diagnostics do not depend on the fuel mass, so they are logged once.
    pub fn sweep(&self, config: &RocketConfiguration, range: &FuelRange) -> Vec<SweepPoint> {
        let mut points = Vec::with_capacity(range.len().min(MAX_SWEEP_SAMPLES));
        for fuel_mass_kg in range.values() {
            let report = self.assess(&config.with_fuel_mass(fuel_mass_kg));
            if points.is_empty() {
                for warning in &report.warnings {
                    log::warn!("{warning}");
                }
            }
            points.push(SweepPoint {
                fuel_mass_kg,
                total_mass_kg: report.total_mass_kg,
                distance_km: report.distance_km,
            });
        }
        log::debug!(
            "swept {} fuel masses for {}/{}",
            points.len(),
            config.propulsion,
            config.oxidizer
        );
        points
    }
}

/// Point with the largest range; the lowest fuel mass wins ties.
pub fn best_point(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points.iter().fold(None, |best: Option<&SweepPoint>, point| match best {
        Some(current) if current.distance_km >= point.distance_km => Some(current),
        _ => Some(point),
    })
}

/// Smallest swept fuel mass whose range reaches `target_km`.
pub fn fuel_for_distance(points: &[SweepPoint], target_km: f64) -> Option<&SweepPoint> {
    points
        .iter()
        .filter(|point| point.distance_km >= target_km)
        .min_by(|a, b| a.fuel_mass_kg.total_cmp(&b.fuel_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_chart_axis() {
        let range = FuelRange::default();
        let values: Vec<f64> = range.values().collect();
        assert_eq!(values.len(), 50);
        assert_eq!(values[0], 100.0);
        assert_eq!(*values.last().unwrap(), 5_000.0);
    }

    #[test]
    fn fractional_steps_keep_the_end() {
        let range = FuelRange::new(0.0, 1.0, 0.1).unwrap();
        assert_eq!(range.len(), 11);
    }

    #[test]
    fn rejects_degenerate_ranges() {
        assert_eq!(
            FuelRange::new(0.0, 10.0, 0.0),
            Err(SweepError::NonPositiveStep(0.0))
        );
        assert_eq!(
            FuelRange::new(-1.0, 10.0, 1.0),
            Err(SweepError::NegativeStart(-1.0))
        );
        assert_eq!(
            FuelRange::new(10.0, 5.0, 1.0),
            Err(SweepError::EmptyRange {
                start: 10.0,
                end: 5.0
            })
        );
    }

    #[test]
    fn tiny_steps_are_rejected_instead_of_overflowing() {
        assert!(matches!(
            FuelRange::new(0.0, 5_000.0, 1e-300),
            Err(SweepError::TooManySamples { max: MAX_SWEEP_SAMPLES, .. })
        ));
        assert!(matches!(
            FuelRange::new(0.0, 5_000.0, 1e-9),
            Err(SweepError::TooManySamples { .. })
        ));
        assert_eq!(
            FuelRange::new(0.0, 99_999.0, 1.0).map(|range| range.len()),
            Ok(MAX_SWEEP_SAMPLES)
        );

        let hand_built = FuelRange {
            start_kg: 0.0,
            end_kg: 5_000.0,
            step_kg: 1e-300,
        };
        assert_eq!(hand_built.len(), usize::MAX);
        assert!(!hand_built.is_empty());
    }

    #[test]
    fn steam_sweep_increases_with_water() {
        let calculator = Calculator::canonical();
        let config = RocketConfiguration::new("steam", None, 0.0);
        let points = calculator.sweep(&config, &FuelRange::default());
        assert_eq!(points.len(), 50);
        assert!(points.windows(2).all(|w| w[1].distance_km >= w[0].distance_km));
        assert_eq!(best_point(&points).unwrap().fuel_mass_kg, 5_000.0);

        let reached = fuel_for_distance(&points, 100.0).expect("steam reaches 100 km");
        // 240 * W / (300 + W) >= 100  =>  W >= 214.3
        assert_eq!(reached.fuel_mass_kg, 300.0);
        assert!(fuel_for_distance(&points, 240.0).is_none());
    }

    #[test]
    fn sweep_points_match_single_evaluations() {
        let calculator = Calculator::canonical();
        let config = RocketConfiguration::new("petroleum", Some("liquid_oxygen"), 0.0)
            .with_extras(["sightseeing"]);
        let range = FuelRange::new(0.0, 900.0, 300.0).unwrap();
        let points = calculator.sweep(&config, &range);
        assert_eq!(points.len(), 4);
        for point in &points {
            let report = calculator.evaluate(&config.with_fuel_mass(point.fuel_mass_kg));
            assert_eq!(point.total_mass_kg, report.total_mass_kg);
            assert_eq!(point.distance_km, report.distance_km);
        }
        assert_eq!(best_point(&points).unwrap().fuel_mass_kg, 0.0);
    }
}
