//! # Young's Modulus from Bending Readings
//!
//! Computes the experimental Young's modulus implied by each load/deflection
//! reading and averages the qualifying readings. Pure computation, no I/O.
//!
//! ## Formulas
//!
//! For a rod of span L and section inertia I under a total force F:
//!
//! - Uniform bending (load spread along the span, w = F/L):
//!   `Y = 5*w*L^4 / (384*I*|d|)`
//! - Point load at midspan:
//!   `Y = F*L^3 / (48*I*|d|)`
//!
//! Operator inputs are in cm/g; the formulas run in SI (meters, newtons,
//! m^4) and the result is reported in GPa. Deflection sign is dropped for
//! the magnitude; readings with zero deflection are skipped entirely so the
//! deflection never divides by zero.
//!
//! ## Example
//!
//! ```rust
//! use bendlab_core::calculations::bending::{calculate, BendingInput};
//! use bendlab_core::loads::{BendingMode, Reading};
//! use bendlab_core::specimen::RodGeometry;
//!
//! let input = BendingInput {
//!     geometry: RodGeometry::new(100.0, 2.0, 0.5),
//!     mode: BendingMode::Uniform,
//!     readings: vec![Reading::from_increment(1, 50.0, 0.1)],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.average_gpa - 30.65625).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BendError, BendResult};
use crate::loads::{BendingMode, Reading};
use crate::specimen::RodGeometry;
use crate::units::{Centimeters, Cm4, Gigapascals, Grams, Kilograms, Meters, Pascals, M4};

/// Input parameters for one bending-test evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingInput {
    /// Rod dimensions (cm)
    pub geometry: RodGeometry,
    /// How the load was applied
    pub mode: BendingMode,
    /// Readings in ascending index order
    pub readings: Vec<Reading>,
}

impl BendingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> BendResult<()> {
        self.geometry.validate()?;
        for reading in &self.readings {
            if reading.weight_g <= 0.0 {
                return Err(BendError::invalid_input(
                    "weight_g",
                    reading.weight_g.to_string(),
                    "Applied weight must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Computed modulus values for one bending-test evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingResult {
    /// Section inertia of the rod (cm^4)
    pub moment_of_inertia_cm4: f64,
    /// Per-reading modulus (GPa), aligned with the input readings;
    /// `None` for readings excluded by zero deflection
    pub per_reading_gpa: Vec<Option<f64>>,
    /// Arithmetic mean of the included readings; 0.0 when none qualify
    pub average_gpa: f64,
}

/// Modulus implied by a single reading (GPa), or `None` when the reading's
/// deflection is zero.
pub fn reading_modulus_gpa(
    geometry: &RodGeometry,
    mode: BendingMode,
    reading: &Reading,
) -> Option<f64> {
    if !reading.is_measurable() {
        return None;
    }

    let length_m = Meters::from(Centimeters(geometry.length_cm)).value();
    let deflection_m = Meters::from(Centimeters(reading.deflection_cm)).value().abs();
    let inertia_m4 = M4::from(Cm4(geometry.moment_of_inertia_cm4())).value();
    let force_n = Kilograms::from(Grams(reading.weight_g)).weight().value();

    let modulus_pa = match mode {
        BendingMode::Uniform => {
            let w_n_per_m = force_n / length_m;
            5.0 * w_n_per_m * length_m.powi(4) / (384.0 * inertia_m4 * deflection_m)
        }
        BendingMode::PointLoad => {
            force_n * length_m.powi(3) / (48.0 * inertia_m4 * deflection_m)
        }
    };

    Some(Gigapascals::from(Pascals(modulus_pa)).value())
}

/// Average modulus for uniform bending (GPa); 0.0 when no reading qualifies.
pub fn youngs_modulus_uniform(geometry: &RodGeometry, readings: &[Reading]) -> f64 {
    average_modulus_gpa(geometry, BendingMode::Uniform, readings)
}

/// Average modulus for point-load bending (GPa); 0.0 when no reading qualifies.
pub fn youngs_modulus_point_load(geometry: &RodGeometry, readings: &[Reading]) -> f64 {
    average_modulus_gpa(geometry, BendingMode::PointLoad, readings)
}

fn average_modulus_gpa(geometry: &RodGeometry, mode: BendingMode, readings: &[Reading]) -> f64 {
    let included: Vec<f64> = readings
        .iter()
        .filter_map(|reading| reading_modulus_gpa(geometry, mode, reading))
        .collect();

    if included.is_empty() {
        return 0.0;
    }
    included.iter().sum::<f64>() / included.len() as f64
}

/// Evaluate a full set of readings.
pub fn calculate(input: &BendingInput) -> BendResult<BendingResult> {
    input.validate()?;

    let per_reading_gpa: Vec<Option<f64>> = input
        .readings
        .iter()
        .map(|reading| reading_modulus_gpa(&input.geometry, input.mode, reading))
        .collect();

    let included: Vec<f64> = per_reading_gpa.iter().copied().flatten().collect();
    let average_gpa = if included.is_empty() {
        0.0
    } else {
        included.iter().sum::<f64>() / included.len() as f64
    };

    Ok(BendingResult {
        moment_of_inertia_cm4: input.geometry.moment_of_inertia_cm4(),
        per_reading_gpa,
        average_gpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_geometry() -> RodGeometry {
        RodGeometry::new(100.0, 2.0, 0.5)
    }

    #[test]
    fn test_uniform_single_reading() {
        // 50g at 0.1cm: F = 0.05*9.81 = 0.4905 N, L = 1 m,
        // I = 0.0208333 cm^4 = 2.08333e-10 m^4, w = 0.4905 N/m
        // Y = 5*0.4905*1 / (384*2.08333e-10*0.001) = 30.65625 GPa
        let readings = [Reading::from_increment(1, 50.0, 0.1)];
        let modulus = youngs_modulus_uniform(&test_geometry(), &readings);
        assert!((modulus - 30.65625).abs() < 1e-6);
    }

    #[test]
    fn test_point_load_single_reading() {
        // Y = 0.4905*1 / (48*2.08333e-10*0.001) = 49.05 GPa
        let readings = [Reading::from_increment(1, 50.0, 0.1)];
        let modulus = youngs_modulus_point_load(&test_geometry(), &readings);
        assert!((modulus - 49.05).abs() < 1e-6);
    }

    #[test]
    fn test_deflection_sign_is_ignored() {
        let depressed = [Reading::new(1, 50.0, 0.1)];
        let elevated = [Reading::new(1, 50.0, -0.1)];
        let geometry = test_geometry();
        assert_eq!(
            youngs_modulus_uniform(&geometry, &depressed),
            youngs_modulus_uniform(&geometry, &elevated),
        );
    }

    #[test]
    fn test_zero_deflection_reading_is_excluded() {
        // Second reading has zero deflection; the average must equal the
        // single-reading modulus, with no division by zero.
        let geometry = test_geometry();
        let first = [Reading::new(1, 10.0, 0.1)];
        let both = [Reading::new(1, 10.0, 0.1), Reading::new(2, 20.0, 0.0)];
        assert_eq!(
            youngs_modulus_point_load(&geometry, &both),
            youngs_modulus_point_load(&geometry, &first),
        );
    }

    #[test]
    fn test_all_zero_deflections_average_to_zero() {
        let readings = [Reading::new(1, 50.0, 0.0), Reading::new(2, 100.0, 0.0)];
        assert_eq!(youngs_modulus_uniform(&test_geometry(), &readings), 0.0);
        assert_eq!(youngs_modulus_point_load(&test_geometry(), &readings), 0.0);
    }

    #[test]
    fn test_calculate_aligns_per_reading_sequence() {
        let input = BendingInput {
            geometry: test_geometry(),
            mode: BendingMode::PointLoad,
            readings: vec![
                Reading::from_increment(1, 50.0, 0.1),
                Reading::from_increment(2, 50.0, 0.0),
                Reading::from_increment(3, 50.0, 0.3),
            ],
        };

        let result = calculate(&input).unwrap();
        assert_eq!(result.per_reading_gpa.len(), 3);
        assert!(result.per_reading_gpa[0].is_some());
        assert!(result.per_reading_gpa[1].is_none());
        assert!(result.per_reading_gpa[2].is_some());

        let included: Vec<f64> = result.per_reading_gpa.iter().copied().flatten().collect();
        let expected_average = included.iter().sum::<f64>() / included.len() as f64;
        assert!((result.average_gpa - expected_average).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_matches_mode_functions() {
        let readings = vec![
            Reading::from_increment(1, 50.0, 0.1),
            Reading::from_increment(2, 50.0, 0.19),
        ];
        let input = BendingInput {
            geometry: test_geometry(),
            mode: BendingMode::Uniform,
            readings: readings.clone(),
        };

        let result = calculate(&input).unwrap();
        assert_eq!(
            result.average_gpa,
            youngs_modulus_uniform(&test_geometry(), &readings),
        );
        assert_eq!(
            result.moment_of_inertia_cm4,
            test_geometry().moment_of_inertia_cm4(),
        );
    }

    #[test]
    fn test_calculate_rejects_bad_geometry() {
        let input = BendingInput {
            geometry: RodGeometry::new(-1.0, 2.0, 0.5),
            mode: BendingMode::Uniform,
            readings: vec![Reading::from_increment(1, 50.0, 0.1)],
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_calculate_rejects_non_positive_weight() {
        let input = BendingInput {
            geometry: test_geometry(),
            mode: BendingMode::Uniform,
            readings: vec![Reading::new(1, 0.0, 0.1)],
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let input = BendingInput {
            geometry: test_geometry(),
            mode: BendingMode::PointLoad,
            readings: vec![
                Reading::from_increment(1, 50.0, 0.1),
                Reading::from_increment(2, 50.0, 0.0),
            ],
        };
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: BendingResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
