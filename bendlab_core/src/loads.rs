//! # Bending Modes and Measured Readings
//!
//! The load configuration side of the experiment: which bending arrangement
//! the rod was tested under, and the sequence of load/deflection readings
//! the operator recorded.
//!
//! Weights are never entered directly. The operator picks a per-step weight
//! increment and reading `i` carries `i * increment` grams, matching how
//! slotted weights are stacked onto the hanger.

use serde::{Deserialize, Serialize};

use crate::errors::{BendError, BendResult};

/// How the load is applied to the rod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BendingMode {
    /// Load distributed evenly along the span
    Uniform,
    /// Concentrated load at midspan
    PointLoad,
}

impl BendingMode {
    /// Both modes in menu order
    pub const ALL: [BendingMode; 2] = [BendingMode::Uniform, BendingMode::PointLoad];

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: usize) -> BendResult<Self> {
        match choice {
            1 => Ok(BendingMode::Uniform),
            2 => Ok(BendingMode::PointLoad),
            _ => Err(BendError::out_of_range(choice, 2)),
        }
    }

    /// Menu numeral, also used in report filenames
    pub fn mode_number(&self) -> u8 {
        match self {
            BendingMode::Uniform => 1,
            BendingMode::PointLoad => 2,
        }
    }

    /// Full name shown in menus and the summary report
    pub fn display_name(&self) -> &'static str {
        match self {
            BendingMode::Uniform => "Uniform Bending",
            BendingMode::PointLoad => "Non-Uniform Bending (Point Load)",
        }
    }

    /// Short label used in the file report
    pub fn short_label(&self) -> &'static str {
        match self {
            BendingMode::Uniform => "Uniform",
            BendingMode::PointLoad => "Non-Uniform",
        }
    }
}

impl std::fmt::Display for BendingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One load/deflection measurement.
///
/// Deflection sign is meaningful: positive for depression (downward),
/// negative for elevation. A zero deflection is stored and displayed but
/// excluded from modulus averaging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// 1-based reading number
    pub index: usize,
    /// Applied weight (g), always derived as index * increment
    pub weight_g: f64,
    /// Measured deflection (cm), signed
    pub deflection_cm: f64,
}

impl Reading {
    pub fn new(index: usize, weight_g: f64, deflection_cm: f64) -> Self {
        Reading {
            index,
            weight_g,
            deflection_cm,
        }
    }

    /// Build reading `index` of a series with the given weight increment.
    pub fn from_increment(index: usize, weight_increment_g: f64, deflection_cm: f64) -> Self {
        Reading::new(index, weight_increment_g * index as f64, deflection_cm)
    }

    /// Whether this reading participates in modulus averaging.
    pub fn is_measurable(&self) -> bool {
        self.deflection_cm != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_choice() {
        assert_eq!(BendingMode::from_choice(1).unwrap(), BendingMode::Uniform);
        assert_eq!(BendingMode::from_choice(2).unwrap(), BendingMode::PointLoad);
        assert!(BendingMode::from_choice(0).is_err());
        assert!(BendingMode::from_choice(3).is_err());
    }

    #[test]
    fn test_mode_numbers() {
        assert_eq!(BendingMode::Uniform.mode_number(), 1);
        assert_eq!(BendingMode::PointLoad.mode_number(), 2);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(BendingMode::Uniform.short_label(), "Uniform");
        assert_eq!(BendingMode::PointLoad.short_label(), "Non-Uniform");
        assert_eq!(
            BendingMode::PointLoad.display_name(),
            "Non-Uniform Bending (Point Load)"
        );
    }

    #[test]
    fn test_reading_weight_derivation() {
        let reading = Reading::from_increment(3, 50.0, 0.12);
        assert_eq!(reading.index, 3);
        assert_eq!(reading.weight_g, 150.0);
        assert_eq!(reading.deflection_cm, 0.12);
    }

    #[test]
    fn test_zero_deflection_is_not_measurable() {
        assert!(!Reading::new(1, 50.0, 0.0).is_measurable());
        assert!(Reading::new(1, 50.0, -0.1).is_measurable());
        assert!(Reading::new(1, 50.0, 0.1).is_measurable());
    }

    #[test]
    fn test_serialization() {
        let reading = Reading::from_increment(2, 25.0, -0.05);
        let json = serde_json::to_string(&reading).unwrap();
        let roundtrip: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(reading, roundtrip);
    }
}
