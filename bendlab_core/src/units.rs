//! # Unit Types
//!
//! Type-safe wrappers for the metric quantities used in the bending
//! experiment. These provide compile-time safety against unit confusion
//! while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! Simple newtype wrappers rather than a full units library:
//! - The experiment uses a small, fixed set of units
//! - JSON serialization stays clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units
//!
//! Operators enter measurements in lab units (centimeters, grams); the
//! bending formulas work in SI (meters, kilograms, newtons, pascals) and
//! results are reported in gigapascals:
//! - Length: centimeters (cm), meters (m)
//! - Mass: grams (g), kilograms (kg)
//! - Force: newtons (N)
//! - Second moment of area: cm^4, m^4
//! - Stress/modulus: pascals (Pa), gigapascals (GPa)
//!
//! ## Example
//!
//! ```rust
//! use bendlab_core::units::{Centimeters, Grams, Kilograms, Meters};
//!
//! let length = Centimeters(100.0);
//! let length_m: Meters = length.into();
//! assert_eq!(length_m.0, 1.0);
//!
//! let force = Kilograms::from(Grams(50.0)).weight();
//! assert!((force.0 - 0.4905).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravitational acceleration (m/s²) used to convert suspended
/// mass to force
pub const STANDARD_GRAVITY_M_PER_S2: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * 100.0)
    }
}

// ============================================================================
// Mass and Force Units
// ============================================================================

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Grams> for Kilograms {
    fn from(g: Grams) -> Self {
        Kilograms(g.0 / 1000.0)
    }
}

impl From<Kilograms> for Grams {
    fn from(kg: Kilograms) -> Self {
        Grams(kg.0 * 1000.0)
    }
}

impl Kilograms {
    /// Force exerted by this mass under standard gravity
    pub fn weight(self) -> Newtons {
        Newtons(self.0 * STANDARD_GRAVITY_M_PER_S2)
    }
}

// ============================================================================
// Second Moment of Area Units
// ============================================================================

/// Second moment of area in cm^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

/// Second moment of area in m^4
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

impl From<Cm4> for M4 {
    fn from(cm4: Cm4) -> Self {
        M4(cm4.0 / 1.0e8)
    }
}

impl From<M4> for Cm4 {
    fn from(m4: M4) -> Self {
        Cm4(m4.0 * 1.0e8)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress or modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Centimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Grams);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Newtons);
impl_arithmetic!(Cm4);
impl_arithmetic!(M4);
impl_arithmetic!(Pascals);
impl_arithmetic!(Gigapascals);
