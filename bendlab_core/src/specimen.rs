//! # Rod Specimen Geometry
//!
//! Dimensions of the thin rectangular rod under test, in the lab units the
//! operator measures with (centimeters). Section properties derive from the
//! rectangular cross-section.

use serde::{Deserialize, Serialize};

use crate::errors::{BendError, BendResult};

/// Rod dimensions as entered by the operator.
///
/// All three dimensions must be strictly positive; `validate` enforces
/// this before any calculation runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RodGeometry {
    /// Span between the knife edges (cm)
    pub length_cm: f64,
    /// Breadth of the cross-section (cm)
    pub breadth_cm: f64,
    /// Thickness of the cross-section (cm)
    pub thickness_cm: f64,
}

impl RodGeometry {
    pub fn new(length_cm: f64, breadth_cm: f64, thickness_cm: f64) -> Self {
        RodGeometry {
            length_cm,
            breadth_cm,
            thickness_cm,
        }
    }

    /// Validate that every dimension is strictly positive.
    pub fn validate(&self) -> BendResult<()> {
        if self.length_cm <= 0.0 {
            return Err(BendError::invalid_input(
                "length_cm",
                self.length_cm.to_string(),
                "Length must be positive",
            ));
        }
        if self.breadth_cm <= 0.0 {
            return Err(BendError::invalid_input(
                "breadth_cm",
                self.breadth_cm.to_string(),
                "Breadth must be positive",
            ));
        }
        if self.thickness_cm <= 0.0 {
            return Err(BendError::invalid_input(
                "thickness_cm",
                self.thickness_cm.to_string(),
                "Thickness must be positive",
            ));
        }
        Ok(())
    }

    /// Second moment of area I = b*t^3/12 for the rectangular section (cm^4)
    pub fn moment_of_inertia_cm4(&self) -> f64 {
        self.breadth_cm * self.thickness_cm.powi(3) / 12.0
    }
}
