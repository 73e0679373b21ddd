//! # Material Reference Catalog
//!
//! The static table of rod materials the experiment can be run against.
//! Each entry carries the accepted Young's modulus and density for
//! comparison with the measured value.
//!
//! The catalog is process-wide immutable state, built once on first access
//! and never modified. Insertion order is the display order and is stable
//! across runs; lookups are by the operator's 1-based menu choice.
//!
//! ## Example
//!
//! ```rust
//! use bendlab_core::materials;
//!
//! let iron = materials::get(1).unwrap();
//! assert_eq!(iron.name, "Iron");
//! assert_eq!(iron.youngs_modulus_gpa, 210.0);
//!
//! assert!(materials::get(14).is_err());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{BendError, BendResult};

/// Reference properties for one rod material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Stable identifier, used in report filenames (e.g. "stainless_steel")
    pub id: String,
    /// Display name shown in menus and reports
    pub name: String,
    /// Accepted Young's modulus (GPa)
    pub youngs_modulus_gpa: f64,
    /// Density (g/cm^3)
    pub density_g_per_cm3: f64,
}

impl MaterialEntry {
    fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        youngs_modulus_gpa: f64,
        density_g_per_cm3: f64,
    ) -> Self {
        MaterialEntry {
            id: id.into(),
            name: name.into(),
            youngs_modulus_gpa,
            density_g_per_cm3,
        }
    }
}

impl std::fmt::Display for MaterialEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

static CATALOG: Lazy<Vec<MaterialEntry>> = Lazy::new(|| {
    vec![
        MaterialEntry::new("iron", "Iron", 210.0, 7.87),
        MaterialEntry::new("steel", "Steel (Mild)", 200.0, 7.85),
        MaterialEntry::new("stainless_steel", "Stainless Steel", 190.0, 8.00),
        MaterialEntry::new("aluminum", "Aluminum", 69.0, 2.70),
        MaterialEntry::new("copper", "Copper", 130.0, 8.96),
        MaterialEntry::new("brass", "Brass", 100.0, 8.50),
        MaterialEntry::new("oak_wood", "Oak Wood", 11.0, 0.75),
        MaterialEntry::new("pine_wood", "Pine Wood", 9.0, 0.55),
        MaterialEntry::new("teak_wood", "Teak Wood", 12.0, 0.65),
        MaterialEntry::new("bamboo", "Bamboo", 20.0, 0.60),
        MaterialEntry::new("plywood", "Plywood", 6.0, 0.55),
        MaterialEntry::new("pvc", "PVC", 3.0, 1.40),
        MaterialEntry::new("acrylic", "Acrylic", 3.2, 1.18),
    ]
});

/// All catalog entries in display order.
pub fn catalog() -> &'static [MaterialEntry] {
    &CATALOG
}

/// Look up a material by 1-based menu choice.
///
/// Fails with [`BendError::OutOfRange`] for 0 or anything past the last
/// entry.
pub fn get(choice: usize) -> BendResult<&'static MaterialEntry> {
    choice
        .checked_sub(1)
        .and_then(|index| CATALOG.get(index))
        .ok_or_else(|| BendError::out_of_range(choice, CATALOG.len()))
}
