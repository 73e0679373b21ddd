//! # bendlab_core - Young's Modulus Bending-Test Engine
//!
//! `bendlab_core` is the computational heart of bendlab. It evaluates
//! bending-test measurements for a thin rectangular rod and derives the
//! experimental Young's modulus, comparing it against a static reference
//! catalog.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No console I/O**: Interactive prompting lives in the CLI crate
//!
//! ## Quick Start
//!
//! ```rust
//! use bendlab_core::calculations::bending::{calculate, BendingInput};
//! use bendlab_core::loads::{BendingMode, Reading};
//! use bendlab_core::materials;
//! use bendlab_core::report::Comparison;
//! use bendlab_core::specimen::RodGeometry;
//!
//! let material = materials::get(1).unwrap();
//! let input = BendingInput {
//!     geometry: RodGeometry::new(100.0, 2.0, 0.5),
//!     mode: BendingMode::Uniform,
//!     readings: vec![Reading::from_increment(1, 50.0, 0.1)],
//! };
//!
//! let result = calculate(&input).unwrap();
//! let comparison = Comparison::new(result.average_gpa, material.youngs_modulus_gpa);
//! assert!(comparison.percent_difference.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Static reference catalog of rod materials
//! - [`specimen`] - Rod geometry and section properties
//! - [`loads`] - Bending modes and load/deflection readings
//! - [`calculations`] - The bending-test modulus computation
//! - [`report`] - Summary/file report rendering and report persistence
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod report;
pub mod specimen;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{BendError, BendResult};
pub use loads::{BendingMode, Reading};
pub use specimen::RodGeometry;
