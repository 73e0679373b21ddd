//! # Bending Calculations
//!
//! Calculation modules follow one pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, BendError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bending`] - Young's modulus from uniform or point-load bending readings

pub mod bending;

pub use bending::{calculate, BendingInput, BendingResult};
