//! Congruential generator engine.
//!
//! Data flows through the submodules in this order:
//! - `validator`: raw text to `GeneratorRequest`
//! - `parameters`: request to `DerivedParameters` (linear or multiplicative)
//! - `sequence`: parameters to rows, up to the cycle closure or the cap
//! - `format`: operation strings, ratios and text tables
//! - `generator`: the whole pipeline and per-screen `Panel` state

/// Pipeline entry point (`generate`) and `Panel` state.
pub mod generator;

/// Request types and the generator `Variant`.
pub mod request;

/// Field-by-field validation of raw text input.
///
/// Collects every error instead of stopping at the first one.
pub mod validator;

/// Modulus, multiplier and period derivation.
pub mod parameters;

/// Row generation.
pub mod sequence;

/// Text rendering.
pub mod format;
