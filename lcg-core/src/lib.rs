//! Congruential pseudo-random sequence workbench.
//!
//! This crate derives the parameters of power-of-two congruential generators
//! and lists the sequence they produce, including:
//! - Input validation of raw textual fields
//! - Mixed (linear) and multiplicative parameter derivation (Hull–Dobell)
//! - Bounded sequence generation that runs until the cycle closes
//! - Text rendering of the operations, ratios and tables
//!
//! The engine is a pure function of its request. Per-screen state
//! (last result, errors) lives in `model::generator::Panel`.

/// Request validation, parameter derivation, sequence generation and rendering.
pub mod model;

/// Number theory helpers (gcd, primality, integer logarithm).
pub mod math;

/// Error type returned by generation.
pub mod error;

pub use error::GenerateError;
pub use model::generator::{generate, Panel};
pub use model::request::{GeneratorRequest, RawInput, Variant};
