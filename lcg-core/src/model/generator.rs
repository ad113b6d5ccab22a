use log::debug;
use serde::Serialize;

use crate::error::GenerateError;
use super::parameters::{derive, DerivedParameters, HARD_CAP_ROWS};
use super::request::{RawInput, Variant};
use super::sequence::{generate_sequence, SequenceRow};
use super::validator::validate;

/// Outcome of one successful generation.
///
/// Built fresh for every call; nothing is shared between results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
	pub variant: Variant,
	pub parameters: DerivedParameters,
	pub rows: Vec<SequenceRow>,
	/// Rows were capped at `HARD_CAP_ROWS` before the cycle closed.
	pub truncated: bool,
	pub note: String,
	pub decimal_digits: usize,
}

/// Validates, derives and generates in one call.
///
/// # Errors
/// - `GenerateError::Validation` with every malformed field.
/// - `GenerateError::Constraint` with the first failed derivation check.
///
/// Either way no parameters or rows are produced.
pub fn generate(raw: &RawInput, variant: Variant) -> Result<GenerationResult, GenerateError> {
	let request = validate(raw, variant).map_err(GenerateError::Validation)?;
	let parameters = derive(&request)?;

	let sequence = generate_sequence(
		variant,
		&parameters,
		request.desired_count,
		request.decimal_digits,
		HARD_CAP_ROWS,
	);
	debug!("Generated {} rows for {}", sequence.rows.len(), variant);

	Ok(GenerationResult {
		variant,
		parameters,
		rows: sequence.rows,
		truncated: sequence.truncated,
		note: sequence.note,
		decimal_digits: request.decimal_digits,
	})
}

/// State of one generator screen: the last result or the last errors.
///
/// # Invariants
/// - At most one of `result` / `errors` is non-empty.
/// - A failed `generate` drops the previous result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
	variant: Variant,
	result: Option<GenerationResult>,
	errors: Vec<String>,
}

impl Panel {
	/// An empty panel for `variant`.
	pub fn new(variant: Variant) -> Self {
		Self { variant, result: None, errors: Vec::new() }
	}

	/// Generator family this panel runs.
	pub fn variant(&self) -> Variant {
		self.variant
	}

	/// Last successful result, if any.
	pub fn result(&self) -> Option<&GenerationResult> {
		self.result.as_ref()
	}

	/// Messages of the last failed `generate`.
	pub fn errors(&self) -> &[String] {
		&self.errors
	}

	/// Runs `generate` and keeps its outcome.
	pub fn generate(&mut self, raw: &RawInput) -> Result<&GenerationResult, GenerateError> {
		match generate(raw, self.variant) {
			Ok(result) => {
				self.errors.clear();
				Ok(&*self.result.insert(result))
			}
			Err(e) => {
				self.result = None;
				self.errors = e.messages();
				Err(e)
			}
		}
	}

	/// Back to the pre-generation state.
	pub fn clear(&mut self) {
		self.result = None;
		self.errors.clear();
	}

	/// `true` when nothing has been generated since creation or the last `clear`.
	pub fn is_empty(&self) -> bool {
		self.result.is_none() && self.errors.is_empty()
	}
}
