use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Generator family, with the multiplier formula of each.
///
/// # Variants
/// - `Linear`: mixed generator, `a = 1 + 4k`, additive constant supplied by the user.
/// - `MultiplicativeA`: `c = 0`, `a = 3 + 8k`.
/// - `MultiplicativeB`: `c = 0`, `a = 5 + 8k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Variant {
	#[serde(rename = "linear")]
	Linear,
	#[serde(rename = "3+8k")]
	MultiplicativeA,
	#[serde(rename = "5+8k")]
	MultiplicativeB,
}

impl Variant {
	/// All variants, in display order.
	pub const ALL: [Variant; 3] = [Variant::Linear, Variant::MultiplicativeA, Variant::MultiplicativeB];

	/// Applies the variant's multiplier formula to `k`.
	///
	/// Returns `None` on overflow.
	pub fn multiplier(&self, k: u64) -> Option<u64> {
		let (base, step) = match self {
			Variant::Linear => (1, 4),
			Variant::MultiplicativeA => (3, 8),
			Variant::MultiplicativeB => (5, 8),
		};
		k.checked_mul(step)?.checked_add(base)
	}

	/// `true` for the `c = 0` variants.
	pub fn is_multiplicative(&self) -> bool {
		!matches!(self, Variant::Linear)
	}

	/// Short identifier, also accepted by `from_str`.
	pub fn as_str(&self) -> &'static str {
		match self {
			Variant::Linear => "linear",
			Variant::MultiplicativeA => "3+8k",
			Variant::MultiplicativeB => "5+8k",
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Variant {
	type Err = String;

	/// Accepts `linear`, `3+8k` / `a` and `5+8k` / `b` (case-insensitive).
	///
	/// A space is accepted in place of `+` since query strings decode `+` as a space.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().replace(' ', "+").as_str() {
			"linear" => Ok(Variant::Linear),
			"3+8k" | "a" => Ok(Variant::MultiplicativeA),
			"5+8k" | "b" => Ok(Variant::MultiplicativeB),
			other => Err(format!("Unknown variant '{}', expected 'linear', '3+8k' or '5+8k'", other)),
		}
	}
}

/// The raw text fields as typed by the user.
///
/// `additive_constant` is only read for `Variant::Linear`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
	pub seed: String,
	pub k: String,
	pub additive_constant: Option<String>,
	pub desired_count: String,
	pub decimal_digits: String,
}

impl RawInput {
	/// Builds the fields of a mixed (linear) request.
	pub fn linear(seed: &str, k: &str, additive_constant: &str, desired_count: &str, decimal_digits: &str) -> Self {
		Self {
			seed: seed.to_owned(),
			k: k.to_owned(),
			additive_constant: Some(additive_constant.to_owned()),
			desired_count: desired_count.to_owned(),
			decimal_digits: decimal_digits.to_owned(),
		}
	}

	/// Builds the fields of a multiplicative request (no additive constant).
	pub fn multiplicative(seed: &str, k: &str, desired_count: &str, decimal_digits: &str) -> Self {
		Self {
			seed: seed.to_owned(),
			k: k.to_owned(),
			additive_constant: None,
			desired_count: desired_count.to_owned(),
			decimal_digits: decimal_digits.to_owned(),
		}
	}
}

/// A validated request.
///
/// Only `validator::validate` builds one from user text, so every field
/// is already range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorRequest {
	pub seed: u64,
	pub k: u64,
	/// `0` for multiplicative variants.
	pub additive_constant: u64,
	/// Number of values asked for (`p > 0`).
	pub desired_count: u64,
	/// Fractional digits of the ratio column, in `0..=12`.
	pub decimal_digits: usize,
	pub variant: Variant,
}
