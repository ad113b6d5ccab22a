use super::request::{GeneratorRequest, RawInput, Variant};

/// Largest additive constant accepted.
///
/// Bounds the primality trial division to `√(2^32)` steps.
pub const MAX_ADDITIVE_CONSTANT: u64 = u32::MAX as u64;

/// Largest number of fractional digits for the ratio column.
pub const MAX_DECIMAL_DIGITS: usize = 12;

/// `true` when `s` is one or more ASCII decimal digits.
fn is_digits(s: &str) -> bool {
	!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a non-negative integer field, pushing `message` on malformed input.
///
/// Values above `max` (or beyond `u64`) get their own message naming the bound.
fn parse_field(raw: &str, name: &str, message: &str, max: u64, errors: &mut Vec<String>) -> Option<u64> {
	if !is_digits(raw) {
		errors.push(message.to_owned());
		return None;
	}
	match raw.parse::<u64>() {
		Ok(value) if value <= max => Some(value),
		_ => {
			errors.push(format!("{} debe ser ≤ {}.", name, max));
			None
		}
	}
}

/// Parses the desired count.
///
/// Digit strings beyond `u64` saturate, so oversized counts reach the row cap check.
fn parse_count(raw: &str, errors: &mut Vec<String>) -> Option<u64> {
	const MESSAGE: &str = "p debe ser entero positivo (> 0).";
	if !is_digits(raw) {
		errors.push(MESSAGE.to_owned());
		return None;
	}
	match raw.parse::<u64>().unwrap_or(u64::MAX) {
		0 => {
			errors.push(MESSAGE.to_owned());
			None
		}
		count => Some(count),
	}
}

/// Turns raw text into a `GeneratorRequest`.
///
/// Every rule is checked; the returned list holds all violations in field
/// order (seed, k, c, p, D) and is never empty on `Err`.
///
/// Fields are taken as typed: surrounding whitespace is a non-digit.
pub fn validate(raw: &RawInput, variant: Variant) -> Result<GeneratorRequest, Vec<String>> {
	let mut errors = Vec::new();

	let seed = parse_field(&raw.seed, "Semilla (X₀)", "Semilla (X₀) debe ser entero no negativo.", u64::MAX, &mut errors);
	let k = parse_field(&raw.k, "k", "k debe ser entero no negativo.", u64::MAX, &mut errors);

	let additive_constant = match variant {
		Variant::Linear => {
			let c = raw.additive_constant.as_deref().unwrap_or("");
			parse_field(c, "c", "c debe ser entero no negativo.", MAX_ADDITIVE_CONSTANT, &mut errors)
		}
		_ => Some(0),
	};

	let desired_count = parse_count(&raw.desired_count, &mut errors);

	let decimal_digits = if !is_digits(&raw.decimal_digits) {
		errors.push("D (decimales) debe ser entero no negativo.".to_owned());
		None
	} else {
		match raw.decimal_digits.parse::<usize>() {
			Ok(d) if d <= MAX_DECIMAL_DIGITS => Some(d),
			_ => {
				errors.push(format!("D máximo permitido: {}.", MAX_DECIMAL_DIGITS));
				None
			}
		}
	};

	match (seed, k, additive_constant, desired_count, decimal_digits) {
		(Some(seed), Some(k), Some(additive_constant), Some(desired_count), Some(decimal_digits)) if errors.is_empty() => {
			Ok(GeneratorRequest { seed, k, additive_constant, desired_count, decimal_digits, variant })
		}
		_ => Err(errors),
	}
}
