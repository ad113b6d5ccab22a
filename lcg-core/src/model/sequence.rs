use log::info;
use serde::Serialize;

use super::format::{format_ratio, operation, ratio};
use super::parameters::DerivedParameters;
use super::request::Variant;

/// One generation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceRow {
	/// 1-based.
	pub index: usize,
	/// `Xᵢ`
	pub current_value: u64,
	/// Recurrence applied to `Xᵢ`, e.g. `(5 * 7 + 3) MOD(8)`.
	pub operation: String,
	/// `Xᵢ₊₁`
	pub next_value: u64,
	/// `Xᵢ / (m - 1)`
	pub ratio: f64,
	/// `ratio` with exactly `decimal_digits` fractional digits.
	pub ratio_text: String,
}

/// Rows produced for one set of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
	pub rows: Vec<SequenceRow>,
	/// The cycle did not close before the hard cap.
	pub truncated: bool,
	pub note: String,
}

/// Iterator over `(Xᵢ, Xᵢ₊₁)` pairs of `X ← (a·X + c) mod m`.
///
/// Arithmetic is done in `u128`, exact for any `u64` parameters.
#[derive(Debug, Clone)]
pub struct Congruential {
	multiplier: u64,
	increment: u64,
	modulus: u64,
	state: u64,
}

impl Congruential {
	/// `modulus` must be non-zero.
	pub fn new(multiplier: u64, increment: u64, modulus: u64, start: u64) -> Self {
		Self { multiplier, increment, modulus, state: start }
	}

	/// Next state without advancing.
	pub fn peek(&self) -> u64 {
		let next = (self.multiplier as u128 * self.state as u128 + self.increment as u128) % self.modulus as u128;
		// Below `modulus`, so it fits back in u64.
		next as u64
	}
}

impl Iterator for Congruential {
	type Item = (u64, u64);

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.state;
		self.state = self.peek();
		Some((current, self.state))
	}
}

/// Number of rows to list: `min(max(p, N) + 1, hard_cap)`.
///
/// The extra row shows the value the cycle closes on. The flag is set when
/// the unclamped count exceeds `hard_cap`.
pub fn target_rows(desired_count: u64, max_period: u64, hard_cap: u64) -> (usize, bool) {
	let wanted = desired_count.max(max_period).saturating_add(1);
	if wanted > hard_cap {
		(hard_cap as usize, true)
	} else {
		(wanted as usize, false)
	}
}

/// Lists the sequence for `parameters`, starting at `parameters.start_value`.
pub fn generate_sequence(
	variant: Variant,
	parameters: &DerivedParameters,
	desired_count: u64,
	decimal_digits: usize,
	hard_cap: u64,
) -> Sequence {
	let (target, truncated) = target_rows(desired_count, parameters.max_period, hard_cap);

	let steps = Congruential::new(
		parameters.multiplier,
		parameters.additive_constant,
		parameters.modulus,
		parameters.start_value,
	);
	let rows: Vec<SequenceRow> = steps
		.take(target)
		.enumerate()
		.map(|(i, (x, next))| SequenceRow {
			index: i + 1,
			current_value: x,
			operation: operation(variant, parameters, x),
			next_value: next,
			ratio: ratio(x, parameters.modulus),
			ratio_text: format_ratio(x, parameters.modulus, decimal_digits),
		})
		.collect();

	if truncated {
		info!("Sequence truncated to {} rows (period {})", hard_cap, parameters.max_period);
	}

	Sequence {
		note: note(variant, parameters, rows.len(), decimal_digits, truncated),
		rows,
		truncated,
	}
}

fn note(variant: Variant, parameters: &DerivedParameters, rows: usize, decimal_digits: usize, truncated: bool) -> String {
	let period = if variant.is_multiplicative() {
		format!("Período máximo teórico N = 2^(g−2) = {}.", parameters.max_period)
	} else {
		format!("Período máximo teórico N = m = {}.", parameters.max_period)
	};
	let mut note = if truncated {
		format!("{} Secuencia truncada a {} filas antes de cerrar el ciclo.", period, rows)
	} else {
		format!("{} Se generan {} filas (máx(p, N) + 1) para mostrar el cierre del ciclo.", period, rows)
	};
	note.push_str(&format!(" D = {} decimales.", decimal_digits));
	note
}

#[cfg(test)]
mod tests {
	use super::*;

	fn linear_parameters() -> DerivedParameters {
		DerivedParameters { multiplier: 5, exponent: 3, modulus: 8, additive_constant: 3, max_period: 8, start_value: 7 }
	}

	#[test]
	fn target_rows_law() {
		assert_eq!(target_rows(5, 8, 8192), (9, false));
		assert_eq!(target_rows(3, 4, 8192), (5, false));
		assert_eq!(target_rows(10, 4, 8192), (11, false));
		assert_eq!(target_rows(8191, 8191, 8192), (8192, false));
		assert_eq!(target_rows(8192, 8192, 8192), (8192, true));
		assert_eq!(target_rows(1, u64::MAX, 8192), (8192, true));
	}

	#[test]
	fn congruential_steps() {
		let values: Vec<(u64, u64)> = Congruential::new(5, 3, 8, 7).take(3).collect();
		assert_eq!(values, vec![(7, 6), (6, 1), (1, 0)]);
	}

	#[test]
	fn congruential_does_not_overflow() {
		let mut steps = Congruential::new(u64::MAX, u64::MAX, u64::MAX - 1, u64::MAX - 2);
		let (_, next) = steps.next().unwrap();
		assert!(next < u64::MAX - 1);
	}

	#[test]
	fn linear_sequence_closes_its_cycle() {
		let sequence = generate_sequence(Variant::Linear, &linear_parameters(), 5, 2, 8192);
		assert_eq!(sequence.rows.len(), 9);
		assert!(!sequence.truncated);
		assert_eq!(sequence.rows[0].current_value, 7);
		assert_eq!(sequence.rows[0].operation, "(5 * 7 + 3) MOD(8)");
		assert_eq!(sequence.rows[0].next_value, 6);
		assert_eq!(sequence.rows[0].ratio_text, "1.00");
		// Full period: the ninth row starts back at the seed.
		assert_eq!(sequence.rows[8].current_value, 7);
		let mut seen: Vec<u64> = sequence.rows[..8].iter().map(|r| r.current_value).collect();
		seen.sort();
		assert_eq!(seen, (0..8).collect::<Vec<_>>());
	}

	#[test]
	fn rows_chain_and_are_indexed() {
		let sequence = generate_sequence(Variant::Linear, &linear_parameters(), 5, 2, 8192);
		for (i, pair) in sequence.rows.windows(2).enumerate() {
			assert_eq!(pair[0].index, i + 1);
			assert_eq!(pair[0].next_value, pair[1].current_value);
		}
	}

	#[test]
	fn truncation_is_reported_in_note() {
		let parameters = DerivedParameters { multiplier: 3, exponent: 15, modulus: 32768, additive_constant: 0, max_period: 8192, start_value: 1 };
		let sequence = generate_sequence(Variant::MultiplicativeA, &parameters, 8192, 0, 8192);
		assert!(sequence.truncated);
		assert_eq!(sequence.rows.len(), 8192);
		assert!(sequence.note.contains("truncada a 8192"));
		assert!(sequence.note.contains("N = 2^(g−2) = 8192"));
		assert!(!sequence.note.contains("cierre del ciclo"));
		assert!(sequence.note.contains("D = 0 decimales"));
	}

	#[test]
	fn note_mentions_precision() {
		let sequence = generate_sequence(Variant::Linear, &linear_parameters(), 5, 4, 8192);
		assert!(sequence.note.contains("D = 4 decimales"));
		assert!(sequence.note.contains("N = m = 8"));
		assert!(!sequence.note.contains("truncada"));
		assert!(sequence.note.contains("Se generan 9 filas"));
	}
}
