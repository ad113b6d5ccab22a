use log::debug;
use serde::Serialize;

use crate::math::{ceil_log2, gcd, is_prime};
use super::request::{GeneratorRequest, Variant};

/// Upper bound on the number of listed rows, and on the desired count.
pub const HARD_CAP_ROWS: u64 = 8192;

/// Largest supported exponent `g` (so `m <= 2^32`).
///
/// With `HARD_CAP_ROWS` the derivers never exceed `g = 15`; the bound keeps
/// `a * x + c` exact in the generator for any future cap.
pub const MAX_EXPONENT: u32 = 32;

/// Parameters derived from a request.
///
/// # Invariants
/// - `modulus == 2^exponent` and `modulus >= desired_count`
/// - linear: `multiplier % 4 == 1`, `gcd(additive_constant, modulus) == 1`, `max_period == modulus`
/// - multiplicative: `additive_constant == 0`, `max_period == 2^(exponent - 2)`
/// - `start_value < modulus`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedParameters {
	/// `a`
	pub multiplier: u64,
	/// `g`
	pub exponent: u32,
	/// `m = 2^g`
	pub modulus: u64,
	/// `c`
	pub additive_constant: u64,
	/// `N`, theoretical period.
	pub max_period: u64,
	/// Seed reduced into `[0, m)`.
	pub start_value: u64,
}

/// Dispatches to the deriver of the request's variant.
pub fn derive(request: &GeneratorRequest) -> Result<DerivedParameters, String> {
	match request.variant {
		Variant::Linear => derive_linear(request),
		Variant::MultiplicativeA | Variant::MultiplicativeB => derive_multiplicative(request),
	}
}

fn check_row_cap(desired_count: u64) -> Result<(), String> {
	if desired_count > HARD_CAP_ROWS {
		return Err(format!("Para no colapsar la UI, usa p ≤ {}.", HARD_CAP_ROWS));
	}
	Ok(())
}

fn power_of_two(exponent: u32) -> Result<u64, String> {
	if exponent > MAX_EXPONENT {
		return Err(format!("g = {} excede el máximo soportado ({}).", exponent, MAX_EXPONENT));
	}
	Ok(1u64 << exponent)
}

fn multiplier(variant: Variant, k: u64) -> Result<u64, String> {
	variant.multiplier(k).ok_or_else(|| format!("k = {} produce un multiplicador fuera de rango.", k))
}

/// `((seed mod m) + m) mod m`; seeds are unsigned so this is `seed mod m`.
fn reduce_seed(seed: u64, modulus: u64) -> u64 {
	seed % modulus
}

/// Mixed generator parameters (Hull–Dobell with `m = 2^g`).
///
/// Checks run in order and the first failure is returned:
/// 1. `p <= HARD_CAP_ROWS`
/// 2. `c` is an odd prime `>= 3`
/// 3. `g = max(1, ceil(log2 p))`, `m = 2^g`
/// 4. `a = 1 + 4k`
/// 5. `gcd(c, m) == 1`
pub fn derive_linear(request: &GeneratorRequest) -> Result<DerivedParameters, String> {
	check_row_cap(request.desired_count)?;

	let c = request.additive_constant;
	if c < 3 || c % 2 == 0 || !is_prime(c) {
		return Err("c debe ser primo impar y ≥ 3".to_owned());
	}

	let exponent = ceil_log2(request.desired_count)
		.ok_or_else(|| "p debe ser entero positivo (> 0).".to_owned())?
		.max(1);
	let modulus = power_of_two(exponent)?;
	let a = multiplier(Variant::Linear, request.k)?;

	// Unreachable for odd c, kept as the stated precondition.
	if gcd(c, modulus) != 1 {
		return Err(format!("c debe ser coprimo con m (= {}). Para m = 2^g, usa un primo impar (c ≠ 2).", modulus));
	}

	let parameters = DerivedParameters {
		multiplier: a,
		exponent,
		modulus,
		additive_constant: c,
		max_period: modulus,
		start_value: reduce_seed(request.seed, modulus),
	};
	debug!("Derived linear parameters {:?}", parameters);
	Ok(parameters)
}

/// Multiplicative generator parameters (`c = 0`, `m = 2^g`).
///
/// Checks run in order and the first failure is returned:
/// 1. `p <= HARD_CAP_ROWS`
/// 2. seed is odd and positive
/// 3. `g = ceil(log2 p) + 2`, `m = 2^g`, `N = 2^(g-2)`
/// 4. `a = 3 + 8k` or `5 + 8k` depending on the variant
pub fn derive_multiplicative(request: &GeneratorRequest) -> Result<DerivedParameters, String> {
	check_row_cap(request.desired_count)?;

	if request.seed == 0 || request.seed % 2 == 0 {
		return Err("La semilla X₀ debe ser impar y mayor que 0".to_owned());
	}

	let exponent = ceil_log2(request.desired_count)
		.ok_or_else(|| "p debe ser entero positivo (> 0).".to_owned())?
		+ 2;
	let modulus = power_of_two(exponent)?;
	let a = multiplier(request.variant, request.k)?;

	let parameters = DerivedParameters {
		multiplier: a,
		exponent,
		modulus,
		additive_constant: 0,
		max_period: 1u64 << (exponent - 2),
		start_value: reduce_seed(request.seed, modulus),
	};
	debug!("Derived multiplicative parameters {:?}", parameters);
	Ok(parameters)
}
