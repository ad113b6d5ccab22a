/// Greatest common divisor (Euclidean algorithm).
///
/// Inputs are unsigned, so there is no sign to strip.
/// `gcd(0, 0)` is `0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
	while b != 0 {
		let t = b;
		b = a % b;
		a = t;
	}
	a
}

/// Primality by trial division over odd divisors up to `√n`.
///
/// - `n <= 1` is not prime
/// - `2` is the only even prime
pub fn is_prime(n: u64) -> bool {
	if n <= 1 {
		return false;
	}
	if n % 2 == 0 {
		return n == 2;
	}
	let mut i = 3u64;
	while i.saturating_mul(i) <= n {
		if n % i == 0 {
			return false;
		}
		i += 2;
	}
	true
}

/// Exact `ceil(log2(n))` for `n >= 1`.
///
/// Returns `None` for `0` or when the next power of two does not fit in `u64`.
pub fn ceil_log2(n: u64) -> Option<u32> {
	if n == 0 {
		return None;
	}
	n.checked_next_power_of_two().map(|p| p.trailing_zeros())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn gcd_basics() {
		assert_eq!(gcd(0, 0), 0);
		assert_eq!(gcd(0, 7), 7);
		assert_eq!(gcd(7, 0), 7);
		assert_eq!(gcd(12, 18), 6);
		assert_eq!(gcd(3, 8), 1);
		assert_eq!(gcd(2, 1024), 2);
	}

	#[test]
	fn primes_below_fifty() {
		let primes: Vec<u64> = (0..50).filter(|n| is_prime(*n)).collect();
		assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]);
	}

	#[test]
	fn prime_squares_are_composite() {
		assert!(!is_prime(9));
		assert!(!is_prime(49));
		assert!(!is_prime(65_521 * 65_521));
		assert!(is_prime(4_294_967_291));
	}

	#[test]
	fn ceil_log2_values() {
		assert_eq!(ceil_log2(0), None);
		assert_eq!(ceil_log2(1), Some(0));
		assert_eq!(ceil_log2(2), Some(1));
		assert_eq!(ceil_log2(3), Some(2));
		assert_eq!(ceil_log2(5), Some(3));
		assert_eq!(ceil_log2(8192), Some(13));
		assert_eq!(ceil_log2(8193), Some(14));
		assert_eq!(ceil_log2(u64::MAX), None);
	}
}
