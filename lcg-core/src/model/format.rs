use super::generator::GenerationResult;
use super::parameters::DerivedParameters;
use super::request::Variant;

/// Recurrence applied to `x`, as shown in the "Operación" column.
///
/// - linear: `(a * x + c) MOD(m)`
/// - multiplicative: `(a * x) MOD(m)`
pub fn operation(variant: Variant, parameters: &DerivedParameters, x: u64) -> String {
	if variant.is_multiplicative() {
		format!("({} * {}) MOD({})", parameters.multiplier, x, parameters.modulus)
	} else {
		format!("({} * {} + {}) MOD({})", parameters.multiplier, x, parameters.additive_constant, parameters.modulus)
	}
}

/// `x / (m - 1)`, `0` when `m <= 1`.
pub fn ratio(x: u64, modulus: u64) -> f64 {
	if modulus > 1 { x as f64 / (modulus - 1) as f64 } else { 0.0 }
}

/// Renders `x / (m - 1)` with exactly `digits` fractional digits.
///
/// Rounding is half away from zero on the exact fraction, so ties such as
/// `1/8 -> 0.13` do not depend on the binary value of the `f64` ratio.
/// `digits` is expected in `0..=12`.
pub fn format_ratio(x: u64, modulus: u64, digits: usize) -> String {
	let scale = 10u128.pow(digits as u32);
	let scaled = if modulus > 1 {
		let denominator = (modulus - 1) as u128;
		(2 * x as u128 * scale + denominator) / (2 * denominator)
	} else {
		0
	};

	let integer = scaled / scale;
	if digits == 0 {
		integer.to_string()
	} else {
		format!("{}.{:0width$}", integer, scaled % scale, width = digits)
	}
}

/// Header line of a result (parameters and, for multiplicative, the period).
pub fn summary(result: &GenerationResult) -> String {
	let p = &result.parameters;
	if result.variant.is_multiplicative() {
		format!(
			"a: {}  g: {}  m: {}\nPeríodo máximo teórico N = 2^(g−2) = {}",
			p.multiplier, p.exponent, p.modulus, p.max_period
		)
	} else {
		format!("a: {}; c: {}  g: {}; m: {}", p.multiplier, p.additive_constant, p.exponent, p.modulus)
	}
}

/// Plain-text table of the rows, columns right-aligned.
pub fn render_table(result: &GenerationResult) -> String {
	let header = ["#", "Xᵢ", "Operación", "Resultado", "rᵢ = Xᵢ/(m−1)"];
	let cells: Vec<[String; 5]> = result.rows
		.iter()
		.map(|row| [
			row.index.to_string(),
			row.current_value.to_string(),
			row.operation.clone(),
			row.next_value.to_string(),
			row.ratio_text.clone(),
		])
		.collect();

	let mut widths = header.map(|h| h.chars().count());
	for line in &cells {
		for (width, cell) in widths.iter_mut().zip(line) {
			*width = (*width).max(cell.chars().count());
		}
	}

	let mut out = String::new();
	push_line(&mut out, &widths, &header);
	let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
	push_line(&mut out, &widths, &separator.iter().map(String::as_str).collect::<Vec<_>>());
	for line in &cells {
		push_line(&mut out, &widths, &line.iter().map(String::as_str).collect::<Vec<_>>());
	}
	out
}

fn push_line(out: &mut String, widths: &[usize], line: &[&str]) {
	let padded: Vec<String> = line
		.iter()
		.zip(widths)
		.map(|(cell, width)| format!("{:>width$}", cell, width = *width))
		.collect();
	out.push_str(padded.join(" | ").trim_end());
	out.push('\n');
}

/// One `• message` line per error.
pub fn render_errors(errors: &[String]) -> String {
	errors.iter().map(|e| format!("• {}\n", e)).collect()
}
