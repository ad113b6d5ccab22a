use lcg_core::model::format::{render_table, summary};
use lcg_core::{generate, GenerateError, RawInput, Variant};

#[test]
fn linear_seed_seven() {
	let result = generate(&RawInput::linear("7", "1", "3", "5", "2"), Variant::Linear).unwrap();
	let p = &result.parameters;
	assert_eq!((p.exponent, p.modulus, p.multiplier, p.additive_constant), (3, 8, 5, 3));
	assert_eq!(result.rows[0].current_value, 7);

	let values: Vec<u64> = result.rows.iter().map(|r| r.current_value).collect();
	assert_eq!(values, vec![7, 6, 1, 0, 3, 2, 5, 4, 7]);
	assert_eq!(summary(&result), "a: 5; c: 3  g: 3; m: 8");
}

#[test]
fn linear_even_additive_constant() {
	let error = generate(&RawInput::linear("7", "1", "4", "5", "2"), Variant::Linear).unwrap_err();
	assert_eq!(error, GenerateError::Constraint("c debe ser primo impar y ≥ 3".to_owned()));
}

#[test]
fn multiplicative_a_seed_five() {
	let result = generate(&RawInput::multiplicative("5", "0", "3", "0"), Variant::MultiplicativeA).unwrap();
	let p = &result.parameters;
	assert_eq!((p.exponent, p.modulus, p.max_period, p.multiplier), (4, 16, 4, 3));
	assert_eq!(result.rows.len(), 5);

	let values: Vec<u64> = result.rows.iter().map(|r| r.current_value).collect();
	assert_eq!(values, vec![5, 15, 13, 7, 5]);
	assert_eq!(result.rows[0].operation, "(3 * 5) MOD(16)");
	assert_eq!(result.rows[1].ratio_text, "1");
	assert_eq!(summary(&result), "a: 3  g: 4  m: 16\nPeríodo máximo teórico N = 2^(g−2) = 4");
}

#[test]
fn multiplicative_even_seed() {
	for variant in [Variant::MultiplicativeA, Variant::MultiplicativeB] {
		let error = generate(&RawInput::multiplicative("4", "0", "3", "0"), variant).unwrap_err();
		assert_eq!(error.messages(), vec!["La semilla X₀ debe ser impar y mayor que 0"]);
	}
}

#[test]
fn desired_count_above_cap() {
	let linear = generate(&RawInput::linear("7", "1", "3", "9000", "2"), Variant::Linear).unwrap_err();
	let multiplicative = generate(&RawInput::multiplicative("5", "0", "9000", "2"), Variant::MultiplicativeB).unwrap_err();
	for error in [linear, multiplicative] {
		match error {
			GenerateError::Constraint(message) => assert!(message.contains("8192"), "{}", message),
			other => panic!("unexpected {:?}", other),
		}
	}
}

#[test]
fn cap_truncates_multiplicative() {
	let result = generate(&RawInput::multiplicative("1", "0", "8192", "4"), Variant::MultiplicativeA).unwrap();
	assert!(result.truncated);
	assert_eq!(result.rows.len(), 8192);
	assert!(result.note.contains("truncada"));
}

#[test]
fn table_rendering() {
	let result = generate(&RawInput::multiplicative("5", "0", "3", "2"), Variant::MultiplicativeA).unwrap();
	let table = render_table(&result);
	let lines: Vec<&str> = table.lines().collect();
	assert_eq!(lines.len(), 2 + 5);
	assert!(lines[0].contains("Operación"));
	assert!(lines[0].contains("rᵢ = Xᵢ/(m−1)"));
	assert!(lines[2].contains("(3 * 5) MOD(16)"));
	assert!(lines[2].ends_with("0.33"));
}

#[test]
fn validation_lists_every_field() {
	let error = generate(&RawInput::default(), Variant::Linear).unwrap_err();
	assert_eq!(error.messages().len(), 5);
	let error = generate(&RawInput::default(), Variant::MultiplicativeA).unwrap_err();
	assert_eq!(error.messages().len(), 4);
}

#[test]
fn seed_above_32_bits() {
	let result = generate(&RawInput::linear("5000000007", "1", "3", "5", "2"), Variant::Linear).unwrap();
	assert_eq!(result.parameters.start_value, 7);

	let result = generate(&RawInput::multiplicative("5000000007", "0", "3", "0"), Variant::MultiplicativeB).unwrap();
	assert_eq!(result.parameters.start_value, 5_000_000_007 % 16);
}

#[test]
fn huge_desired_count_reports_the_cap() {
	for p in ["5000000000", "99999999999999999999999"] {
		let error = generate(&RawInput::linear("7", "1", "3", p, "2"), Variant::Linear).unwrap_err();
		assert_eq!(error, GenerateError::Constraint("Para no colapsar la UI, usa p ≤ 8192.".to_owned()));
	}
}

#[test]
fn large_k_keeps_exact_recurrence() {
	let k = (u64::MAX - 5) / 8;
	let result = generate(&RawInput::multiplicative("3", &k.to_string(), "4", "2"), Variant::MultiplicativeB).unwrap();
	let p = &result.parameters;
	assert_eq!(p.multiplier, 5 + 8 * k);
	for pair in result.rows.windows(2) {
		assert_eq!(pair[0].next_value, pair[1].current_value);
	}
	assert_eq!(result.rows.last().unwrap().current_value, p.start_value);

	let error = generate(&RawInput::multiplicative("3", &u64::MAX.to_string(), "4", "2"), Variant::MultiplicativeB).unwrap_err();
	assert!(matches!(error, GenerateError::Constraint(_)));
}
