use std::fmt;

/// Why a generation request was refused.
///
/// Both classes are deterministic outcomes of the inputs; truncation is not
/// an error and is reported on the result instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// Every malformed raw field, in field order.
	Validation(Vec<String>),
	/// The first number-theoretic precondition that failed.
	Constraint(String),
}

impl GenerateError {
	/// Ordered messages for display (one bullet each).
	pub fn messages(&self) -> Vec<String> {
		match self {
			GenerateError::Validation(errors) => errors.clone(),
			GenerateError::Constraint(error) => vec![error.clone()],
		}
	}
}

impl fmt::Display for GenerateError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.messages().join("\n"))
	}
}

impl std::error::Error for GenerateError {}

impl From<String> for GenerateError {
	fn from(error: String) -> Self {
		GenerateError::Constraint(error)
	}
}
