/// A parsing error with the line it occurred on and its type.
#[derive(thiserror::Error, Debug)]
#[error("line {line}: {kind}")]
pub struct ParseError {
	/// The line number where the error occurred.
	line: usize,
	/// The type of parsing error.
	kind: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, kind: ParseErrorType) -> Self { Self { line, kind } }
}

/// Types of parsing errors.
///
/// Token kinds are carried as their display names so the error type stays
/// independent of the lexer internals.
#[derive(Debug)]
pub enum ParseErrorType {
	/// A specific token kind was required.
	Expected { want: String, got: String },
	/// No top-level rule starts with this token.
	TopLevel(String),
	/// No statement rule starts with this token.
	Statement(String),
	/// No primary-expression rule starts with this token.
	Primary(String),
	/// `defer` and `go` only accept an immediate function call.
	CallRequired(&'static str),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			Expected { want, got } => write!(f, "expected {want}, got {got}"),
			TopLevel(kind) => write!(f, "unexpected token at top level: {kind}"),
			Statement(kind) => write!(f, "unexpected statement: {kind}"),
			Primary(kind) => write!(f, "unexpected primary expression: {kind}"),
			CallRequired(keyword) => write!(f, "expected function call after {keyword}"),
		}
	}
}
