pub mod checker;
pub mod parser;

/// CompileError is the top-level error type for the compiler pipeline.
///
/// Each stage contributes its own error kind; the `Display` form carries a
/// stage prefix so the driver can print errors as-is.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
	/// Internal compiler error, should never happen
	#[error("internal error: {0}")]
	Internal(#[from] anyhow::Error),
	#[error("parse error: {0}")]
	Parse(#[from] parser::ParseError),
	#[error("type error: {0}")]
	Type(#[from] checker::TypeError),
	/// Reserved for emitter failures; the current pipeline cannot produce one.
	#[error("codegen error: {0}")]
	Codegen(String),
}

pub type Result<T, E = CompileError> = std::result::Result<T, E>;
