/// Errors that can occur during type checking.
///
/// Types appear in messages exactly as their type-strings read in source
/// and in the emitted output.
#[derive(thiserror::Error, Debug)]
pub enum TypeError {
	#[error("undefined variable: {0}")]
	UndefinedVariable(String),
	#[error("type mismatch for var {name}: expected {expected}, got {found}")]
	VarMismatch { name: String, expected: String, found: String },
	#[error("type mismatch for const {name}: expected {expected}, got {found}")]
	ConstMismatch { name: String, expected: String, found: String },
	#[error("cannot assign {found} to {expected}")]
	AssignMismatch { expected: String, found: String },
	#[error("type mismatch in binary operation: {left} {op} {right}")]
	BinaryMismatch { left: String, op: String, right: String },
	#[error("logical operator requires bool operands")]
	LogicalOperands,
	#[error("logical not requires bool operand")]
	NotOperand,
	#[error("unary {0} requires numeric operand")]
	UnaryOperand(String),
	#[error("cannot use null coalescing on non-nullable type: {0}")]
	NullCoalesce(String),
}
