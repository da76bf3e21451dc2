use std::fmt;

/// A call to a free function, also usable in statement position.
#[derive(Debug, Clone)]
pub struct CallExpr {
	pub func: String,
	pub args: Vec<Expression>,
}

/// A call through a receiver, e.g. `server.handle(req)`.
#[derive(Debug, Clone)]
pub struct MethodCall {
	pub receiver: String,
	pub method:   String,
	pub args:     Vec<Expression>,
}

/// An expression node.
///
/// Numeric literals keep their source spelling so the emitter can reproduce
/// them verbatim. Field access reuses `Binary` with a `"."` operator and an
/// `Identifier` on the right.
#[derive(Debug, Clone)]
pub enum Expression {
	Int(String),
	Float(String),
	Str(String),
	Bool(bool),
	Null,
	Identifier(String),
	Binary { left: Box<Expression>, op: String, right: Box<Expression> },
	Unary { op: String, right: Box<Expression> },
	Call(CallExpr),
	MethodCall(MethodCall),
	Index { expr: Box<Expression>, index: Box<Expression> },
	Slice { expr: Box<Expression>, start: Option<Box<Expression>>, end: Option<Box<Expression>> },
	/// `[]T` (typed, empty) or a bracketed element list (untyped).
	Array { elem_type: Option<String>, elements: Vec<Expression> },
	/// String-keyed pairs in source order.
	Map { pairs: Vec<(String, Expression)> },
	StructLit { ty: String, fields: Vec<(String, Expression)> },
	/// Postfix `?`: marks the operand nullable; type-level only.
	Nullable(Box<Expression>),
	/// Postfix `?:` with its mandatory default.
	NullCheck { expr: Box<Expression>, default: Box<Expression> },
	/// A channel operation, e.g. the receive guard of a select case.
	Chan { op: String, expr: Box<Expression> },
	Recover,
}

impl Expression {
	pub fn boxed(self) -> Box<Self> { Box::new(self) }
}

/// Compact s-expression form, used by the parser tests.
impl fmt::Display for Expression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use Expression::*;
		match self {
			Int(value) | Float(value) => write!(f, "{value}"),
			Str(value) => write!(f, "\"{value}\""),
			Bool(value) => write!(f, "{value}"),
			Null => write!(f, "null"),
			Identifier(name) => write!(f, "{name}"),
			Binary { left, op, right } => write!(f, "({op} {left} {right})"),
			Unary { op, right } => write!(f, "({op} {right})"),
			Call(call) => {
				write!(f, "(call {}", call.func)?;
				for arg in &call.args {
					write!(f, " {arg}")?;
				}
				write!(f, ")")
			}
			MethodCall(call) => {
				write!(f, "(call {}.{}", call.receiver, call.method)?;
				for arg in &call.args {
					write!(f, " {arg}")?;
				}
				write!(f, ")")
			}
			Index { expr, index } => write!(f, "(index {expr} {index})"),
			Slice { expr, start, end } => {
				write!(f, "(slice {expr}")?;
				if let Some(start) = start {
					write!(f, " {start}")?;
				}
				if let Some(end) = end {
					write!(f, " {end}")?;
				}
				write!(f, ")")
			}
			Array { elem_type, elements } => {
				write!(f, "([]{}", elem_type.as_deref().unwrap_or(""))?;
				for element in elements {
					write!(f, " {element}")?;
				}
				write!(f, ")")
			}
			Map { pairs } => {
				write!(f, "(map")?;
				for (key, value) in pairs {
					write!(f, " ({key} {value})")?;
				}
				write!(f, ")")
			}
			StructLit { ty, fields } => {
				write!(f, "(struct {ty}")?;
				for (name, value) in fields {
					write!(f, " ({name} {value})")?;
				}
				write!(f, ")")
			}
			Nullable(inner) => write!(f, "(? {inner})"),
			NullCheck { expr, default } => write!(f, "(?: {expr} {default})"),
			Chan { op, expr } => write!(f, "({op} {expr})"),
			Recover => write!(f, "(recover)"),
		}
	}
}
