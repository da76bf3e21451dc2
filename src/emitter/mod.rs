//! Serializes a checked program as Go source text.
//!
//! The emitter is a pure tree walk with no error path. Body text is
//! buffered while imports are collected, then the output is assembled as
//! preamble, import block, body. Indentation is one horizontal tab per
//! block depth.
//!
//! The one non-trivial lowering is null-coalescing: `e ?: d` becomes an
//! immediately-invoked closure that returns `d` when `e` is nil.

use crate::{
	parser::expression::{CallExpr, Expression, MethodCall},
	statement::{
		ConstDecl, ForRangeStmt, ForStmt, FuncDecl, IfStmt, ImportDecl, InterfaceDecl, Item, Program,
		SelectStmt, Statement, StructDecl, VarDecl,
	},
};

/// A Go text emitter for a checked program.
pub(crate) struct Emitter {
	body:    String,
	indent:  usize,
	imports: Vec<ImportDecl>,
}

impl Emitter {
	pub fn new() -> Self { Self { body: String::new(), indent: 0, imports: Vec::new() } }

	/// Serialize the program. Output always begins with the `package main`
	/// preamble and a blank line.
	pub fn emit(mut self, program: &Program) -> String {
		for item in &program.items {
			self.emit_item(item);
		}

		let mut output = String::from("package main\n\n");
		if !self.imports.is_empty() {
			output.push_str("import (\n");
			for import in &self.imports {
				match &import.alias {
					Some(alias) => output.push_str(&format!("\t{alias} \"{}\"\n", import.path)),
					None => output.push_str(&format!("\t\"{}\"\n", import.path)),
				}
			}
			output.push_str(")\n\n");
		}
		output.push_str(&self.body);
		output
	}

	fn emit_item(&mut self, item: &Item) {
		match item {
			// The fixed preamble already names the package.
			Item::Package(_) => {}
			Item::Import(import) => {
				if !self.imports.iter().any(|seen| seen.path == import.path) {
					self.imports.push(import.clone());
				}
			}
			Item::Func(func) => self.emit_func(func),
			Item::Var(var) => self.emit_var(var),
			Item::Const(cst) => self.emit_const(cst),
			Item::Type(decl) => {
				self.write(&format!("type {} {}\n", decl.name, decl.ty));
			}
			Item::Struct(decl) => self.emit_struct(decl),
			Item::Interface(decl) => self.emit_interface(decl),
		}
	}

	fn emit_func(&mut self, func: &FuncDecl) {
		self.write("func ");
		if let Some(receiver) = &func.receiver {
			self.write(&format!("(r {}) ", receiver.ty));
		}
		self.write(&func.name);
		self.write("(");
		for (i, param) in func.params.iter().enumerate() {
			if i > 0 {
				self.write(", ");
			}
			self.write(&format!("{} {}", param.name, param.ty));
		}
		self.write(")");
		match func.returns.as_slice() {
			[] => {}
			[single] => self.write(&format!(" {single}")),
			returns => {
				self.write(" (");
				for (i, ret) in returns.iter().enumerate() {
					if i > 0 {
						self.write(", ");
					}
					self.write(ret);
				}
				self.write(")");
			}
		}
		self.write(" {\n");
		self.indent += 1;
		for statement in &func.body {
			self.emit_statement(statement);
		}
		self.indent -= 1;
		self.write("}\n\n");
	}

	fn emit_struct(&mut self, decl: &StructDecl) {
		self.write(&format!("type {} struct {{\n", decl.name));
		for field in &decl.fields {
			self.write(&format!("\t{} {}\n", field.name, field.ty));
		}
		self.write("}\n\n");
	}

	fn emit_interface(&mut self, decl: &InterfaceDecl) {
		self.write(&format!("type {} interface {{\n", decl.name));
		for method in &decl.methods {
			self.write(&format!("\t{} {}\n", method.name, method.ty));
		}
		self.write("}\n\n");
	}

	fn emit_statement(&mut self, statement: &Statement) {
		match statement {
			Statement::Var(var) => {
				self.write_indent();
				self.emit_var(var);
			}
			Statement::Const(cst) => {
				self.write_indent();
				self.emit_const(cst);
			}
			Statement::Return(ret) => {
				self.write_indent();
				self.write("return");
				for (i, value) in ret.values.iter().enumerate() {
					self.write(if i == 0 { " " } else { ", " });
					self.emit_expr(value);
				}
				self.write("\n");
			}
			Statement::If(stmt) => self.emit_if(stmt),
			Statement::For(stmt) => self.emit_for(stmt),
			Statement::ForRange(stmt) => self.emit_for_range(stmt),
			Statement::Assign(assign) => {
				self.write_indent();
				self.write(&format!("{} = ", assign.name));
				self.emit_expr(&assign.value);
				self.write("\n");
			}
			Statement::ShortAssign(assign) => {
				self.write_indent();
				self.write(&format!("{} := ", assign.name));
				self.emit_expr(&assign.value);
				self.write("\n");
			}
			Statement::Call(call) => {
				self.write_indent();
				self.emit_call(call);
				self.write("\n");
			}
			Statement::MethodCall(call) => {
				self.write_indent();
				self.emit_method_call(call);
				self.write("\n");
			}
			Statement::Defer(stmt) => {
				self.write_indent();
				self.write("defer ");
				self.emit_call(&stmt.call);
				self.write("\n");
			}
			Statement::Go(stmt) => {
				self.write_indent();
				self.write("go ");
				self.emit_call(&stmt.call);
				self.write("\n");
			}
			Statement::Select(stmt) => self.emit_select(stmt),
			Statement::Panic(stmt) => {
				self.write_indent();
				self.write("panic(");
				self.emit_expr(&stmt.expr);
				self.write(")\n");
			}
			Statement::Expression(expr) => {
				self.write_indent();
				self.emit_expr(expr);
				self.write("\n");
			}
		}
	}

	/// `var name [Type] [= expr]`; indentation comes from the caller's
	/// depth (zero at top level).
	fn emit_var(&mut self, var: &VarDecl) {
		self.write(&format!("var {}", var.name));
		if let Some(ty) = &var.ty {
			self.write(&format!(" {ty}"));
		}
		if let Some(value) = &var.value {
			self.write(" = ");
			self.emit_expr(value);
		}
		self.write("\n");
	}

	fn emit_const(&mut self, cst: &ConstDecl) {
		self.write(&format!("const {}", cst.name));
		if let Some(ty) = &cst.ty {
			self.write(&format!(" {ty}"));
		}
		self.write(" = ");
		self.emit_expr(&cst.value);
		self.write("\n");
	}

	/// An else-if chain arrives as a nested `If` inside the else block and
	/// is emitted that way.
	fn emit_if(&mut self, stmt: &IfStmt) {
		self.write_indent();
		self.write("if ");
		self.emit_expr(&stmt.condition);
		self.write(" {\n");
		self.indent += 1;
		for statement in &stmt.then_branch {
			self.emit_statement(statement);
		}
		self.indent -= 1;
		self.write_indent();
		if stmt.else_branch.is_empty() {
			self.write("}\n");
		} else {
			self.write("} else {\n");
			self.indent += 1;
			for statement in &stmt.else_branch {
				self.emit_statement(statement);
			}
			self.indent -= 1;
			self.write_indent();
			self.write("}\n");
		}
	}

	/// Clause slots are never populated by the grammar and are not
	/// serialized; only the bodied form is produced.
	fn emit_for(&mut self, stmt: &ForStmt) {
		self.write_indent();
		self.write("for {\n");
		self.indent += 1;
		for statement in &stmt.body {
			self.emit_statement(statement);
		}
		self.indent -= 1;
		self.write_indent();
		self.write("}\n");
	}

	fn emit_for_range(&mut self, stmt: &ForRangeStmt) {
		self.write_indent();
		self.write(&format!("for {}, {} := range ", stmt.key, stmt.value));
		self.emit_expr(&stmt.expr);
		self.write(" {\n");
		self.indent += 1;
		for statement in &stmt.body {
			self.emit_statement(statement);
		}
		self.indent -= 1;
		self.write_indent();
		self.write("}\n");
	}

	fn emit_select(&mut self, stmt: &SelectStmt) {
		self.write_indent();
		self.write("select {\n");
		for case in &stmt.cases {
			self.write_indent();
			self.write("case ");
			self.emit_expr(&case.guard);
			self.write(":\n");
			self.indent += 1;
			for statement in &case.body {
				self.emit_statement(statement);
			}
			self.indent -= 1;
		}
		self.write_indent();
		self.write("}\n");
	}

	fn emit_expr(&mut self, expr: &Expression) {
		match expr {
			Expression::Int(value) | Expression::Float(value) => self.write(value),
			Expression::Str(value) => self.write(&format!("\"{value}\"")),
			Expression::Bool(value) => self.write(if *value { "true" } else { "false" }),
			Expression::Null => self.write("nil"),
			Expression::Identifier(name) => self.write(name),
			Expression::Binary { left, op, right } => {
				self.write("(");
				self.emit_expr(left);
				self.write(&format!(" {op} "));
				self.emit_expr(right);
				self.write(")");
			}
			Expression::Unary { op, right } => {
				self.write(op);
				self.emit_expr(right);
			}
			Expression::Call(call) => self.emit_call(call),
			Expression::MethodCall(call) => self.emit_method_call(call),
			Expression::Index { expr, index } => {
				self.emit_expr(expr);
				self.write("[");
				self.emit_expr(index);
				self.write("]");
			}
			Expression::Slice { expr, start, end } => {
				self.emit_expr(expr);
				self.write("[");
				if let Some(start) = start {
					self.emit_expr(start);
				}
				self.write(":");
				if let Some(end) = end {
					self.emit_expr(end);
				}
				self.write("]");
			}
			Expression::Array { elem_type, elements } => {
				self.write(&format!("[]{}{{", elem_type.as_deref().unwrap_or("")));
				for (i, element) in elements.iter().enumerate() {
					if i > 0 {
						self.write(", ");
					}
					self.emit_expr(element);
				}
				self.write("}");
			}
			Expression::Map { pairs } => {
				self.write("map[string]interface{}{");
				for (i, (key, value)) in pairs.iter().enumerate() {
					if i > 0 {
						self.write(", ");
					}
					self.write(&format!("\"{key}\": "));
					self.emit_expr(value);
				}
				self.write("}");
			}
			Expression::StructLit { ty, fields } => {
				self.write(&format!("{ty}{{"));
				for (i, (name, value)) in fields.iter().enumerate() {
					if i > 0 {
						self.write(", ");
					}
					self.write(&format!("{name}: "));
					self.emit_expr(value);
				}
				self.write("}");
			}
			// The nullable marker is type-level only.
			Expression::Nullable(inner) => self.emit_expr(inner),
			Expression::NullCheck { expr, default } => self.emit_null_check(expr, default),
			Expression::Chan { op, expr } => {
				self.write(op);
				self.emit_expr(expr);
			}
			Expression::Recover => self.write("recover()"),
		}
	}

	fn emit_call(&mut self, call: &CallExpr) {
		self.write(&call.func);
		self.write("(");
		for (i, arg) in call.args.iter().enumerate() {
			if i > 0 {
				self.write(", ");
			}
			self.emit_expr(arg);
		}
		self.write(")");
	}

	fn emit_method_call(&mut self, call: &MethodCall) {
		self.write(&format!("{}.{}(", call.receiver, call.method));
		for (i, arg) in call.args.iter().enumerate() {
			if i > 0 {
				self.write(", ");
			}
			self.emit_expr(arg);
		}
		self.write(")");
	}

	/// Lower `e ?: d` to an immediately-invoked closure returning the
	/// default when the probed value is nil.
	fn emit_null_check(&mut self, expr: &Expression, default: &Expression) {
		self.write("func() interface{} { if ");
		self.emit_expr(expr);
		self.write(" == nil { return ");
		self.emit_expr(default);
		self.write(" }; return ");
		self.emit_expr(expr);
		self.write(" }()");
	}

	fn write(&mut self, text: &str) { self.body.push_str(text); }

	fn write_indent(&mut self) {
		for _ in 0..self.indent {
			self.body.push('\t');
		}
	}
}
