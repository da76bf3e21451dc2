//! Tree nodes above the expression level.
//!
//! A program is an ordered list of top-level items; function bodies are
//! ordered lists of statements. The two levels overlap (`var` and `const`
//! declarations appear in both), so the declaration payloads are shared
//! structs wrapped by both [`Item`] and [`Statement`].
//!
//! Types are carried as opaque strings assembled by the parser exactly as
//! they will appear in the emitted output (`*Foo`, `[]int`,
//! `map[string]Bar`); nothing downstream takes them apart.

use crate::parser::expression::{CallExpr, Expression, MethodCall};

/// A complete source file: top-level items in source order.
#[derive(Debug, Clone)]
pub struct Program {
	pub items: Vec<Item>,
}

/// A top-level declaration.
#[derive(Debug, Clone)]
pub enum Item {
	Package(PackageDecl),
	Import(ImportDecl),
	Func(FuncDecl),
	Var(VarDecl),
	Const(ConstDecl),
	Type(TypeDecl),
	Struct(StructDecl),
	Interface(InterfaceDecl),
}

/// A statement in a function body.
///
/// Any expression is also valid in statement position on its own; the
/// common call forms get their own variants.
#[derive(Debug, Clone)]
pub enum Statement {
	Var(VarDecl),
	Const(ConstDecl),
	Return(ReturnStmt),
	If(IfStmt),
	For(ForStmt),
	ForRange(ForRangeStmt),
	Assign(AssignStmt),
	ShortAssign(ShortAssignStmt),
	Call(CallExpr),
	MethodCall(MethodCall),
	Defer(DeferStmt),
	Go(GoStmt),
	Select(SelectStmt),
	Panic(PanicStmt),
	Expression(Expression),
}

#[derive(Debug, Clone)]
pub struct PackageDecl {
	pub name: String,
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
	/// Import path with the surrounding quotes stripped.
	pub path:  String,
	pub alias: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FuncDecl {
	pub name:     String,
	pub receiver: Option<Param>,
	pub params:   Vec<Param>,
	pub returns:  Vec<String>,
	pub body:     Vec<Statement>,
}

/// A named, typed slot: parameter, receiver or interface method.
#[derive(Debug, Clone)]
pub struct Param {
	pub name: String,
	pub ty:   String,
}

/// `var name [: [?] Type] [= expr]`; the `?` marker sets `nullable`.
#[derive(Debug, Clone)]
pub struct VarDecl {
	pub name:     String,
	pub ty:       Option<String>,
	pub nullable: bool,
	pub value:    Option<Expression>,
}

#[derive(Debug, Clone)]
pub struct ConstDecl {
	pub name:  String,
	pub ty:    Option<String>,
	pub value: Expression,
}

#[derive(Debug, Clone)]
pub struct TypeDecl {
	pub name:     String,
	pub ty:       String,
	pub nullable: bool,
}

#[derive(Debug, Clone)]
pub struct StructDecl {
	pub name:   String,
	pub fields: Vec<Field>,
}

#[derive(Debug, Clone)]
pub struct Field {
	pub name:     String,
	pub ty:       String,
	pub nullable: bool,
}

#[derive(Debug, Clone)]
pub struct InterfaceDecl {
	pub name:    String,
	pub methods: Vec<Param>,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
	pub values: Vec<Expression>,
}

/// `else_branch` is empty, a single nested `If` (else-if chain), or a block.
#[derive(Debug, Clone)]
pub struct IfStmt {
	pub condition:   Expression,
	pub then_branch: Vec<Statement>,
	pub else_branch: Vec<Statement>,
}

/// The grammar produces only the bodied `for { … }` form; the clause slots
/// are carried but left empty.
#[derive(Debug, Clone)]
pub struct ForStmt {
	pub init:      Option<Box<Statement>>,
	pub condition: Option<Expression>,
	pub post:      Option<Box<Statement>>,
	pub body:      Vec<Statement>,
}

#[derive(Debug, Clone)]
pub struct ForRangeStmt {
	pub key:   String,
	pub value: String,
	pub expr:  Expression,
	pub body:  Vec<Statement>,
}

/// Assignment to an existing binding.
#[derive(Debug, Clone)]
pub struct AssignStmt {
	pub name:  String,
	pub value: Expression,
}

/// `name := expr`, introducing a fresh binding in the current scope.
#[derive(Debug, Clone)]
pub struct ShortAssignStmt {
	pub name:  String,
	pub value: Expression,
}

#[derive(Debug, Clone)]
pub struct DeferStmt {
	pub call: CallExpr,
}

#[derive(Debug, Clone)]
pub struct GoStmt {
	pub call: CallExpr,
}

#[derive(Debug, Clone)]
pub struct SelectStmt {
	pub cases: Vec<SelectCase>,
}

/// A single `case expr : body` arm; the guard is wrapped as a receive op.
#[derive(Debug, Clone)]
pub struct SelectCase {
	pub guard: Expression,
	pub body:  Vec<Statement>,
}

#[derive(Debug, Clone)]
pub struct PanicStmt {
	pub expr: Expression,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{lexer::Lexer, parser::Parser};

	fn parse_items(input: &'static str) -> Vec<Item> {
		let tokens = Lexer::new(input).tokenize();
		Parser::new(tokens).parse().unwrap().items
	}

	#[test]
	fn items_preserve_source_order() {
		let items = parse_items("package main\nvar a: int = 1\nfunc main() { }\nconst b: int = 2");
		assert_eq!(items.len(), 4);
		assert!(matches!(items[0], Item::Package(_)));
		assert!(matches!(items[1], Item::Var(_)));
		assert!(matches!(items[2], Item::Func(_)));
		assert!(matches!(items[3], Item::Const(_)));
	}

	#[test]
	fn var_declaration_nullability() {
		let items = parse_items("package main\nvar y: ?int = null");
		let Item::Var(var) = &items[1] else { panic!("expected a var declaration") };
		assert_eq!(var.name, "y");
		assert_eq!(var.ty.as_deref(), Some("int"));
		assert!(var.nullable);
		assert!(matches!(var.value, Some(Expression::Null)));

		let items = parse_items("var x: int = 1");
		let Item::Var(var) = &items[0] else { panic!("expected a var declaration") };
		assert!(!var.nullable);
	}

	#[test]
	fn var_without_annotation_or_value() {
		let items = parse_items("var x\nvar y = 1\nvar z: string");
		let Item::Var(x) = &items[0] else { panic!() };
		assert!(x.ty.is_none() && x.value.is_none());
		let Item::Var(y) = &items[1] else { panic!() };
		assert!(y.ty.is_none() && y.value.is_some());
		let Item::Var(z) = &items[2] else { panic!() };
		assert_eq!(z.ty.as_deref(), Some("string"));
	}

	#[test]
	fn import_forms() {
		let items = parse_items("import (\"fmt\")\nimport osalias \"os\"\nimport \"strings\"");
		let Item::Import(grouped) = &items[0] else { panic!() };
		assert_eq!(grouped.path, "fmt");
		assert!(grouped.alias.is_none());
		let Item::Import(aliased) = &items[1] else { panic!() };
		assert_eq!(aliased.path, "os");
		assert_eq!(aliased.alias.as_deref(), Some("osalias"));
		let Item::Import(plain) = &items[2] else { panic!() };
		assert_eq!(plain.path, "strings");
	}

	#[test]
	fn func_signature_parts() {
		let items = parse_items("func (s *Server) handle(req: *Request, n: int) ([]byte, error) { return }");
		let Item::Func(func) = &items[0] else { panic!() };
		assert_eq!(func.name, "handle");
		let receiver = func.receiver.as_ref().unwrap();
		assert_eq!(receiver.name, "s");
		assert_eq!(receiver.ty, "*Server");
		assert_eq!(func.params.len(), 2);
		assert_eq!(func.params[0].ty, "*Request");
		assert_eq!(func.returns, vec!["[]byte", "error"]);
	}

	#[test]
	fn func_single_bare_return_type() {
		let items = parse_items("func f() int { return 1 }\nfunc g() []byte { return }");
		let Item::Func(f) = &items[0] else { panic!() };
		assert_eq!(f.returns, vec!["int"]);
		let Item::Func(g) = &items[1] else { panic!() };
		assert_eq!(g.returns, vec!["[]byte"]);
	}

	#[test]
	fn type_declarations() {
		let items = parse_items("type Handle *Conn\ntype OptInt ?int\ntype Names []string");
		let Item::Type(handle) = &items[0] else { panic!() };
		assert_eq!(handle.ty, "*Conn");
		assert!(!handle.nullable);
		let Item::Type(opt) = &items[1] else { panic!() };
		assert!(opt.nullable);
		assert_eq!(opt.ty, "int");
		let Item::Type(names) = &items[2] else { panic!() };
		assert_eq!(names.ty, "[]string");
	}

	#[test]
	fn map_type_annotation() {
		let items = parse_items("var scores: {string}int");
		let Item::Var(var) = &items[0] else { panic!() };
		assert_eq!(var.ty.as_deref(), Some("map[string]int"));

		let items = parse_items("var conns: {string}*Conn");
		let Item::Var(var) = &items[0] else { panic!() };
		assert_eq!(var.ty.as_deref(), Some("map[string]*Conn"));
	}

	#[test]
	fn statement_dispatch_on_identifier() {
		let items = parse_items("func f() { a = 1; b := 2; g(); c.m(3); d }");
		let Item::Func(func) = &items[0] else { panic!() };
		assert_eq!(func.body.len(), 5);
		assert!(matches!(func.body[0], Statement::Assign(_)));
		assert!(matches!(func.body[1], Statement::ShortAssign(_)));
		assert!(matches!(func.body[2], Statement::Call(_)));
		assert!(matches!(func.body[3], Statement::MethodCall(_)));
		assert!(matches!(func.body[4], Statement::Expression(Expression::Identifier(_))));
	}

	#[test]
	fn if_else_chain_shape() {
		let items = parse_items("func f() { if a { b = 1 } else if c { b = 2 } else { b = 3 } }");
		let Item::Func(func) = &items[0] else { panic!() };
		let Statement::If(outer) = &func.body[0] else { panic!() };
		assert_eq!(outer.then_branch.len(), 1);
		assert_eq!(outer.else_branch.len(), 1);
		let Statement::If(inner) = &outer.else_branch[0] else { panic!("expected a nested if") };
		assert_eq!(inner.else_branch.len(), 1);
		assert!(matches!(inner.else_branch[0], Statement::Assign(_)));
	}

	#[test]
	fn select_cases_wrap_receives() {
		let items = parse_items("func f() { select { case ch : x = 1 case done : return } }");
		let Item::Func(func) = &items[0] else { panic!() };
		let Statement::Select(select) = &func.body[0] else { panic!() };
		assert_eq!(select.cases.len(), 2);
		assert!(matches!(&select.cases[0].guard, Expression::Chan { op, .. } if op == "<-"));
		assert_eq!(select.cases[0].body.len(), 1);
		assert!(matches!(select.cases[1].body[0], Statement::Return(_)));
	}

	#[test]
	fn defer_and_go_require_calls() {
		let items = parse_items("func f() { defer close(ch)\ngo worker(1, 2) }");
		let Item::Func(func) = &items[0] else { panic!() };
		let Statement::Defer(defer) = &func.body[0] else { panic!() };
		assert_eq!(defer.call.func, "close");
		let Statement::Go(go) = &func.body[1] else { panic!() };
		assert_eq!(go.call.args.len(), 2);

		let tokens = Lexer::new("func f() { defer 1 }").tokenize();
		let err = Parser::new(tokens).parse().unwrap_err();
		assert!(err.to_string().contains("expected function call after defer"));
	}

	#[test]
	fn for_parses_only_the_bodied_form() {
		let items = parse_items("func f() { for { x = 1 } }");
		let Item::Func(func) = &items[0] else { panic!() };
		let Statement::For(stmt) = &func.body[0] else { panic!() };
		assert!(stmt.init.is_none() && stmt.condition.is_none() && stmt.post.is_none());
		assert_eq!(stmt.body.len(), 1);

		let tokens = Lexer::new("func f() { for x { } }").tokenize();
		assert!(Parser::new(tokens).parse().is_err());
	}
}
