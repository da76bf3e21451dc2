//! Recursive-descent parser from the token sequence to a [`Program`].
//!
//! The parser owns the token vector and a cursor, stops at the first
//! structural mismatch, and reports the expected and actual token kinds.
//!
//! Expression parsing is precedence climbing, one method per level, all
//! binary operators left-associative:
//!
//! |Level|Operators|
//! --|--
//! 1|`\|\|`
//! 2|`&&`
//! 3|`==` `!=`
//! 4|`<` `<=` `>` `>=`
//! 5|`\|` (bitwise)
//! 6|`^`
//! 7|`&` (bitwise)
//! 8|`<<` `>>`
//! 9|`+` `-`
//! 10|`*` `/` `%`
//! 11|unary prefix `!` `-` `+` `&` `*`
//! 12|postfix `[expr]` `.ident` `?` `?:`
//!
//! The bitwise levels peek one token ahead so that `\|\|`/`&&` spelled as
//! two adjacent single characters never bind as bitwise operators.

pub mod expression;

use TokenKind::*;

use crate::{
	error::parser::{ParseError, ParseErrorType},
	lexer::{Token, TokenKind},
	parser::expression::{CallExpr, Expression, MethodCall},
	statement::{
		AssignStmt, ConstDecl, DeferStmt, ForStmt, FuncDecl, GoStmt, IfStmt, ImportDecl, Item, PackageDecl,
		PanicStmt, Param, Program, ReturnStmt, SelectCase, SelectStmt, ShortAssignStmt, Statement, TypeDecl,
		VarDecl,
	},
};

/// A parser for the Lingo token stream.
pub(crate) struct Parser<'a> {
	tokens: Vec<Token<'a>>,
	cursor: usize,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens, cursor: 0 } }

	/// Parse the whole token stream into a program.
	pub fn parse(mut self) -> Result<Program, ParseError> {
		let mut items = Vec::new();
		while !self.is(Eof) {
			items.push(self.parse_top_level()?);
		}
		Ok(Program { items })
	}

	fn parse_top_level(&mut self) -> Result<Item, ParseError> {
		match self.peek().kind {
			Package => self.parse_package().map(Item::Package),
			Import => self.parse_import().map(Item::Import),
			Func => self.parse_func().map(Item::Func),
			Type => self.parse_type_decl().map(Item::Type),
			Var => self.parse_var().map(Item::Var),
			Const => self.parse_const().map(Item::Const),
			kind => Err(self.error(ParseErrorType::TopLevel(kind.to_string()))),
		}
	}

	fn parse_package(&mut self) -> Result<PackageDecl, ParseError> {
		self.expect(Package)?;
		let name = self.expect(Ident)?.lexeme.to_string();
		Ok(PackageDecl { name })
	}

	/// `import ( "path" )` or `import [alias] "path"`.
	fn parse_import(&mut self) -> Result<ImportDecl, ParseError> {
		self.expect(Import)?;
		if self.is(LParen) {
			self.advance();
			let path = self.expect(Str)?.lexeme.to_string();
			self.expect(RParen)?;
			return Ok(ImportDecl { path, alias: None });
		}
		let alias = if self.is(Ident) { Some(self.advance().lexeme.to_string()) } else { None };
		let path = self.expect(Str)?.lexeme.to_string();
		Ok(ImportDecl { path, alias })
	}

	/// `func [ ( recv RecvType ) ] name ( params ) [ returns ] { block }`.
	fn parse_func(&mut self) -> Result<FuncDecl, ParseError> {
		self.expect(Func)?;

		let receiver = if self.is(LParen) {
			self.advance();
			let name = self.expect(Ident)?.lexeme.to_string();
			let mut ty = String::new();
			if self.is(Star) {
				self.advance();
				ty.push('*');
			}
			ty.push_str(self.expect(Ident)?.lexeme);
			self.expect(RParen)?;
			Some(Param { name, ty })
		} else {
			None
		};

		let name = self.expect(Ident)?.lexeme.to_string();
		self.expect(LParen)?;
		let params = self.parse_param_list()?;
		self.expect(RParen)?;
		let returns = self.parse_return_types()?;

		self.expect(LBrace)?;
		let body = self.parse_block()?;
		self.expect(RBrace)?;

		Ok(FuncDecl { name, receiver, params, returns, body })
	}

	fn parse_param_list(&mut self) -> Result<Vec<Param>, ParseError> {
		let mut params = Vec::new();
		while !self.is(RParen) && !self.is(Eof) {
			let name = self.expect(Ident)?.lexeme.to_string();
			self.expect(Colon)?;
			let ty = self.parse_simple_type()?;
			params.push(Param { name, ty });
			if self.is(Comma) {
				self.advance();
			}
		}
		Ok(params)
	}

	/// Either a single bare type or a parenthesized comma-separated list.
	fn parse_return_types(&mut self) -> Result<Vec<String>, ParseError> {
		let mut returns = Vec::new();
		if self.is(LParen) {
			self.advance();
			while !self.is(RParen) && !self.is(Eof) {
				returns.push(self.parse_simple_type()?);
				if self.is(Comma) {
					self.advance();
				}
			}
			self.expect(RParen)?;
		} else if self.is(Ident) || self.is(Star) || self.is(LBracket) {
			returns.push(self.parse_simple_type()?);
		}
		Ok(returns)
	}

	/// Type form `[*] [[]] Name`, assembled exactly as it will be emitted.
	fn parse_simple_type(&mut self) -> Result<String, ParseError> {
		let mut ty = String::new();
		if self.is(Star) {
			self.advance();
			ty.push('*');
		}
		if self.is(LBracket) {
			self.advance();
			self.expect(RBracket)?;
			ty.push_str("[]");
		}
		ty.push_str(self.expect(Ident)?.lexeme);
		Ok(ty)
	}

	/// Annotation form: a simple type, or the map form `{ Key } [*] Value`
	/// which assembles to `map[Key]Value`.
	fn parse_type_annotation(&mut self) -> Result<String, ParseError> {
		let mut ty = String::new();
		if self.is(Star) {
			self.advance();
			ty.push('*');
		}
		if self.is(LBracket) {
			self.advance();
			self.expect(RBracket)?;
			ty.push_str("[]");
		}
		if self.is(LBrace) {
			self.advance();
			let key = self.expect(Ident)?.lexeme.to_string();
			self.expect(RBrace)?;
			ty.push_str("map[");
			ty.push_str(&key);
			ty.push(']');
			if self.is(Star) {
				self.advance();
				ty.push('*');
			}
			ty.push_str(self.expect(Ident)?.lexeme);
		} else {
			ty.push_str(self.expect(Ident)?.lexeme);
		}
		Ok(ty)
	}

	/// `type Name [?] Type`.
	fn parse_type_decl(&mut self) -> Result<TypeDecl, ParseError> {
		self.expect(Type)?;
		let name = self.expect(Ident)?.lexeme.to_string();
		let nullable = if self.is(Question) {
			self.advance();
			true
		} else {
			false
		};
		let ty = self.parse_simple_type()?;
		Ok(TypeDecl { name, ty, nullable })
	}

	/// `var name [ : [?] Type ] [ = expr ]`.
	fn parse_var(&mut self) -> Result<VarDecl, ParseError> {
		self.expect(Var)?;
		let name = self.expect(Ident)?.lexeme.to_string();

		let mut nullable = false;
		let ty = if self.is(Colon) {
			self.advance();
			if self.is(Question) {
				nullable = true;
				self.advance();
			}
			Some(self.parse_type_annotation()?)
		} else {
			None
		};

		let value = if self.is(Assign) {
			self.advance();
			Some(self.parse_expr()?)
		} else {
			None
		};

		Ok(VarDecl { name, ty, nullable, value })
	}

	/// `const name [ : Type ] = expr`; the initializer is mandatory.
	fn parse_const(&mut self) -> Result<ConstDecl, ParseError> {
		self.expect(Const)?;
		let name = self.expect(Ident)?.lexeme.to_string();
		let ty = if self.is(Colon) {
			self.advance();
			Some(self.parse_type_annotation()?)
		} else {
			None
		};
		self.expect(Assign)?;
		let value = self.parse_expr()?;
		Ok(ConstDecl { name, ty, value })
	}

	/// Statements until the closing brace. Stray `;` separators are skipped.
	fn parse_block(&mut self) -> Result<Vec<Statement>, ParseError> {
		let mut statements = Vec::new();
		while !self.is(RBrace) && !self.is(Eof) {
			if self.is(Semicolon) {
				self.advance();
				continue;
			}
			statements.push(self.parse_statement()?);
		}
		Ok(statements)
	}

	fn parse_statement(&mut self) -> Result<Statement, ParseError> {
		match self.peek().kind {
			Var => self.parse_var().map(Statement::Var),
			Const => self.parse_const().map(Statement::Const),
			Return => self.parse_return().map(Statement::Return),
			If => self.parse_if().map(Statement::If),
			For => self.parse_for().map(Statement::For),
			Defer => self.parse_defer().map(Statement::Defer),
			Go => self.parse_go().map(Statement::Go),
			Select => self.parse_select().map(Statement::Select),
			Panic => self.parse_panic().map(Statement::Panic),
			Ident => self.parse_ident_statement(),
			kind => Err(self.error(ParseErrorType::Statement(kind.to_string()))),
		}
	}

	fn parse_return(&mut self) -> Result<ReturnStmt, ParseError> {
		self.expect(Return)?;
		let mut values = Vec::new();
		if !self.is(RBrace) && !self.is(Semicolon) && !self.is(Eof) {
			values.push(self.parse_expr()?);
			while self.is(Comma) {
				self.advance();
				values.push(self.parse_expr()?);
			}
		}
		Ok(ReturnStmt { values })
	}

	fn parse_if(&mut self) -> Result<IfStmt, ParseError> {
		self.expect(If)?;
		let condition = self.parse_expr()?;
		self.expect(LBrace)?;
		let then_branch = self.parse_block()?;
		self.expect(RBrace)?;

		let mut else_branch = Vec::new();
		if self.is(Else) {
			self.advance();
			if self.is(If) {
				// An else-if chain nests as a single-statement else block.
				else_branch.push(Statement::If(self.parse_if()?));
			} else {
				self.expect(LBrace)?;
				else_branch = self.parse_block()?;
				self.expect(RBrace)?;
			}
		}

		Ok(IfStmt { condition, then_branch, else_branch })
	}

	/// Only the bodied `for { … }` form; clause slots stay empty.
	fn parse_for(&mut self) -> Result<ForStmt, ParseError> {
		self.expect(For)?;
		self.expect(LBrace)?;
		let body = self.parse_block()?;
		self.expect(RBrace)?;
		Ok(ForStmt { init: None, condition: None, post: None, body })
	}

	fn parse_defer(&mut self) -> Result<DeferStmt, ParseError> {
		self.expect(Defer)?;
		let call = self.parse_call_required("defer")?;
		Ok(DeferStmt { call })
	}

	fn parse_go(&mut self) -> Result<GoStmt, ParseError> {
		self.expect(Go)?;
		let call = self.parse_call_required("go")?;
		Ok(GoStmt { call })
	}

	/// `defer` and `go` only accept an immediate function call.
	fn parse_call_required(&mut self, keyword: &'static str) -> Result<CallExpr, ParseError> {
		if !self.is(Ident) {
			return Err(self.error(ParseErrorType::CallRequired(keyword)));
		}
		let func = self.advance().lexeme.to_string();
		self.expect(LParen)?;
		let args = self.parse_arg_list()?;
		self.expect(RParen)?;
		Ok(CallExpr { func, args })
	}

	fn parse_select(&mut self) -> Result<SelectStmt, ParseError> {
		self.expect(Select)?;
		self.expect(LBrace)?;
		let mut cases = Vec::new();
		while self.is(Case) {
			self.advance();
			let expr = self.parse_expr()?;
			let guard = Expression::Chan { op: "<-".to_string(), expr: expr.boxed() };
			self.expect(Colon)?;
			let body = self.parse_case_block()?;
			cases.push(SelectCase { guard, body });
		}
		self.expect(RBrace)?;
		Ok(SelectStmt { cases })
	}

	/// A select case body runs until the next `case` or the closing brace.
	fn parse_case_block(&mut self) -> Result<Vec<Statement>, ParseError> {
		let mut statements = Vec::new();
		while !self.is(Case) && !self.is(RBrace) && !self.is(Eof) {
			if self.is(Semicolon) {
				self.advance();
				continue;
			}
			statements.push(self.parse_statement()?);
		}
		Ok(statements)
	}

	fn parse_panic(&mut self) -> Result<PanicStmt, ParseError> {
		self.expect(Panic)?;
		self.expect(LParen)?;
		let expr = self.parse_expr()?;
		self.expect(RParen)?;
		Ok(PanicStmt { expr })
	}

	/// An identifier-headed statement is disambiguated by the next token:
	/// `=` assign, `:=` short assign, `(` call, `.` method call, otherwise
	/// a bare identifier expression-statement.
	fn parse_ident_statement(&mut self) -> Result<Statement, ParseError> {
		let name = self.expect(Ident)?.lexeme.to_string();
		match self.peek().kind {
			Assign => {
				self.advance();
				let value = self.parse_expr()?;
				Ok(Statement::Assign(AssignStmt { name, value }))
			}
			Walrus => {
				self.advance();
				let value = self.parse_expr()?;
				Ok(Statement::ShortAssign(ShortAssignStmt { name, value }))
			}
			LParen => {
				self.advance();
				let args = self.parse_arg_list()?;
				self.expect(RParen)?;
				Ok(Statement::Call(CallExpr { func: name, args }))
			}
			Dot => {
				self.advance();
				let method = self.expect(Ident)?.lexeme.to_string();
				self.expect(LParen)?;
				let args = self.parse_arg_list()?;
				self.expect(RParen)?;
				Ok(Statement::MethodCall(MethodCall { receiver: name, method, args }))
			}
			_ => Ok(Statement::Expression(Expression::Identifier(name))),
		}
	}

	fn parse_arg_list(&mut self) -> Result<Vec<Expression>, ParseError> {
		let mut args = Vec::new();
		while !self.is(RParen) && !self.is(Eof) {
			args.push(self.parse_expr()?);
			if self.is(Comma) {
				self.advance();
			}
		}
		Ok(args)
	}

	/// Parse a single expression; test entry point.
	#[cfg(test)]
	pub(crate) fn parse_expression(mut self) -> Result<Expression, ParseError> { self.parse_expr() }

	fn parse_expr(&mut self) -> Result<Expression, ParseError> { self.parse_logical_or() }

	fn parse_logical_or(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_logical_and()?;
		while self.is(OrOr) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_logical_and()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_logical_and(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_equality()?;
		while self.is(AndAnd) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_equality()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_equality(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_comparison()?;
		while self.is(Eq) || self.is(NotEq) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_comparison()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_bitwise_or()?;
		while self.is(Lt) || self.is(Le) || self.is(Gt) || self.is(Ge) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_bitwise_or()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_bitwise_or(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_bitwise_xor()?;
		while self.is(Pipe) && !self.peek_is(Pipe) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_bitwise_xor()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_bitwise_xor(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_bitwise_and()?;
		while self.is(Caret) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_bitwise_and()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_bitwise_and(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_shift()?;
		while self.is(Amp) && !self.peek_is(Amp) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_shift()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_shift(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_additive()?;
		while self.is(Shl) || self.is(Shr) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_additive()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_additive(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_multiplicative()?;
		while self.is(Plus) || self.is(Minus) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_multiplicative()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_unary()?;
		while self.is(Star) || self.is(Slash) || self.is(Percent) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_unary()?;
			left = Expression::Binary { left: left.boxed(), op, right: right.boxed() };
		}
		Ok(left)
	}

	fn parse_unary(&mut self) -> Result<Expression, ParseError> {
		if matches!(self.peek().kind, Not | Minus | Plus | Amp | Star) {
			let op = self.advance().lexeme.to_string();
			let right = self.parse_unary()?;
			return Ok(Expression::Unary { op, right: right.boxed() });
		}
		self.parse_postfix()
	}

	/// Postfix forms: indexing, field access (a `"."` binary node), the `?`
	/// nullable marker, and `?:` with its mandatory default.
	fn parse_postfix(&mut self) -> Result<Expression, ParseError> {
		let mut left = self.parse_primary()?;
		loop {
			match self.peek().kind {
				LBracket => {
					self.advance();
					let index = self.parse_expr()?;
					self.expect(RBracket)?;
					left = Expression::Index { expr: left.boxed(), index: index.boxed() };
				}
				Dot => {
					self.advance();
					let field = self.expect(Ident)?.lexeme.to_string();
					left = Expression::Binary {
						left:  left.boxed(),
						op:    ".".to_string(),
						right: Expression::Identifier(field).boxed(),
					};
				}
				Question => {
					self.advance();
					if self.is(Colon) {
						self.advance();
						let default = self.parse_expr()?;
						left = Expression::NullCheck { expr: left.boxed(), default: default.boxed() };
					} else {
						left = Expression::Nullable(left.boxed());
					}
				}
				_ => break,
			}
		}
		Ok(left)
	}

	fn parse_primary(&mut self) -> Result<Expression, ParseError> {
		match self.peek().kind {
			Int => Ok(Expression::Int(self.advance().lexeme.to_string())),
			Float => Ok(Expression::Float(self.advance().lexeme.to_string())),
			Str => Ok(Expression::Str(self.advance().lexeme.to_string())),
			Bool => Ok(Expression::Bool(self.advance().lexeme == "true")),
			Null => {
				self.advance();
				Ok(Expression::Null)
			}
			Ident => {
				let name = self.advance().lexeme.to_string();
				if self.is(LParen) {
					self.advance();
					let args = self.parse_arg_list()?;
					self.expect(RParen)?;
					return Ok(Expression::Call(CallExpr { func: name, args }));
				}
				Ok(Expression::Identifier(name))
			}
			LParen => {
				self.advance();
				let expr = self.parse_expr()?;
				self.expect(RParen)?;
				Ok(expr)
			}
			LBracket => self.parse_array_or_slice(),
			LBrace => self.parse_map_literal(),
			Recover => {
				self.advance();
				Ok(Expression::Recover)
			}
			kind => Err(self.error(ParseErrorType::Primary(kind.to_string()))),
		}
	}

	/// `[]T` is an empty typed array literal; any other leading `[` opens a
	/// bracketed element list. The two forms overlap on the bracket.
	fn parse_array_or_slice(&mut self) -> Result<Expression, ParseError> {
		self.expect(LBracket)?;
		if self.is(RBracket) {
			self.advance();
			let elem_type = self.expect(Ident)?.lexeme.to_string();
			return Ok(Expression::Array { elem_type: Some(elem_type), elements: Vec::new() });
		}
		let mut elements = Vec::new();
		while !self.is(RBracket) && !self.is(Eof) {
			elements.push(self.parse_expr()?);
			if self.is(Comma) {
				self.advance();
			}
		}
		self.expect(RBracket)?;
		Ok(Expression::Array { elem_type: None, elements })
	}

	/// `{ key : value, … }` with identifier or string keys.
	fn parse_map_literal(&mut self) -> Result<Expression, ParseError> {
		self.expect(LBrace)?;
		let mut pairs = Vec::new();
		while !self.is(RBrace) && !self.is(Eof) {
			let key = self.advance().lexeme.to_string();
			self.expect(Colon)?;
			let value = self.parse_expr()?;
			pairs.push((key, value));
			if self.is(Comma) {
				self.advance();
			}
		}
		self.expect(RBrace)?;
		Ok(Expression::Map { pairs })
	}

	/// Peek at the current token.
	fn peek(&self) -> Token<'a> {
		match self.tokens.get(self.cursor) {
			Some(&token) => token,
			None => Token::new(Eof, "", 0, 0),
		}
	}

	/// Peek one token past the current one.
	fn peek_next(&self) -> Token<'a> {
		match self.tokens.get(self.cursor + 1) {
			Some(&token) => token,
			None => Token::new(Eof, "", 0, 0),
		}
	}

	fn is(&self, kind: TokenKind) -> bool { self.peek().kind == kind }

	fn peek_is(&self, kind: TokenKind) -> bool { self.peek_next().kind == kind }

	/// Return the current token and advance past it.
	fn advance(&mut self) -> Token<'a> {
		let token = self.peek();
		if self.cursor < self.tokens.len() {
			self.cursor += 1;
		}
		token
	}

	/// Advance past the current token if it has the wanted kind, error
	/// naming both kinds otherwise.
	fn expect(&mut self, want: TokenKind) -> Result<Token<'a>, ParseError> {
		let token = self.peek();
		if token.kind == want {
			Ok(self.advance())
		} else {
			Err(ParseError::new(
				token.line,
				ParseErrorType::Expected { want: want.to_string(), got: token.kind.to_string() },
			))
		}
	}

	fn error(&self, kind: ParseErrorType) -> ParseError { ParseError::new(self.peek().line, kind) }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::Lexer;

	fn parse(input: &'static str, expected: &str) {
		let tokens = Lexer::new(input).tokenize();
		let expr = Parser::new(tokens).parse_expression().unwrap();
		assert_eq!(expr.to_string(), expected);
	}

	fn parse_program(input: &'static str) -> Result<Program, ParseError> {
		let tokens = Lexer::new(input).tokenize();
		Parser::new(tokens).parse()
	}

	#[test]
	fn parse_precedence() {
		parse("1 + 2 * 3", "(+ 1 (* 2 3))");
		parse("1 * 2 + 3", "(+ (* 1 2) 3)");
		parse("1 + 2 - 3", "(- (+ 1 2) 3)");
		parse("10 % 3 / 2", "(/ (% 10 3) 2)");
		parse("1 << 2 + 3", "(<< 1 (+ 2 3))");
		parse("a & b << 2", "(& a (<< b 2))");
		parse("a ^ b & c", "(^ a (& b c))");
		parse("a | b ^ c", "(| a (^ b c))");
		parse("a < b | c", "(< a (| b c))");
		parse("a == b < c", "(== a (< b c))");
		parse("a && b == c", "(&& a (== b c))");
		parse("a || b && c", "(|| a (&& b c))");
	}

	#[test]
	fn parse_left_associativity() {
		parse("1 - 2 - 3", "(- (- 1 2) 3)");
		parse("a && b && c", "(&& (&& a b) c)");
		parse("a & b & c", "(& (& a b) c)");
		parse("1 << 2 >> 3", "(>> (<< 1 2) 3)");
	}

	#[test]
	fn parse_unary() {
		parse("-1", "(- 1)");
		parse("!ok", "(! ok)");
		parse("!!ok", "(! (! ok))");
		parse("-x * +y", "(* (- x) (+ y))");
		parse("&x", "(& x)");
		parse("*p", "(* p)");
		parse("*p + 1", "(+ (* p) 1)");
	}

	#[test]
	fn parse_grouping() {
		parse("(1 + 2) * 3", "(* (+ 1 2) 3)");
		parse("1 * (2 + 3)", "(* 1 (+ 2 3))");
	}

	#[test]
	fn parse_literals() {
		parse("42", "42");
		parse("3.14", "3.14");
		parse("\"hi\"", "\"hi\"");
		parse("true", "true");
		parse("false", "false");
		parse("null", "null");
	}

	#[test]
	fn parse_postfix_forms() {
		parse("xs[0]", "(index xs 0)");
		parse("xs[i + 1]", "(index xs (+ i 1))");
		parse("a.b", "(. a b)");
		parse("a.b.c", "(. (. a b) c)");
		parse("a.b[0]", "(index (. a b) 0)");
		parse("a?", "(? a)");
		parse("a ?: 0", "(?: a 0)");
		parse("a.b ?: c", "(?: (. a b) c)");
	}

	#[test]
	fn parse_calls() {
		parse("f()", "(call f)");
		parse("f(1, 2)", "(call f 1 2)");
		parse("f(g(x), 1 + 2)", "(call f (call g x) (+ 1 2))");
		parse("recover", "(recover)");
	}

	#[test]
	fn parse_array_and_map_literals() {
		parse("[]int", "([]int)");
		parse("[1, 2, 3]", "([] 1 2 3)");
		parse("{a: 1, b: 2}", "(map (a 1) (b 2))");
		parse("{\"k\": v}", "(map (k v))");
	}

	#[test]
	fn null_coalesce_binds_the_postfix_chain() {
		parse("a ?: b ?: c", "(?: a (?: b c))");
		parse("f(x) ?: 0", "(?: (call f x) 0)");
	}

	#[test]
	fn program_item_counts() {
		let program = parse_program("package main\nfunc main() { var x: int = 42 }").unwrap();
		assert_eq!(program.items.len(), 2);

		let program = parse_program("package main\nimport (\"fmt\")\nvar a: int = 1\nfunc f() { }").unwrap();
		assert_eq!(program.items.len(), 4);
	}

	#[test]
	fn unexpected_top_level_token() {
		let err = parse_program("42").unwrap_err();
		assert!(err.to_string().contains("unexpected token at top level: INT"), "{err}");
	}

	#[test]
	fn error_names_expected_and_actual_kinds() {
		let err = parse_program("package main\nfunc f( /* unterminated").unwrap_err();
		let message = err.to_string();
		assert!(message.contains("expected RPAREN, got EOF"), "{message}");
	}

	#[test]
	fn unterminated_comment_truncates_the_stream() {
		let err = parse_program("package main\nfunc f() /* unterminated").unwrap_err();
		assert!(err.to_string().contains("got EOF"), "{err}");
	}

	#[test]
	fn error_carries_the_line() {
		let err = parse_program("package main\nfunc f(").unwrap_err();
		assert!(err.to_string().starts_with("line 2:"), "{err}");
	}
}
