//! Converts source text into a flat token sequence.
//!
//! The lexer is a single left-to-right pass over the raw bytes, keeping a
//! 1-based line and column that always point at the next unconsumed byte.
//! Every token records the position of the first character of its lexeme.
//!
//! Lexing is total: there is no error path. A byte that starts no token is
//! skipped and remembered as a [`LexicalAnomaly`] so the driver can report
//! it, and the token stream always ends with an EOF sentinel.

mod token;

pub(crate) use token::*;

/// An unrecognized input byte, skipped during tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LexicalAnomaly {
	pub byte:   u8,
	pub line:   usize,
	pub column: usize,
}

/// A lexer for Lingo source code
pub(crate) struct Lexer<'a> {
	/// User input source code
	source:    &'a str,
	/// Raw bytes of the source, indexed by `pos`
	bytes:     &'a [u8],
	/// Points at the next unconsumed byte
	pos:       usize,
	/// 1-based line of the next unconsumed byte
	line:      usize,
	/// 1-based column of the next unconsumed byte
	column:    usize,
	/// Bytes that started no token, in source order
	anomalies: Vec<LexicalAnomaly>,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self { source, bytes: source.as_bytes(), pos: 0, line: 1, column: 1, anomalies: Vec::new() }
	}

	/// Scan all tokens from the source code. The final token is always EOF.
	pub fn tokenize(&mut self) -> Vec<Token<'a>> {
		let mut tokens = Vec::new();
		loop {
			self.skip_trivia();
			if self.at_end() {
				break;
			}
			let line = self.line;
			let column = self.column;
			let token = match self.current() {
				c if c.is_ascii_alphabetic() || c == b'_' => self.identifier_or_keyword(line, column),
				c if c.is_ascii_digit() => self.number(line, column),
				b'"' => self.string(b'"', line, column),
				b'\'' => self.string(b'\'', line, column),
				_ => match self.operator(line, column) {
					Some(token) => token,
					None => continue,
				},
			};
			tokens.push(token);
		}
		tokens.push(Token::new(TokenKind::Eof, "", self.line, self.column));
		tokens
	}

	/// Unrecognized bytes skipped so far.
	pub fn anomalies(&self) -> &[LexicalAnomaly] { &self.anomalies }

	/// Skip whitespace, line comments and (non-nesting) block comments. An
	/// unterminated block comment consumes the rest of the input.
	fn skip_trivia(&mut self) {
		while !self.at_end() {
			match self.current() {
				b' ' | b'\t' | b'\r' | b'\n' => self.advance(),
				b'/' if self.peek(1) == b'/' => {
					while !self.at_end() && self.current() != b'\n' {
						self.advance();
					}
				}
				b'/' if self.peek(1) == b'*' => {
					self.advance(); // consume '/'
					self.advance(); // consume '*'
					while !self.at_end() {
						if self.current() == b'*' && self.peek(1) == b'/' {
							self.advance();
							self.advance();
							break;
						}
						self.advance();
					}
				}
				_ => break,
			}
		}
	}

	/// Maximal run of letters, digits and underscores, then keyword lookup.
	fn identifier_or_keyword(&mut self, line: usize, column: usize) -> Token<'a> {
		let start = self.pos;
		while self.current().is_ascii_alphanumeric() || self.current() == b'_' {
			self.advance();
		}
		let lexeme = &self.source[start..self.pos];
		Token::new(TokenKind::keyword_or_ident(lexeme), lexeme, line, column)
	}

	/// Digits, with an optional fraction when a digit follows the dot. A
	/// trailing dot is left for the next token (`1.` lexes as INT DOT).
	fn number(&mut self, line: usize, column: usize) -> Token<'a> {
		let start = self.pos;
		while self.current().is_ascii_digit() {
			self.advance();
		}
		let mut kind = TokenKind::Int;
		if self.current() == b'.' && self.peek(1).is_ascii_digit() {
			kind = TokenKind::Float;
			self.advance(); // consume '.'
			while self.current().is_ascii_digit() {
				self.advance();
			}
		}
		Token::new(kind, &self.source[start..self.pos], line, column)
	}

	/// String and character literals share one rule: the lexeme is the raw
	/// text between the quotes, and a backslash consumes the next byte
	/// verbatim. Escapes are not decoded here.
	fn string(&mut self, quote: u8, line: usize, column: usize) -> Token<'a> {
		self.advance(); // opening quote
		let start = self.pos;
		while !self.at_end() && self.current() != quote {
			if self.current() == b'\\' {
				self.advance();
			}
			self.advance();
		}
		let lexeme = &self.source[start..self.pos];
		self.advance(); // closing quote
		Token::new(TokenKind::Str, lexeme, line, column)
	}

	/// Longest-match operator scan: two-character operators first, then the
	/// single-character set. Anything else is recorded and skipped.
	fn operator(&mut self, line: usize, column: usize) -> Option<Token<'a>> {
		use TokenKind::*;
		let end = (self.pos + 2).min(self.bytes.len());
		let kind = match &self.bytes[self.pos..end] {
			b"==" => Some(Eq),
			b"!=" => Some(NotEq),
			b"<=" => Some(Le),
			b">=" => Some(Ge),
			b"&&" => Some(AndAnd),
			b"||" => Some(OrOr),
			b":=" => Some(Walrus),
			b"->" => Some(Arrow),
			b"<<" => Some(Shl),
			b">>" => Some(Shr),
			_ => None,
		};
		if let Some(kind) = kind {
			let lexeme = &self.source[self.pos..self.pos + 2];
			self.advance();
			self.advance();
			return Some(Token::new(kind, lexeme, line, column));
		}
		let kind = match self.current() {
			b'+' => Plus,
			b'-' => Minus,
			b'*' => Star,
			b'/' => Slash,
			b'%' => Percent,
			b'=' => Assign,
			b'<' => Lt,
			b'>' => Gt,
			b'!' => Not,
			b'&' => Amp,
			b'|' => Pipe,
			b'^' => Caret,
			b'.' => Dot,
			b',' => Comma,
			b':' => Colon,
			b';' => Semicolon,
			b'(' => LParen,
			b')' => RParen,
			b'{' => LBrace,
			b'}' => RBrace,
			b'[' => LBracket,
			b']' => RBracket,
			b'?' => Question,
			byte => {
				self.anomalies.push(LexicalAnomaly { byte, line, column });
				self.advance();
				return None;
			}
		};
		let lexeme = &self.source[self.pos..self.pos + 1];
		self.advance();
		Some(Token::new(kind, lexeme, line, column))
	}

	fn at_end(&self) -> bool { self.pos >= self.bytes.len() }

	/// The next unconsumed byte, or NUL at end of input.
	fn current(&self) -> u8 { self.peek(0) }

	fn peek(&self, n: usize) -> u8 { self.bytes.get(self.pos + n).copied().unwrap_or(0) }

	fn advance(&mut self) {
		if self.at_end() {
			return;
		}
		if self.current() == b'\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		self.pos += 1;
	}
}
