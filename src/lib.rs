//! Compiler for the Lingo language.
//!
//! Lingo is a small statically-typed imperative language with curly-brace
//! syntax, `:` type annotations, a `?` nullable-type marker and a `?:`
//! null-coalescing operator. The compiler translates one source file into
//! Go source text.
//!
//! The pipeline is linear; each stage fully consumes its input before the
//! next begins:
//!
//! ```markdown
//! source text -> tokens -> syntax tree -> checked tree -> Go text
//! ```

//! ## Lexing
//!
//! The lexer walks the raw bytes once, tracking line and column, and
//! produces a flat token sequence terminated by an EOF sentinel. It never
//! fails: bytes it does not recognize are skipped and recorded as
//! anomalies.

//! ## Parsing
//!
//! The parser is recursive descent over the token vector, with one method
//! per precedence level for expressions. It stops at the first structural
//! mismatch and reports the expected and actual token kinds.

//! ## Checking
//!
//! The checker walks the tree with a stack of scopes mapping names to
//! type-strings and nullability. Types are compared textually; the first
//! violation aborts the walk.

//! ## Emitting
//!
//! The emitter serializes the checked tree as Go text: a fixed `package
//! main` preamble, a collected import block, then the declarations in
//! source order. Null-coalescing expressions are lowered to immediately
//! invoked closures.

pub mod cli;
pub mod parser;
pub mod statement;

mod checker;
mod emitter;
mod error;
mod lexer;
mod lingo;
mod scope;

pub use error::{checker::TypeError, parser::{ParseError, ParseErrorType}, CompileError, Result};
pub use lingo::Lingo;
