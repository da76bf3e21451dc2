use std::{fs, path::Path};

use anyhow::Context;

use crate::{checker::Checker, emitter::Emitter, lexer::Lexer, parser::Parser, Result};

/// Pipeline facade: source text in, Go text out.
///
/// Every entry point runs the same linear pipeline and returns at the
/// first error; the error's `Display` form carries its stage prefix.
pub struct Lingo;

impl Lingo {
	/// Compile a source file and write the Go output.
	///
	/// The output path defaults to the input path with its extension
	/// replaced by `.go`. With `check_only` the pipeline stops after the
	/// type checker; with `verbose` the token stream (plus any skipped
	/// bytes) and the parsed tree are printed along the way.
	pub fn compile_file(&self, path: &Path, out: Option<&Path>, check_only: bool, verbose: bool) -> Result<()> {
		let source = fs::read_to_string(path).context("Failed to read source file")?;

		let mut lexer = Lexer::new(&source);
		let tokens = lexer.tokenize();
		if verbose {
			for token in &tokens {
				println!("{}: {:?}", token.kind, token.lexeme);
			}
			for anomaly in lexer.anomalies() {
				eprintln!(
					"skipped byte 0x{:02x} at line {}, column {}",
					anomaly.byte, anomaly.line, anomaly.column
				);
			}
		}

		let program = Parser::new(tokens).parse()?;
		if verbose {
			println!("{program:#?}");
		}

		Checker::new().check(&program)?;
		if check_only {
			println!("Type checking passed");
			return Ok(());
		}

		let code = Emitter::new().emit(&program);
		let out_path = match out {
			Some(out) => out.to_path_buf(),
			None => path.with_extension("go"),
		};
		fs::write(&out_path, code).context("Failed to write output file")?;
		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			fs::set_permissions(&out_path, fs::Permissions::from_mode(0o644))
				.context("Failed to set output permissions")?;
		}
		println!("Compiled {} -> {}", path.display(), out_path.display());
		Ok(())
	}

	/// Compile source text to Go text.
	pub fn compile(&self, source: &str) -> Result<String> {
		let mut lexer = Lexer::new(source);
		let program = Parser::new(lexer.tokenize()).parse()?;
		Checker::new().check(&program)?;
		Ok(Emitter::new().emit(&program))
	}

	/// Run the pipeline up to and including the type checker.
	pub fn check(&self, source: &str) -> Result<()> {
		let mut lexer = Lexer::new(source);
		let program = Parser::new(lexer.tokenize()).parse()?;
		Checker::new().check(&program)?;
		Ok(())
	}

	/// Print the token stream of a source file, one `KIND: "lexeme"` line
	/// per token.
	pub fn lex_file(&self, path: &Path) -> Result<()> {
		let source = fs::read_to_string(path).context("Failed to read source file")?;
		let mut lexer = Lexer::new(&source);
		for token in lexer.tokenize() {
			println!("{}: {:?}", token.kind, token.lexeme);
		}
		Ok(())
	}

	/// Parse a source file and report its top-level item count.
	pub fn parse_file(&self, path: &Path) -> Result<()> {
		let source = fs::read_to_string(path).context("Failed to read source file")?;
		let mut lexer = Lexer::new(&source);
		let program = Parser::new(lexer.tokenize()).parse()?;
		println!("Parsed {} top-level items", program.items.len());
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compile_small_program() {
		let lingo = Lingo;
		let output = lingo.compile("package main\nfunc main() { var x: int = 42 }").unwrap();
		assert!(output.starts_with("package main\n\n"));
		assert!(output.contains("var x int = 42"));
	}

	#[test]
	fn errors_carry_a_stage_prefix() {
		let lingo = Lingo;
		let err = lingo.compile("package main\nfunc f(").unwrap_err();
		assert!(err.to_string().starts_with("parse error:"), "{err}");

		let err = lingo.check("package main\nfunc f() { z = 1 }").unwrap_err();
		assert!(err.to_string().starts_with("type error:"), "{err}");
		assert!(err.to_string().contains("undefined variable: z"), "{err}");
	}

	#[test]
	fn check_stops_before_emission() {
		let lingo = Lingo;
		assert!(lingo.check("package main\nvar y: int = null").is_ok());
	}
}
