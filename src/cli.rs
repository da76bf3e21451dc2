use std::path::PathBuf;

use palc::{Parser, Subcommand};

/// CLI arguments
#[derive(Parser)]
#[command(name = "lingo")]
pub struct Cli {
	/// Program mode
	#[command(subcommand)]
	pub mode: Mode,
}

/// Program mode
#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Compile a source file to Go
	Compile {
		/// Input source file
		#[arg(long)]
		file: PathBuf,
		/// Output path; defaults to the input with a `.go` extension
		#[arg(long)]
		out: Option<PathBuf>,
		/// Stop after type checking
		#[arg(long)]
		check: bool,
		/// Print tokens and the parsed tree along the way
		#[arg(long)]
		verbose: bool,
	},
	/// Print lexer or parser output for a source file
	Inspect {
		/// One of `lex` or `parse`
		#[arg(long)]
		cmd: String,
		/// Input source file
		#[arg(long)]
		file: PathBuf,
	},
}
