use lingo::cli::*;
use palc::Parser;

fn main() {
	let lingo = lingo::Lingo;

	let result = match Cli::parse().mode {
		Mode::Compile { file, out, check, verbose } => {
			lingo.compile_file(&file, out.as_deref(), check, verbose)
		}
		Mode::Inspect { cmd, file } => match cmd.as_str() {
			"lex" => lingo.lex_file(&file),
			"parse" => lingo.parse_file(&file),
			other => {
				eprintln!("Unknown inspect command: {other}");
				std::process::exit(1);
			}
		},
	};

	if let Err(e) = result {
		eprintln!("{e}");
		std::process::exit(1);
	}
}
