use std::{fs, path::PathBuf};

use lingo::Lingo;

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

#[test]
fn compile_example_file() {
	let lingo = Lingo;
	let out = std::env::temp_dir().join("lingo_hello_compile.go");
	lingo.compile_file(&fixture("hello.lingo"), Some(&out), false, false).unwrap();

	let emitted = fs::read_to_string(&out).unwrap();
	assert!(emitted.starts_with("package main\n\n"));
	assert!(emitted.contains("import (\n\t\"fmt\"\n)"));
	assert!(emitted.contains("const greeting string = \"hello\""));
	assert!(emitted.contains("func add(a int, b int) int {"));
	assert!(emitted.contains("\treturn (a + b)\n"));
	assert!(emitted.contains(
		"message := func() interface{} { if label == nil { return greeting }; return label }()"
	));
	assert!(emitted.contains("\tfmt.Println(message)\n"));

	fs::remove_file(&out).unwrap();
}

#[test]
fn check_only_does_not_write_output() {
	let lingo = Lingo;
	let out = std::env::temp_dir().join("lingo_hello_check.go");
	let _ = fs::remove_file(&out);
	lingo.compile_file(&fixture("hello.lingo"), Some(&out), true, false).unwrap();
	assert!(!out.exists());
}

#[test]
fn compile_var_declaration() {
	let output = Lingo.compile("package main\nfunc main() { var x: int = 42 }").unwrap();
	assert!(output.contains("var x int = 42"), "{output}");
}

#[test]
fn compile_nullable_var() {
	let output = Lingo.compile("package main\nvar y: ?int = null").unwrap();
	assert!(output.contains("var y int = nil"), "{output}");
}

#[test]
fn null_is_assignable_to_plain_annotations() {
	assert!(Lingo.check("package main\nvar y: int = null").is_ok());
}

#[test]
fn type_mismatch_names_the_variable() {
	let err = Lingo.check("package main\nfunc f() { var a: int = 1; var b: bool = a }").unwrap_err();
	let message = err.to_string();
	assert!(message.starts_with("type error:"), "{message}");
	assert!(message.contains("type mismatch for var b"), "{message}");
}

#[test]
fn undefined_variable_is_reported() {
	let err = Lingo.check("package main\nfunc f() { z = 1 }").unwrap_err();
	assert!(err.to_string().contains("undefined variable: z"), "{err}");
}

#[test]
fn null_coalesce_compiles_to_a_closure() {
	let output = Lingo
		.compile("package main\nfunc f() { var a: ?int = null; var b: int = a ?: 0 }")
		.unwrap();
	assert!(
		output.contains("var b int = func() interface{} { if a == nil { return 0 }; return a }()"),
		"{output}",
	);
}

#[test]
fn unterminated_comment_ends_in_a_parse_error() {
	let err = Lingo.check("package main\nfunc f() /* unterminated").unwrap_err();
	let message = err.to_string();
	assert!(message.starts_with("parse error:"), "{message}");
	assert!(message.contains("got EOF"), "{message}");
}

#[test]
fn missing_input_file_fails() {
	let err = Lingo.compile_file(&fixture("does_not_exist.lingo"), None, false, false).unwrap_err();
	assert!(err.to_string().starts_with("internal error:"), "{err}");
}
