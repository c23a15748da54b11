//! Build script to embed the default help text
//!
//! Reads the help file and generates Rust source code with a string constant.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_text_const(
        "data/help.txt",
        &Path::new(&out_dir).join("help.rs"),
        "HELP_TEXT",
        "Default how-to-play text",
    );

    // Rebuild if the help text changes
    println!("cargo:rerun-if-changed=data/help.txt");
}

fn generate_text_const(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let line_count = content.lines().count();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated help text").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &str = {content:?};").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of lines in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_LINES: usize = {line_count};").unwrap();
}
