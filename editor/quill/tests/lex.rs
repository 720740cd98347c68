//! End-to-end `quill lex` runs over files on disk.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use std::io::Write;

use pretty_assertions::assert_eq;
use quill::commands::lex_file;
use quill::config::{parse_lex_options, LexOptions};
use quill::CliError;
use quill_arena::REGION_DEFAULT_CAPACITY;
use tempfile::NamedTempFile;

const SOURCE: &str = "#include <stdio.h>\n\
int main(void) {\n    printf(\"hi\\n\"); // greet\n    return 0;\n}\n";

fn write_source(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn kinds(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(1)
        .take_while(|line| line.starts_with("  "))
        .map(|line| {
            line.split("  @")
                .next()
                .unwrap()
                .trim()
                .rsplit_once(' ')
                .unwrap()
                .0
                .trim()
                .to_string()
        })
        .collect()
}

#[test]
fn lexes_small_c_file() {
    let file = write_source(SOURCE.as_bytes());
    let output = lex_file(&LexOptions::new(file.path())).unwrap();

    let header = output.lines().next().unwrap();
    assert!(header.ends_with("(22 tokens):"), "{header}");
    assert_eq!(
        kinds(&output),
        [
            "preprocessor directive",
            "operator",
            "symbol",
            "operator",
            "symbol",
            "operator",
            "keyword",
            "symbol",
            "open paren",
            "keyword",
            "close paren",
            "open curly",
            "symbol",
            "open paren",
            "string",
            "close paren",
            "semicolon",
            "comment",
            "keyword",
            "number",
            "semicolon",
            "close curly",
        ]
    );
}

#[test]
fn layout_options_change_positions() {
    let file = write_source(b"a\nb");
    let args = vec![
        file.path().display().to_string(),
        "--font-size=10".to_string(),
        "--line-spacing=2".to_string(),
        "--advance=3".to_string(),
    ];
    let output = lex_file(&parse_lex_options(&args).unwrap()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[1].contains("@ (0.0, 0.0)"), "{}", lines[1]);
    assert!(lines[2].contains("@ (0.0, -20.0)"), "{}", lines[2]);
}

#[test]
fn no_metrics_keeps_x_at_zero() {
    let file = write_source(b"ab cd");
    let mut options = LexOptions::new(file.path());
    options.no_metrics = true;
    let output = lex_file(&options).unwrap();
    assert!(output.lines().skip(1).all(|line| line.contains("@ (0.0, 0.0)")), "{output}");
}

#[test]
fn stats_are_appended_on_request() {
    let file = write_source(b"x;");
    let mut options = LexOptions::new(file.path());
    options.stats = true;
    let output = lex_file(&options).unwrap();
    assert!(output.contains("Arena:\n"), "{output}");
    assert!(output.contains("  Regions: 1\n"), "{output}");
}

#[test]
fn large_file_spans_multiple_regions() {
    let line = b"int value = 12345; // filler\n";
    let repeats = REGION_DEFAULT_CAPACITY * 8 / line.len() * 2;
    let content: Vec<u8> = line.repeat(repeats);
    let file = write_source(&content);

    let mut options = LexOptions::new(file.path());
    options.stats = true;
    let output = lex_file(&options).unwrap();

    let header = output.lines().next().unwrap();
    assert!(header.ends_with(&format!("({} tokens):", repeats * 6)), "{header}");
    assert!(!output.contains("  Regions: 1\n"), "{output}");
}

#[test]
fn empty_file_has_no_tokens() {
    let file = write_source(b"");
    let output = lex_file(&LexOptions::new(file.path())).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert!(output.ends_with("(0 tokens):\n"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.c");
    let err = lex_file(&LexOptions::new(&path)).unwrap_err();
    assert!(matches!(err, CliError::NotFound { .. }), "{err}");
}
