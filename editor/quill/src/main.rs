//! Quill editor core CLI.

use quill::commands::lex_file;
use quill::config::parse_lex_options;

fn main() {
    quill::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            if args.len() < 3 {
                print_lex_usage();
                std::process::exit(1);
            }
            match parse_lex_options(&args[2..]).and_then(|options| lex_file(&options)) {
                Ok(output) => print!("{output}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => println!("quill {}", env!("CARGO_PKG_VERSION")),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Quill editor core");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>    Dump the token stream with layout positions");
    println!("  help          Show this message");
    println!("  version       Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=quill_arena=trace) for diagnostics.");
}

fn print_lex_usage() {
    eprintln!("Usage: quill lex <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --font-size=<n>      Font size for line offsets (default: 64)");
    eprintln!("  --line-spacing=<n>   Line spacing multiplier (default: 1)");
    eprintln!("  --advance=<n>        Monospace glyph advance (default: font size / 2)");
    eprintln!("  --no-metrics         Lex without glyph metrics (x stays 0)");
    eprintln!("  --stats              Print arena statistics");
}
