//! `quill` subcommands.

use std::fs::File;

use quill_arena::{Arena, RegionBackend, UNIT_SIZE};
use quill_lexer::{GlyphMetrics, Lexer, Token};

use crate::buffer::load_into_arena;
use crate::config::LexOptions;
use crate::CliError;

/// Lex the file named by `options` and render its token stream.
pub fn lex_file(options: &LexOptions) -> Result<String, CliError> {
    let mut file =
        File::open(&options.path).map_err(|e| CliError::from_io(&options.path, e))?;
    let mut arena = Arena::new();
    let buffer =
        load_into_arena(&mut file, &mut arena).map_err(|e| CliError::from_io(&options.path, e))?;

    let table = options.metrics();
    let metrics = table.as_ref().map(|t| t as &dyn GlyphMetrics);
    let tokens: Vec<Token<'_>> = Lexer::new(arena.bytes(buffer), metrics)
        .with_layout(options.layout)
        .collect();
    tracing::debug!(path = %options.path.display(), count = tokens.len(), "lexed file");

    let mut out = format!(
        "Tokens for '{}' ({} tokens):\n",
        options.path.display(),
        tokens.len()
    );
    out.push_str(&render_tokens(&tokens));
    if options.stats {
        out.push_str(&render_stats(&arena));
    }
    Ok(out)
}

/// One line per token: kind, byte span, layout position and text.
pub fn render_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        let span = token.span.to_string();
        out.push_str(&format!(
            "  {:<22} {span:<10} @ ({:.1}, {:.1})  {:?}\n",
            token.kind.name(),
            token.position.x,
            token.position.y,
            token.text_lossy(),
        ));
    }
    out
}

/// Summarize arena occupancy after a run.
pub fn render_stats<B: RegionBackend>(arena: &Arena<B>) -> String {
    let stats = arena.stats();
    let mut out = String::from("Arena:\n");
    out.push_str(&format!("  Regions: {}\n", arena.region_count()));
    out.push_str(&format!(
        "  Reserved: {} bytes ({} units)\n",
        arena.bytes_reserved(),
        arena.bytes_reserved() / UNIT_SIZE
    ));
    out.push_str(&format!("  Used: {} bytes\n", arena.bytes_used()));
    out.push_str(&format!("  Regions created: {}\n", stats.regions_created));
    out.push_str(&format!("  Regions skipped: {}\n", stats.regions_skipped));
    out.push_str(&format!(
        "  Oversized allocations: {}\n",
        stats.oversized_allocations
    ));
    out
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
