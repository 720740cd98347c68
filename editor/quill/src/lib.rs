//! Quill editor front end.
//!
//! Loads a file into an [`quill_arena::Arena`], runs the
//! [`quill_lexer::Lexer`] over it and renders the token stream with layout
//! positions. The `quill` binary is a thin wrapper over [`commands`].

use std::sync::Once;

pub mod buffer;
pub mod commands;
pub mod config;
mod error;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
