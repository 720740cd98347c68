//! Options for `quill lex`.

use std::path::PathBuf;

use quill_lexer::{GlyphMetricsTable, LayoutConfig};

use crate::CliError;

/// Monospace advance as a fraction of the font size when `--advance` is not
/// given.
pub const DEFAULT_ADVANCE_RATIO: f32 = 0.5;

/// Parsed `quill lex` command line.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOptions {
    pub path: PathBuf,
    pub layout: LayoutConfig,
    /// Explicit monospace glyph advance, overriding the font-size ratio.
    pub advance: Option<f32>,
    /// Lex without glyph metrics, leaving every `x` at 0.
    pub no_metrics: bool,
    /// Append arena statistics to the output.
    pub stats: bool,
}

impl LexOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: LayoutConfig::default(),
            advance: None,
            no_metrics: false,
            stats: false,
        }
    }

    /// Glyph table to lex with, or `None` under `--no-metrics`.
    pub fn metrics(&self) -> Option<GlyphMetricsTable> {
        if self.no_metrics {
            return None;
        }
        let advance = self
            .advance
            .unwrap_or(self.layout.font_size * DEFAULT_ADVANCE_RATIO);
        Some(GlyphMetricsTable::monospace(advance))
    }
}

/// Parse the arguments following `quill lex`.
///
/// The first non-flag argument is the file path; later ones are rejected.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut path: Option<&str> = None;
    let mut layout = LayoutConfig::default();
    let mut advance = None;
    let mut no_metrics = false;
    let mut stats = false;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--font-size=") {
            layout.font_size = parse_positive("--font-size", value)?;
        } else if let Some(value) = arg.strip_prefix("--line-spacing=") {
            layout.line_spacing = parse_positive("--line-spacing", value)?;
        } else if let Some(value) = arg.strip_prefix("--advance=") {
            advance = Some(parse_positive("--advance", value)?);
        } else if arg == "--no-metrics" {
            no_metrics = true;
        } else if arg == "--stats" {
            stats = true;
        } else if arg.starts_with('-') || path.is_some() {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            path = Some(arg.as_str());
        }
    }

    let Some(path) = path else {
        return Err(CliError::MissingArgument("file path"));
    };

    Ok(LexOptions {
        path: PathBuf::from(path),
        layout,
        advance,
        no_metrics,
        stats,
    })
}

fn parse_positive(option: &'static str, value: &str) -> Result<f32, CliError> {
    match value.parse::<f32>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(CliError::InvalidNumber {
            option,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
