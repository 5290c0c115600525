//! Optimized CSS generation
//!
//! flatten → dedup → batch → render, plus the compressed, batch, formatted
//! and streaming variants built on the same pieces. Generation never fails:
//! anything that is not an object at the top level renders as an empty rule.

mod render;
mod stream;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use websmith_foundation::{FormatOptions, GenerateOptions};

use crate::builder::CssBuilder;
use crate::flatten::flatten_tokens;
use crate::minify::minify_css;

use render::{prepare, render, Prepared};
pub use stream::stream_optimized_css;

/// Generation statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Variables emitted (after deduplication)
    pub variable_count: usize,
    pub duplicates_removed: usize,
    /// Wall time in milliseconds; 0 when served from cache
    pub generation_time: f64,
    /// Output length in characters
    pub output_size: usize,
}

/// Generated stylesheet and its statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub css: String,
    pub stats: GenerationStats,
}

/// Output of `generate_compressed_css`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedCss {
    pub compressed: String,
    pub original: String,
    /// compressed length / original length
    pub compression_ratio: f64,
}

/// A named token tree for `generate_batch_css`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub name: String,
    pub tokens: Value,
}

impl TokenSet {
    pub fn new(name: impl Into<String>, tokens: Value) -> Self {
        Self {
            name: name.into(),
            tokens,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn finish(css: String, prepared: &Prepared, start: Instant) -> GenerationResult {
    let output_size = css.chars().count();
    GenerationResult {
        css,
        stats: GenerationStats {
            variable_count: prepared.variables.len(),
            duplicates_removed: prepared.duplicates_removed,
            generation_time: elapsed_ms(start),
            output_size,
        },
    }
}

/// Generate CSS custom properties for a token tree
pub fn generate_optimized_css(tokens: &Value, options: &GenerateOptions) -> GenerationResult {
    let start = Instant::now();
    let prepared = prepare(tokens, options);

    let css = render(&prepared, options);
    let css = if options.minify { minify_css(&css) } else { css };

    finish(css, &prepared, start)
}

/// Generate unminified CSS, then minify it as a separate pass
pub fn generate_compressed_css(tokens: &Value, options: &GenerateOptions) -> CompressedCss {
    let options = options.clone().minify(false);
    let original = generate_optimized_css(tokens, &options).css;
    let compressed = minify_css(&original);

    let original_len = original.chars().count();
    let compression_ratio = if original_len == 0 {
        1.0
    } else {
        compressed.chars().count() as f64 / original_len as f64
    };

    CompressedCss {
        compressed,
        original,
        compression_ratio,
    }
}

/// Generate each named set independently
///
/// Sets are neither deduplicated against each other nor cached. A repeated
/// name keeps its first position and the last set's result.
pub fn generate_batch_css(
    sets: &[TokenSet],
    options: &GenerateOptions,
) -> IndexMap<String, GenerationResult> {
    sets.iter()
        .map(|set| (set.name.clone(), generate_optimized_css(&set.tokens, options)))
        .collect()
}

/// Generate with custom indentation, line endings and optional name sorting
pub fn generate_formatted_css(tokens: &Value, options: &FormatOptions) -> GenerationResult {
    let start = Instant::now();
    let base = &options.base;

    let mut prepared = prepare(tokens, base);
    if options.sort_variables {
        prepared.variables.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let css = render(&prepared, base);
    let css = if base.minify {
        minify_css(&css)
    } else {
        reindent(&css, &options.indent_unit())
    };
    let css = apply_line_ending(css, options);

    finish(css, &prepared, start)
}

/// Replace each leading default-indent group with `unit`
fn reindent(css: &str, unit: &str) -> String {
    use crate::builder::DEFAULT_INDENT;

    if unit == DEFAULT_INDENT {
        return css.to_string();
    }

    let mut out = String::with_capacity(css.len());
    for line in css.split_inclusive('\n') {
        let mut rest = line;
        while let Some(stripped) = rest.strip_prefix(DEFAULT_INDENT) {
            out.push_str(unit);
            rest = stripped;
        }
        out.push_str(rest);
    }
    out
}

fn apply_line_ending(css: String, options: &FormatOptions) -> String {
    let ending = options.line_ending.as_str();
    if ending == "\n" {
        css
    } else {
        css.replace('\n', ending)
    }
}

/// Plain `:root` export without header or deduplication
///
/// This is the exporter build-tool integrations call when they only need the
/// variables.
pub fn export_css_variables(tokens: &Value, prefix: &str) -> String {
    let variables = flatten_tokens(tokens, prefix);

    let mut builder = CssBuilder::new();
    render::write_open(&mut builder, ":root");
    render::write_declarations(&mut builder, &variables);
    render::write_close(&mut builder);
    builder.build()
}
