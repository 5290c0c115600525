//! websmith-tokens: optimized CSS generation for design tokens
//!
//! Layer2 - turns token trees into CSS custom properties
//!
//! # Modules
//!
//! - `flatten`: token tree → ordered `--prefix-path: value` pairs
//! - `dedup`: collapse variables that share a value
//! - `builder`: indentation-aware line accumulator
//! - `minify`: comment and whitespace stripping
//! - `generate`: sync, compressed, batch, formatted and streaming generators
//! - `engine`: cache-owning context and `generate_cached_css`
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use websmith_tokens::{generate_optimized_css, GenerateOptions};
//!
//! let tokens = json!({
//!     "colors": {"primary": {"50": "#f0f9ff", "500": "#0ea5e9"}},
//!     "spacing": {"1": "4px"}
//! });
//! let result = generate_optimized_css(&tokens, &GenerateOptions::default());
//!
//! assert!(result.css.contains("  --ws-colors-primary-500: #0ea5e9;"));
//! assert_eq!(result.stats.variable_count, 3);
//! ```

pub mod builder;
pub mod dedup;
pub mod engine;
pub mod flatten;
pub mod generate;
pub mod minify;

// Re-exports: primitives
pub use builder::CssBuilder;
pub use dedup::{deduplicate, Deduplicated};
pub use flatten::{flatten_tokens, FlatVariable};
pub use minify::minify_css;

// Re-exports: generation
pub use generate::{
    export_css_variables, generate_batch_css, generate_compressed_css, generate_formatted_css,
    generate_optimized_css, stream_optimized_css, CompressedCss, GenerationResult,
    GenerationStats, TokenSet,
};

// Re-exports: engine
pub use engine::{
    clear_css_cache, css_cache_stats, generate_cached_css, global_engine, init_global_engine,
    CssCacheStats, TokenEngine,
};

// Re-exports: foundation types used in signatures
pub use websmith_foundation::{
    FormatOptions, GenerateOptions, IndentChar, LineEnding, WebsmithConfig,
};
