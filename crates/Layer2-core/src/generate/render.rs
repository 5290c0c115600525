//! Stylesheet pieces shared by the buffered and streaming generators
//!
//! Every piece is written through a `CssBuilder`, so a builder that receives
//! all pieces in order produces exactly the concatenation of the pieces built
//! separately.

use serde_json::Value;
use websmith_foundation::GenerateOptions;

use crate::builder::CssBuilder;
use crate::dedup::deduplicate;
use crate::flatten::{flatten_tokens, FlatVariable};

/// Dark theme overrides appended by `include_theme`
const DARK_THEME_SELECTOR: &str = r#"[data-theme="dark"]"#;
const DARK_BACKGROUND: &str = "#09090b";
const DARK_FOREGROUND: &str = "#fafafa";

/// Flattened (and optionally deduplicated) variables ready to render
#[derive(Debug, Clone, Default)]
pub(crate) struct Prepared {
    pub variables: Vec<FlatVariable>,
    pub duplicates_removed: usize,
}

pub(crate) fn prepare(tokens: &Value, options: &GenerateOptions) -> Prepared {
    let variables = flatten_tokens(tokens, &options.prefix);
    if options.deduplicate {
        let deduped = deduplicate(variables);
        Prepared {
            variables: deduped.variables,
            duplicates_removed: deduped.duplicates_removed,
        }
    } else {
        Prepared {
            variables,
            duplicates_removed: 0,
        }
    }
}

/// Comment block followed by a blank line
pub(crate) fn write_header(
    builder: &mut CssBuilder,
    prepared: &Prepared,
    options: &GenerateOptions,
) {
    builder.line("/* Generated by websmith-tokens */");
    builder.line(format!("/* Variables: {} */", prepared.variables.len()));
    if prepared.duplicates_removed > 0 {
        builder.line(format!(
            "/* Duplicates removed: {} */",
            prepared.duplicates_removed
        ));
    }
    if options.timestamp {
        builder.line(format!(
            "/* Generated at: {} */",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        ));
    }
    builder.blank();
}

/// `{selector} {` and one level of indentation
pub(crate) fn write_open(builder: &mut CssBuilder, selector: &str) {
    builder.line(format!("{} {{", selector));
    builder.indent();
}

pub(crate) fn write_declarations(builder: &mut CssBuilder, batch: &[FlatVariable]) {
    for variable in batch {
        builder.line(variable.declaration());
    }
}

pub(crate) fn write_close(builder: &mut CssBuilder) {
    builder.dedent();
    builder.line("}");
}

pub(crate) fn write_theme(builder: &mut CssBuilder, prefix: &str) {
    builder.blank();
    write_open(builder, DARK_THEME_SELECTOR);
    builder.line(format!("--{}-background: {};", prefix, DARK_BACKGROUND));
    builder.line(format!("--{}-foreground: {};", prefix, DARK_FOREGROUND));
    write_close(builder);
}

/// Render the full, unminified stylesheet
pub(crate) fn render(prepared: &Prepared, options: &GenerateOptions) -> String {
    let mut builder = CssBuilder::new();

    if !options.minify {
        write_header(&mut builder, prepared, options);
    }

    write_open(&mut builder, &options.selector);
    for batch in prepared.variables.chunks(options.effective_batch_size()) {
        write_declarations(&mut builder, batch);
    }
    write_close(&mut builder);

    if options.include_theme && !options.minify {
        write_theme(&mut builder, &options.prefix);
    }

    builder.build()
}
