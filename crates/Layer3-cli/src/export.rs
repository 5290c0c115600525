//! Output format dispatch
//!
//! `css` goes through the optimized generator; `scss` and `json` reuse the
//! same flattening. Anything else is rejected with `Error::UnsupportedFormat`.

use serde_json::{Map, Value};
use std::str::FromStr;
use websmith_foundation::{Error, GenerateOptions, Result};
use websmith_tokens::{deduplicate, flatten_tokens, FlatVariable, GenerationResult, TokenEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" | "sass" => Ok(ExportFormat::Scss),
            "json" => Ok(ExportFormat::Json),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

/// Render a token tree in the requested format
pub fn export(
    engine: &mut TokenEngine,
    tokens: &Value,
    format: ExportFormat,
    options: &GenerateOptions,
    cached: bool,
) -> Result<String> {
    match format {
        ExportFormat::Css => {
            let result = if cached {
                engine.generate_cached_css(tokens, options)
            } else {
                engine.generate(tokens, options)
            };
            log_stats(&result);
            Ok(result.css)
        }
        ExportFormat::Scss => Ok(to_scss(&variables(tokens, options))),
        ExportFormat::Json => {
            let json = to_json(&variables(tokens, options));
            Ok(format!("{}\n", serde_json::to_string_pretty(&json)?))
        }
    }
}

fn variables(tokens: &Value, options: &GenerateOptions) -> Vec<FlatVariable> {
    let variables = flatten_tokens(tokens, &options.prefix);
    if options.deduplicate {
        deduplicate(variables).variables
    } else {
        variables
    }
}

/// `$ws-colors-primary: #0ea5e9;` per variable
fn to_scss(variables: &[FlatVariable]) -> String {
    variables
        .iter()
        .map(|v| format!("${}: {};\n", v.name.trim_start_matches('-'), v.value))
        .collect()
}

fn to_json(variables: &[FlatVariable]) -> Value {
    let map: Map<String, Value> = variables
        .iter()
        .map(|v| (v.name.clone(), Value::String(v.value.clone())))
        .collect();
    Value::Object(map)
}

fn log_stats(result: &GenerationResult) {
    tracing::info!(
        "{} variables, {} duplicates removed, {} chars in {:.2}ms",
        result.stats.variable_count,
        result.stats.duplicates_removed,
        result.stats.output_size,
        result.stats.generation_time
    );
}
