//! Generation options
//!
//! Shared by the generation pipeline and the `[generate]` table of
//! `websmith.toml`.

use serde::{Deserialize, Serialize};

/// Options for `generate_optimized_css` and its variants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Custom property namespace: `--{prefix}-...`
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Accepted and carried through; generation does not read it yet
    #[serde(default)]
    pub include_fallbacks: bool,

    /// Append the dark theme block
    #[serde(default)]
    pub include_theme: bool,

    /// Declarations rendered per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Collapse variables that share a value
    #[serde(default = "default_true")]
    pub deduplicate: bool,

    #[serde(default)]
    pub minify: bool,

    /// Rule selector wrapping the declarations
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Include the `Generated at` line in the header comment
    #[serde(default = "default_true")]
    pub timestamp: bool,
}

fn default_prefix() -> String {
    "ws".to_string()
}
fn default_batch_size() -> usize {
    100
}
fn default_selector() -> String {
    ":root".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            include_fallbacks: false,
            include_theme: false,
            batch_size: default_batch_size(),
            deduplicate: true,
            minify: false,
            selector: default_selector(),
            timestamp: true,
        }
    }
}

impl GenerateOptions {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn deduplicate(mut self, deduplicate: bool) -> Self {
        self.deduplicate = deduplicate;
        self
    }

    pub fn include_theme(mut self, include_theme: bool) -> Self {
        self.include_theme = include_theme;
        self
    }

    pub fn include_fallbacks(mut self, include_fallbacks: bool) -> Self {
        self.include_fallbacks = include_fallbacks;
        self
    }

    pub fn timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Batch size with zero treated as one
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.max(1)
    }
}

/// Indentation character for formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentChar {
    #[default]
    Space,
    Tab,
}

/// Line terminator for formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Options for `generate_formatted_css`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(flatten)]
    pub base: GenerateOptions,

    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    #[serde(default)]
    pub indent_char: IndentChar,

    #[serde(default)]
    pub line_ending: LineEnding,

    /// Sort variables by name instead of traversal order
    #[serde(default)]
    pub sort_variables: bool,
}

fn default_indent_size() -> usize {
    2
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            base: GenerateOptions::default(),
            indent_size: default_indent_size(),
            indent_char: IndentChar::Space,
            line_ending: LineEnding::Lf,
            sort_variables: false,
        }
    }
}

impl FormatOptions {
    /// One indentation level as text
    pub fn indent_unit(&self) -> String {
        match self.indent_char {
            IndentChar::Space => " ".repeat(self.indent_size),
            // indent_size only sizes spaces
            IndentChar::Tab => "\t".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.prefix, "ws");
        assert_eq!(options.selector, ":root");
        assert_eq!(options.batch_size, 100);
        assert!(options.deduplicate);
        assert!(!options.minify);
        assert!(!options.include_theme);
        assert!(!options.include_fallbacks);
    }

    #[test]
    fn test_builder() {
        let options = GenerateOptions::default()
            .prefix("custom")
            .selector(".theme")
            .minify(true)
            .batch_size(0);
        assert_eq!(options.prefix, "custom");
        assert_eq!(options.selector, ".theme");
        assert!(options.minify);
        assert_eq!(options.effective_batch_size(), 1);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: GenerateOptions =
            serde_json::from_str(r#"{"prefix": "ds", "includeTheme": true, "batchSize": 10}"#)
                .unwrap();
        assert_eq!(options.prefix, "ds");
        assert!(options.include_theme);
        assert_eq!(options.batch_size, 10);
        assert!(options.deduplicate);
    }

    #[test]
    fn test_indent_unit() {
        let mut options = FormatOptions::default();
        assert_eq!(options.indent_unit(), "  ");

        options.indent_size = 4;
        assert_eq!(options.indent_unit(), "    ");

        options.indent_char = IndentChar::Tab;
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn test_tab_ignores_indent_size() {
        let options = FormatOptions {
            indent_char: IndentChar::Tab,
            ..Default::default()
        };
        assert_eq!(options.indent_size, 2);
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn test_format_options_flatten() {
        let options: FormatOptions =
            serde_json::from_str(r#"{"prefix": "x", "lineEnding": "crlf", "sortVariables": true}"#)
                .unwrap();
        assert_eq!(options.base.prefix, "x");
        assert_eq!(options.line_ending, LineEnding::Crlf);
        assert!(options.sort_variables);
        assert_eq!(options.indent_size, 2);
    }
}
