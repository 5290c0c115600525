//! CSS text builder
//!
//! Accumulates lines with indentation tracking. Length is tracked as lines
//! are written so size reporting never has to materialize the output.

/// Default indentation unit
pub const DEFAULT_INDENT: &str = "  ";

#[derive(Debug, Clone)]
pub struct CssBuilder {
    lines: Vec<String>,
    depth: usize,
    indent_unit: String,
    /// Characters written so far, newline terminators included
    char_len: usize,
    byte_len: usize,
}

impl CssBuilder {
    pub fn new() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }

    pub fn with_indent(indent_unit: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            indent_unit: indent_unit.into(),
            char_len: 0,
            byte_len: 0,
        }
    }

    /// Write one line at the current depth
    ///
    /// Empty lines are written without indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        let line = if self.depth > 0 && !text.is_empty() {
            let mut line = self.indent_unit.repeat(self.depth);
            line.push_str(text);
            line
        } else {
            text.to_string()
        };

        self.char_len += line.chars().count() + 1;
        self.byte_len += line.len() + 1;
        self.lines.push(line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease depth, never below zero
    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Output length in characters
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Join every line, each terminated by `\n`
    pub fn build(&self) -> String {
        let mut out = String::with_capacity(self.byte_len);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl Default for CssBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut builder = CssBuilder::new();
        builder.line(":root {").indent().line("--a: 1;").dedent().line("}");

        assert_eq!(builder.build(), ":root {\n  --a: 1;\n}\n");
    }

    #[test]
    fn test_dedent_floors_at_zero() {
        let mut builder = CssBuilder::new();
        builder.dedent().dedent().line("x");

        assert_eq!(builder.depth(), 0);
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_line_not_indented() {
        let mut builder = CssBuilder::new();
        builder.indent().line("a").blank().line("b");

        assert_eq!(builder.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_len_matches_output() {
        let mut builder = CssBuilder::with_indent("\t");
        builder.line("sélecteur {").indent().line("--é: ü;").dedent().line("}");

        let css = builder.build();
        assert_eq!(builder.len(), css.chars().count());
        assert!(css.contains("\t--é: ü;"));
    }

    #[test]
    fn test_instances_do_not_share_depth() {
        let mut a = CssBuilder::new();
        a.indent().indent();
        let mut b = CssBuilder::new();
        b.line("top");

        assert_eq!(b.build(), "top\n");
        assert_eq!(a.depth(), 2);
    }

    #[test]
    fn test_empty() {
        let builder = CssBuilder::default();
        assert!(builder.is_empty());
        assert_eq!(builder.len(), 0);
        assert_eq!(builder.build(), "");
    }
}
