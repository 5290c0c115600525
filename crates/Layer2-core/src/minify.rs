//! CSS minification
//!
//! Strips comments, collapses whitespace, removes spaces around `{ } : ;`
//! and drops the `;` before a closing brace.

use regex::Regex;
use std::sync::OnceLock;

struct MinifyPatterns {
    comments: Regex,
    whitespace: Regex,
    punctuation: Regex,
}

static PATTERNS: OnceLock<MinifyPatterns> = OnceLock::new();

fn patterns() -> &'static MinifyPatterns {
    PATTERNS.get_or_init(|| MinifyPatterns {
        comments: Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern is valid"),
        whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        punctuation: Regex::new(r"\s*([{}:;])\s*").expect("punctuation pattern is valid"),
    })
}

pub fn minify_css(css: &str) -> String {
    let patterns = patterns();
    let css = patterns.comments.replace_all(css, "");
    let css = patterns.whitespace.replace_all(&css, " ");
    let css = patterns.punctuation.replace_all(&css, "$1");
    css.replace(";}", "}").trim().to_string()
}
