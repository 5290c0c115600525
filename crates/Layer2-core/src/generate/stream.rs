//! Streaming generation for large token sets
//!
//! Chunks: optional header, `{selector} {`, one chunk per batch of
//! declarations, `}`, then the optional theme block. The generator yields to
//! the runtime after each batch. Concatenating every chunk gives the same text
//! as `generate_optimized_css` with the same options; in minify mode the
//! chunks are already compact.

use futures::Stream;
use serde_json::Value;
use websmith_foundation::GenerateOptions;

use super::render::{
    prepare, write_close, write_declarations, write_header, write_open, write_theme,
};
use crate::builder::CssBuilder;
use crate::minify::minify_css;

/// Lazily generate CSS as a finite, single-pass stream of chunks
///
/// Nothing is computed until the stream is first polled. Dropping the stream
/// early leaves no state behind.
pub fn stream_optimized_css(
    tokens: &Value,
    options: &GenerateOptions,
) -> impl Stream<Item = String> + Send + 'static {
    let tokens = tokens.clone();
    let options = options.clone();

    async_stream::stream! {
        let prepared = prepare(&tokens, &options);
        let minify = options.minify;

        if !minify {
            let mut header = CssBuilder::new();
            write_header(&mut header, &prepared, &options);
            yield header.build();
        }

        let mut open = CssBuilder::new();
        write_open(&mut open, &options.selector);
        yield compact(open.build(), minify);

        let batch_size = options.effective_batch_size();
        let batch_count = prepared.variables.len().div_ceil(batch_size);
        for (index, batch) in prepared.variables.chunks(batch_size).enumerate() {
            let mut chunk = CssBuilder::new();
            chunk.indent();
            write_declarations(&mut chunk, batch);

            let mut text = compact(chunk.build(), minify);
            // The minifier drops the `;` before `}`; the last batch carries it
            if minify && index + 1 == batch_count && text.ends_with(';') {
                text.pop();
            }
            yield text;

            tokio::task::yield_now().await;
        }

        let mut close = CssBuilder::new();
        close.indent();
        write_close(&mut close);
        yield compact(close.build(), minify);

        if options.include_theme && !minify {
            let mut theme = CssBuilder::new();
            write_theme(&mut theme, &options.prefix);
            yield theme.build();
        }

        tracing::trace!(
            variables = prepared.variables.len(),
            batches = batch_count,
            "css stream finished"
        );
    }
}

fn compact(chunk: String, minify: bool) -> String {
    if minify {
        minify_css(&chunk)
    } else {
        chunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_optimized_css;
    use futures::StreamExt;
    use serde_json::json;

    fn large_tokens(count: usize) -> Value {
        let mut colors = serde_json::Map::new();
        for i in 0..count {
            colors.insert(format!("c{}", i), json!(format!("#{:06x}", i)));
        }
        json!({ "colors": colors })
    }

    #[tokio::test]
    async fn test_stream_matches_generate() {
        let tokens = large_tokens(250);
        let options = GenerateOptions::default().timestamp(false).batch_size(100);

        let chunks: Vec<String> = stream_optimized_css(&tokens, &options).collect().await;
        let generated = generate_optimized_css(&tokens, &options);

        // header, open, 3 batches, close
        assert_eq!(chunks.len(), 6);
        assert_eq!(chunks.concat(), generated.css);
    }

    #[tokio::test]
    async fn test_stream_minified_matches_generate() {
        let tokens = large_tokens(25);
        let options = GenerateOptions::default().minify(true).batch_size(10);

        let chunks: Vec<String> = stream_optimized_css(&tokens, &options).collect().await;
        let generated = generate_optimized_css(&tokens, &options);

        assert_eq!(chunks.concat(), generated.css);
        assert!(!chunks.concat().contains("/*"));
    }

    #[tokio::test]
    async fn test_stream_with_theme_and_dedup() {
        let tokens = json!({"a": "x", "b": "x", "c": "y"});
        let options = GenerateOptions::default()
            .timestamp(false)
            .include_theme(true)
            .batch_size(1);

        let css: String = stream_optimized_css(&tokens, &options)
            .collect::<Vec<_>>()
            .await
            .concat();

        assert_eq!(css, generate_optimized_css(&tokens, &options).css);
        assert!(css.contains("/* Duplicates removed: 1 */"));
    }

    #[tokio::test]
    async fn test_stream_empty_tree() {
        let options = GenerateOptions::default().timestamp(false);
        let chunks: Vec<String> = stream_optimized_css(&json!({}), &options).collect().await;

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1], ":root {\n");
        assert_eq!(chunks[2], "}\n");
    }

    #[tokio::test]
    async fn test_stream_can_be_abandoned() {
        let tokens = large_tokens(500);
        let options = GenerateOptions::default().batch_size(50);

        let mut stream = Box::pin(stream_optimized_css(&tokens, &options));
        let header = stream.next().await.unwrap();
        let open = stream.next().await.unwrap();
        drop(stream);

        assert!(header.starts_with("/* Generated by websmith-tokens */"));
        assert_eq!(open, ":root {\n");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_stream_yields_between_batches() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let progress = Arc::new(AtomicUsize::new(0));
        let ticker = {
            let progress = progress.clone();
            tokio::spawn(async move {
                loop {
                    progress.fetch_add(1, Ordering::SeqCst);
                    tokio::task::yield_now().await;
                }
            })
        };

        let tokens = large_tokens(100);
        let options = GenerateOptions::default().batch_size(10);
        let chunks: Vec<String> = stream_optimized_css(&tokens, &options).collect().await;
        ticker.abort();

        assert_eq!(chunks.len(), 13);
        assert!(progress.load(Ordering::SeqCst) > 0);
    }
}
