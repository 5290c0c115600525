//! End-to-end checks of the public generation API

use futures::StreamExt;
use serde_json::{json, Value};
use std::sync::Arc;
use websmith_foundation::{memoize, CacheOptions, TokenCache};
use websmith_tokens::{
    deduplicate, flatten_tokens, generate_batch_css, generate_compressed_css,
    generate_optimized_css, stream_optimized_css, GenerateOptions, TokenEngine, TokenSet,
    WebsmithConfig,
};

fn design_tokens() -> Value {
    json!({
        "colors": {
            "primary": {"50": "#f0f9ff", "100": "#e0f2fe", "500": "#0ea5e9"},
            "accent": {"500": "#0ea5e9"},
            "neutral": {"0": "#ffffff", "950": "#09090b"}
        },
        "spacing": {"0": 0, "1": "4px", "2": "8px", "sm": 8},
        "radius": {"md": "6px"},
        "typography": {
            "body": {"size": "16px", "lineHeight": 1.5, "weight": 400},
            "features": ["liga", "kern"]
        }
    })
}

fn options() -> GenerateOptions {
    GenerateOptions::default().timestamp(false)
}

#[test]
fn flatten_then_dedup_is_stable() {
    let tokens = design_tokens();
    let first = flatten_tokens(&tokens, "ws");
    let second = flatten_tokens(&tokens, "ws");
    assert_eq!(first, second);

    let once = deduplicate(first);
    let twice = deduplicate(once.variables.clone());
    assert_eq!(once.duplicates_removed, 1);
    assert_eq!(twice.duplicates_removed, 0);
    assert_eq!(once.variables, twice.variables);
}

#[test]
fn full_stylesheet() {
    let result = generate_optimized_css(&design_tokens(), &options().include_theme(true));

    assert!(result.css.contains("  --ws-colors-primary-500: #0ea5e9;\n"));
    assert!(!result.css.contains("--ws-colors-accent-500"));
    assert!(result.css.contains("  --ws-spacing-0: 0;\n"));
    assert!(result.css.contains("  --ws-typography-body-lineHeight: 1.5;\n"));
    assert!(!result.css.contains("features"));
    assert!(result.css.contains("[data-theme=\"dark\"] {"));

    // "8px" and 8 render differently, so both survive dedup
    assert!(result.css.contains("--ws-spacing-2: 8px;"));
    assert!(result.css.contains("--ws-spacing-sm: 8;"));

    assert_eq!(result.stats.duplicates_removed, 1);
    assert_eq!(result.stats.output_size, result.css.chars().count());
}

#[test]
fn minified_output_is_smaller_and_clean() {
    let plain = generate_optimized_css(&design_tokens(), &options());
    let minified = generate_optimized_css(&design_tokens(), &options().minify(true));

    assert!(minified.css.len() < plain.css.len());
    assert!(!minified.css.contains("/*"));
    assert!(!minified.css.contains("\n\n"));
    assert!(!minified.css.contains("  "));
    assert!(minified.css.starts_with(":root{"));
    assert!(minified.css.ends_with('}'));
}

#[test]
fn compression_ratio_bounds() {
    let result = generate_compressed_css(&design_tokens(), &options());
    assert!(result.compression_ratio > 0.0 && result.compression_ratio < 1.0);

    let single = generate_compressed_css(&json!({"a": "b"}), &options());
    assert!(single.compression_ratio > 0.0 && single.compression_ratio < 1.0);
}

#[test]
fn batch_generation_per_theme() {
    let sets = vec![
        TokenSet::new("light", json!({"background": "#ffffff", "foreground": "#09090b"})),
        TokenSet::new("dark", json!({"background": "#09090b", "foreground": "#fafafa"})),
        TokenSet::new("brand", design_tokens()),
    ];
    let results = generate_batch_css(&sets, &options().selector("[data-theme]"));

    assert_eq!(results.len(), 3);
    for result in results.values() {
        assert!(result.css.contains("[data-theme] {"));
    }
    assert_eq!(results["brand"].stats.duplicates_removed, 1);
}

#[test]
fn engine_caches_whole_stylesheets() {
    let mut engine = TokenEngine::new(WebsmithConfig::default());
    let tokens = design_tokens();

    let miss = engine.generate_cached_css(&tokens, &options());
    let hit = engine.generate_cached_css(&tokens, &options());

    assert!(miss.stats.generation_time >= 0.0);
    assert_eq!(hit.stats.generation_time, 0.0);
    assert_eq!(miss.css, hit.css);
    assert_eq!(engine.css_cache_stats().memory_usage, miss.css.chars().count());
}

#[test]
fn lru_and_ttl_through_public_api() {
    let mut cache: TokenCache<&str> = TokenCache::new(CacheOptions {
        max_size: 2,
        ttl_ms: 50,
        enabled: true,
    });

    cache.set(&json!({"theme": "light"}), "light.css");
    cache.set(&json!({"theme": "dark"}), "dark.css");
    cache.get(&json!({"theme": "light"}));
    cache.set(&json!({"theme": "brand"}), "brand.css");

    assert!(cache.has(&json!({"theme": "light"})));
    assert!(!cache.has(&json!({"theme": "dark"})));

    std::thread::sleep(std::time::Duration::from_millis(60));
    assert_eq!(cache.get(&json!({"theme": "brand"})), None);
    assert_eq!(cache.prune(), 1);
    assert_eq!(cache.size(), 0);
}

#[test]
fn memoized_generator_feeds_pipeline() {
    let engine = TokenEngine::new(WebsmithConfig::default());
    let typography = memoize(engine.caches().typography.clone(), |base: &u32| {
        json!({
            "sm": format!("{}px", base - 2),
            "md": format!("{}px", base),
            "lg": format!("{}px", base + 4)
        })
    });

    let scale = typography(&16);
    assert!(Arc::ptr_eq(&scale, &typography(&16)));

    let result = generate_optimized_css(&json!({ "font": scale.as_ref() }), &options());
    assert!(result.css.contains("--ws-font-lg: 20px;"));
}

#[tokio::test]
async fn streamed_chunks_reassemble() {
    let options = options().batch_size(3);
    let chunks: Vec<String> = stream_optimized_css(&design_tokens(), &options)
        .collect()
        .await;

    assert_eq!(chunks.concat(), generate_optimized_css(&design_tokens(), &options).css);
}
