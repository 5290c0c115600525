//! Memoization wrapper for pure generators

use serde::Serialize;
use std::sync::Arc;

use super::named::SharedCache;

/// Wrap a pure function so repeated calls with equal arguments share a result
///
/// Results are handed out as `Arc`s; a cache hit returns the very same
/// allocation, so `Arc::ptr_eq` tells a hit from a recomputation. The lock is
/// not held while `f` runs.
///
/// ```
/// use std::sync::Arc;
/// use websmith_foundation::cache::{memoize, shared_cache, CacheOptions};
///
/// let cache = shared_cache(CacheOptions::default());
/// let double = memoize(cache, |n: &u32| n * 2);
///
/// let first = double(&21);
/// let second = double(&21);
/// assert_eq!(*first, 42);
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub fn memoize<A, R, F>(cache: SharedCache<Arc<R>>, f: F) -> impl Fn(&A) -> Arc<R>
where
    A: Serialize + ?Sized,
    F: Fn(&A) -> R,
{
    move |args: &A| {
        if let Some(hit) = cache.lock().get(args) {
            return hit;
        }
        let value = Arc::new(f(args));
        cache.lock().set(args, Arc::clone(&value));
        value
    }
}
