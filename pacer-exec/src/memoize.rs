// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Caches the result of a string-keyed computation.
///
/// The computation runs without the cache lock held, so it may call back into
/// the same `Memoized` (recursive definitions work). Two threads asking for the
/// same missing key at once may both compute it; both receive the value that
/// was stored first.
///
/// Clones share the cache.
///
/// ```
/// use pacer_exec::Memoized;
///
/// let length = Memoized::new(|key: &str| key.len());
///
/// assert_eq!(length.call("debounce"), 8);
/// assert!(length.contains("debounce"));
/// assert_eq!(length.len(), 1);
/// ```
pub struct Memoized<V> {
    compute: Arc<dyn Fn(&str) -> V + Send + Sync>,
    cache: Arc<Mutex<HashMap<String, V>>>,
}

impl<V: Clone> Memoized<V> {
    pub fn new<F>(compute: F) -> Self
    where
        F: Fn(&str) -> V + Send + Sync + 'static,
    {
        Self {
            compute: Arc::new(compute),
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns the cached value for `key`, computing it on first use.
    pub fn call(&self, key: &str) -> V {
        if let Some(value) = self.cache.lock().get(key) {
            pacer_core::trace!(key, "memoize: hit");
            return value.clone();
        }

        pacer_core::trace!(key, "memoize: miss");
        let value = (self.compute)(key);
        self.cache
            .lock()
            .entry(key.to_owned())
            .or_insert(value)
            .clone()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cache.lock().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drops the cached value for `key`, returning it if present.
    pub fn forget(&self, key: &str) -> Option<V> {
        self.cache.lock().remove(key)
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl<V> Clone for Memoized<V> {
    fn clone(&self) -> Self {
        Self {
            compute: Arc::clone(&self.compute),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<V> fmt::Debug for Memoized<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &self.cache.lock().len())
            .finish_non_exhaustive()
    }
}
