//! Process-lifetime translation memo
//!
//! Injectable so the handler owns its cache explicitly and tests can
//! substitute an instrumented implementation. No TTL, no eviction, no size
//! bound: every unique triple observed stays for the life of the process.
//! There is no single-flight guarantee either; two concurrent misses for
//! the same key may both reach upstream and both write, last write wins.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::types::CacheKey;

pub trait TranslationCache: Send + Sync {
    /// Pure read; no side effects.
    fn lookup(&self, key: &CacheKey) -> Option<String>;

    /// Insert or overwrite unconditionally. Idempotent for identical inputs.
    fn store(&self, key: CacheKey, value: String);
}

/// In-memory cache backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<CacheKey, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TranslationCache for MemoryCache {
    fn lookup(&self, key: &CacheKey) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).cloned()
    }

    fn store(&self, key: CacheKey, value: String) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key, value);
    }
}
