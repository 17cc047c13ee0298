use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use crate::models::ExtractionResult;

/// In-memory cache of extraction results
///
/// Keyed by a digest of the submitted text, so resubmitting the same document
/// skips the matcher. A capacity of 0 disables caching entirely.
#[derive(Clone)]
pub struct ExtractionCache {
    inner: Option<moka::future::Cache<String, ExtractionResult>>,
    ttl_secs: u64,
}

impl ExtractionCache {
    /// Create a new extraction cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let inner = (capacity > 0).then(|| {
            moka::future::CacheBuilder::new(capacity)
                .time_to_live(Duration::from_secs(ttl_secs))
                .build()
        });

        Self { inner, ttl_secs }
    }

    /// A cache that stores nothing
    pub fn disabled() -> Self {
        Self::new(0, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Get a cached result for `text`
    pub async fn get(&self, text: &str) -> Option<ExtractionResult> {
        let cache = self.inner.as_ref()?;
        let key = CacheKey::extraction(text);

        let hit = cache.get(&key).await;
        match &hit {
            Some(_) => tracing::trace!("Cache hit: {}", key),
            None => tracing::trace!("Cache miss: {}", key),
        }

        // Guard against digest collisions
        hit.filter(|result| result.text_length == text.chars().count())
    }

    /// Store the result for `text`
    pub async fn set(&self, text: &str, result: &ExtractionResult) {
        if let Some(cache) = &self.inner {
            let key = CacheKey::extraction(text);
            cache.insert(key.clone(), result.clone()).await;
            tracing::trace!("Cache set: {}", key);
        }
    }

    /// Drop every cached result, e.g. after the vocabulary changes
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.inner {
            cache.invalidate_all();
            tracing::debug!("Invalidated extraction cache");
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            enabled: self.is_enabled(),
            entries: self.inner.as_ref().map_or(0, |c| c.entry_count()),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub enabled: bool,
    pub entries: u64,
    #[serde(rename = "ttlSecs")]
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for the extraction of `text`
    pub fn extraction(text: &str) -> String {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        format!("extract:{:016x}:{}", hasher.finish(), text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(text: &str) -> ExtractionResult {
        ExtractionResult {
            skills: vec!["Rust".to_string()],
            email: None,
            phone: None,
            education: None,
            experience_years: 0,
            confidence: 10.0,
            text_length: text.chars().count(),
        }
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = ExtractionCache::new(100, 60);
        let text = "Rust developer";

        assert!(cache.get(text).await.is_none());

        cache.set(text, &sample_result(text)).await;
        let hit = cache.get(text).await;
        assert_eq!(hit, Some(sample_result(text)));

        cache.invalidate_all();
        assert!(cache.get(text).await.is_none());
    }

    #[tokio::test]
    async fn test_disabled_cache_stores_nothing() {
        let cache = ExtractionCache::disabled();
        let text = "Rust developer";

        cache.set(text, &sample_result(text)).await;
        assert!(cache.get(text).await.is_none());
        assert!(!cache.stats().enabled);
    }

    #[test]
    fn test_cache_key_builder() {
        let key = CacheKey::extraction("abc");
        assert!(key.starts_with("extract:"));
        assert!(key.ends_with(":3"));
        assert_eq!(key, CacheKey::extraction("abc"));
        assert_ne!(key, CacheKey::extraction("abd"));
    }
}
