//! Bounded LRU store for answers, shared across invocations

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

/// Default number of cached answers
pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded answer store with least-recently-used eviction.
///
/// Internally synchronized: `get`/`put` take the lock around the LRU
/// bookkeeping, so the cache can be shared behind an `Arc` and hit from
/// concurrent invocations without external serialization. Eviction is
/// purely capacity-driven; there is no TTL and no staleness check, so an
/// answer cached once stays valid for the process lifetime.
pub struct AnswerCache {
    inner: Mutex<LruCache<String, Vec<String>>>,
}

impl AnswerCache {
    /// Create a cache with [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries (clamped to 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Look up a key, marking it most-recently-used on a hit.
    pub fn get(&self, key: &str) -> Option<Vec<String>> {
        self.lock().get(key).cloned()
    }

    /// Insert an entry. A new key at capacity evicts the least-recently-used
    /// key first; an existing key is overwritten and promoted.
    pub fn put(&self, key: String, segments: Vec<String>) {
        self.lock().put(key, segments);
    }

    /// Whether the key is present, without touching recency.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, Vec<String>>> {
        // A poisoned lock only means another caller panicked between
        // operations; every LRU operation leaves the map consistent.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AnswerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnswerCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.lock();
        f.debug_struct("AnswerCache")
            .field("len", &guard.len())
            .field("capacity", &guard.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str) -> Vec<String> {
        vec![text.to_string()]
    }

    #[test]
    fn test_get_and_put() {
        let cache = AnswerCache::with_capacity(10);
        assert!(cache.get("KubePodNotReady").is_none());

        cache.put("KubePodNotReady".to_string(), entry("answer"));
        assert_eq!(cache.get("KubePodNotReady"), Some(entry("answer")));
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let cache = AnswerCache::with_capacity(3);
        cache.put("a".to_string(), entry("1"));
        cache.put("b".to_string(), entry("2"));
        cache.put("c".to_string(), entry("3"));

        // One over capacity: "a" is the LRU entry and must go.
        cache.put("d".to_string(), entry("4"));

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
        assert!(cache.contains("d"));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_get_protects_from_eviction() {
        let cache = AnswerCache::with_capacity(3);
        cache.put("a".to_string(), entry("1"));
        cache.put("b".to_string(), entry("2"));
        cache.put("c".to_string(), entry("3"));

        // Touch "a" so "b" becomes the eviction candidate.
        assert!(cache.get("a").is_some());
        cache.put("d".to_string(), entry("4"));

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn test_put_existing_key_overwrites_and_promotes() {
        let cache = AnswerCache::with_capacity(2);
        cache.put("a".to_string(), entry("old"));
        cache.put("b".to_string(), entry("2"));

        cache.put("a".to_string(), entry("new"));
        cache.put("c".to_string(), entry("3"));

        assert_eq!(cache.get("a"), Some(entry("new")));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let cache = AnswerCache::with_capacity(10);
        cache.put("PodCrashLooping".to_string(), entry("answer"));
        assert!(cache.get("podcrashlooping").is_none());
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let cache = AnswerCache::with_capacity(0);
        cache.put("a".to_string(), entry("1"));
        assert_eq!(cache.len(), 1);
    }
}
