// src/geocoding/cache.rs
use std::collections::HashMap;
use std::hash::Hash;

/// Key-value store whose entries expire `ttl_secs` after they were stored.
/// Timestamps are unix seconds supplied by the caller.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl_secs: i64,
    entries: HashMap<K, (V, i64)>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: HashMap::new(),
        }
    }

    /// Returns the value if it was stored less than `ttl_secs` before `now`.
    /// An expired entry is evicted on the way out.
    pub fn get(&mut self, key: &K, now: i64) -> Option<V> {
        let stored_at = self.entries.get(key).map(|(_, ts)| *ts)?;
        if now - stored_at >= self.ttl_secs {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|(v, _)| v.clone())
    }

    pub fn put(&mut self, key: K, value: V, timestamp: i64) {
        self.entries.insert(key, (value, timestamp));
    }

    /// Drop every expired entry.
    pub fn purge_expired(&mut self, now: i64) {
        let ttl = self.ttl_secs;
        self.entries.retain(|_, (_, stored_at)| now - *stored_at < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
