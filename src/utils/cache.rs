// Expression result cache
use std::collections::HashMap;
use std::sync::Mutex;

/// Memoized evaluation results keyed by the literal expression string.
///
/// Entries are never evicted. The lock is only held for a single map access,
/// so callers computing a missing value do so without holding it.
#[derive(Debug, Default)]
pub struct ExpressionCache {
    entries: Mutex<HashMap<String, i64>>,
}

impl ExpressionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.lock().ok()?.get(key).copied()
    }

    pub fn insert(&self, key: String, value: i64) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_after_insert() {
        let cache = ExpressionCache::new();
        assert!(cache.get("1+1").is_none());

        cache.insert("1+1".to_string(), 2);
        assert_eq!(cache.get("1+1"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_are_exact_strings() {
        let cache = ExpressionCache::new();
        cache.insert("1 2".to_string(), 3);

        assert!(cache.get("1+2").is_none());
        assert!(cache.get("1  2").is_none());
        assert_eq!(cache.get("1 2"), Some(3));
    }
}
