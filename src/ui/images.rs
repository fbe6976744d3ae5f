//! Decoded image handles for remote pictures (background tiles, mission patches)

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use iced::widget::image::Handle;

/// Image handles keyed by `K`, plus the set of keys already requested
/// so the same picture is never downloaded twice.
#[derive(Debug)]
pub struct HandleCache<K> {
    handles: HashMap<K, Handle>,
    requested: HashSet<K>,
}

impl<K> Default for HandleCache<K> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
            requested: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Copy> HandleCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as requested. Returns false if it already was.
    pub fn request(&mut self, key: K) -> bool {
        self.requested.insert(key)
    }

    /// Store downloaded bytes; iced decodes them lazily on first draw
    pub fn insert(&mut self, key: K, bytes: Vec<u8>) {
        self.handles.insert(key, Handle::from_bytes(bytes));
    }

    pub fn get(&self, key: &K) -> Option<&Handle> {
        self.handles.get(key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_once() {
        let mut cache: HandleCache<u32> = HandleCache::new();
        assert!(cache.request(7));
        assert!(!cache.request(7));
        assert!(cache.request(8));
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache: HandleCache<usize> = HandleCache::new();
        assert!(cache.get(&0).is_none());

        cache.insert(0, vec![0xFF, 0xD8, 0xFF]);
        assert!(cache.get(&0).is_some());
        assert_eq!(cache.len(), 1);
    }
}
