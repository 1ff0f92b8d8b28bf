use std::collections::HashMap;

use super::pair::{CollisionInfo, CollisionPair};

/// The authoritative set of currently-overlapping pairs and their contact
/// geometry.
///
/// Entries exist only while the pair overlaps: the detector inserts on new
/// overlap, replaces while overlap persists and removes on separation. Only
/// the detector mutates the registry; the resolver reads it.
pub struct CollisionRegistry {
    entries: HashMap<CollisionPair, CollisionInfo>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Replace any existing entry for `pair` with `info`.
    ///
    /// Implemented as explicit remove-then-insert so a stale entry can never
    /// survive a refresh.
    pub fn upsert(&mut self, pair: CollisionPair, info: CollisionInfo) {
        self.entries.remove(&pair);
        self.entries.insert(pair, info);
    }

    /// Remove the entry for `pair` if present; no-op otherwise
    pub fn remove(&mut self, pair: &CollisionPair) {
        self.entries.remove(pair);
    }

    pub fn get(&self, pair: &CollisionPair) -> Option<&CollisionInfo> {
        self.entries.get(pair)
    }

    pub fn contains(&self, pair: &CollisionPair) -> bool {
        self.entries.contains_key(pair)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CollisionPair, &CollisionInfo)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CollisionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
