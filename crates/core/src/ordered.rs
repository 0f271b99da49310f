//! Insertion-ordered map.
//!
//! Stock lists and event-wide rollups are reported in the order items were
//! first seen, which a plain `HashMap` cannot give us. Entries live in a
//! vector; a hash index maps each key to its slot.

use std::collections::HashMap;
use std::hash::Hash;

/// Map that iterates in first-insertion order.
///
/// Keys are never removed, so slots in `entries` are stable and the index
/// never needs rebuilding.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        Some(&mut self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the value for `key`, inserting `default()` at the end of the
    /// iteration order if the key is new.
    pub fn entry_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(key.clone(), slot);
                self.entries.push((key, default()));
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// Order-sensitive: two maps with the same entries inserted in a different
// order are different reports.
impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn iterates_in_first_insertion_order() {
        let mut map = OrderedMap::new();
        *map.entry_or_insert_with("peach", || 0) += 35;
        *map.entry_or_insert_with("apple", || 0) += 7;
        *map.entry_or_insert_with("peach", || 0) += 5;

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["peach", "apple"]);
        assert_eq!(map.get(&"peach"), Some(&40));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn missing_keys_are_absent() {
        let map: OrderedMap<&str, u64> = OrderedMap::default();
        assert!(map.is_empty());
        assert!(!map.contains_key(&"banana"));
        assert_eq!(map.get(&"banana"), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut map = OrderedMap::new();
        map.entry_or_insert_with("apple", || 7u64);
        if let Some(qty) = map.get_mut(&"apple") {
            *qty -= 2;
        }
        assert_eq!(map.get(&"apple"), Some(&5));
        assert_eq!(map.get_mut(&"pear"), None);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let mut a = OrderedMap::new();
        a.entry_or_insert_with(1, || "one");
        a.entry_or_insert_with(2, || "two");

        let mut b = OrderedMap::new();
        b.entry_or_insert_with(2, || "two");
        b.entry_or_insert_with(1, || "one");

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: keys come back deduplicated, in the order they were first inserted.
        #[test]
        fn keys_follow_first_sighting(keys in prop::collection::vec(0u8..16, 0..64)) {
            let mut map = OrderedMap::new();
            for key in &keys {
                *map.entry_or_insert_with(*key, || 0usize) += 1;
            }

            let mut expected: Vec<u8> = Vec::new();
            for key in &keys {
                if !expected.contains(key) {
                    expected.push(*key);
                }
            }

            let actual: Vec<u8> = map.keys().copied().collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(map.values().sum::<usize>(), keys.len());
        }
    }
}
