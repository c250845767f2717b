use std::hash::Hash;

use indexmap::IndexMap;

/// Group items by key in one pass. Groups appear in first-seen key order and
/// keep their items in input order.
pub fn group_by<'a, T, K, F>(items: &'a [T], mut key: F) -> IndexMap<K, Vec<&'a T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<&'a T>> = IndexMap::new();
    for item in items {
        groups.entry(key(item)).or_default().push(item);
    }
    groups
}
