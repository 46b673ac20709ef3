//! Map of keys to lists with in-place list mutation.
//!
//! [`ListMap`] owns a `HashMap<K, Vec<V>>` and keeps one invariant: a key
//! is present only while its list is non-empty *through removal*. Lists are
//! created on demand by [`ListMap::append`] / [`ListMap::insert`] and a key
//! is dropped as soon as [`ListMap::remove`] takes out its last value.

use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;

use tracing::trace;

/// Keyed collection of value lists.
///
/// # Examples
/// ```
/// use u_toolkit::collections::ListMap;
///
/// let mut subs: ListMap<&str, u32> = ListMap::new();
/// assert!(subs.append("news", 1, false));
/// assert!(!subs.append("sports", 2, true)); // key must already exist
/// assert!(subs.insert("news", 3, true));
/// assert!(!subs.insert("news", 3, true)); // duplicate
/// assert_eq!(subs.get(&"news"), Some(&[1, 3][..]));
///
/// assert!(subs.remove(&"news", &1));
/// assert!(subs.remove(&"news", &3));
/// assert!(!subs.contains_key(&"news"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMap<K, V>
where
    K: Eq + Hash,
{
    inner: HashMap<K, Vec<V>>,
}

impl<K, V> Default for ListMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }
}

impl<K, V> ListMap<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `v` to the list at `k`.
    ///
    /// When `exist` is `true` the key must already be present; otherwise
    /// nothing changes and `false` is returned. When `exist` is `false` a
    /// missing key starts a new list.
    pub fn append(&mut self, k: K, v: V, exist: bool) -> bool {
        match self.inner.entry(k) {
            hash_map::Entry::Occupied(mut e) => {
                e.get_mut().push(v);
                true
            }
            hash_map::Entry::Vacant(_) if exist => {
                trace!("append rejected: key absent");
                false
            }
            hash_map::Entry::Vacant(e) => {
                e.insert(vec![v]);
                true
            }
        }
    }

    /// Like [`append`](Self::append), but refuses a value already in the list.
    pub fn insert(&mut self, k: K, v: V, exist: bool) -> bool
    where
        V: PartialEq,
    {
        match self.inner.entry(k) {
            hash_map::Entry::Occupied(mut e) => {
                let list = e.get_mut();
                if list.contains(&v) {
                    trace!("insert rejected: duplicate value");
                    return false;
                }
                list.push(v);
                true
            }
            hash_map::Entry::Vacant(_) if exist => {
                trace!("insert rejected: key absent");
                false
            }
            hash_map::Entry::Vacant(e) => {
                e.insert(vec![v]);
                true
            }
        }
    }

    /// Removes the first occurrence of `v` from the list at `k`.
    ///
    /// Drops the key when its list becomes empty.
    ///
    /// # Returns
    /// `true` if a value was removed.
    pub fn remove(&mut self, k: &K, v: &V) -> bool
    where
        V: PartialEq,
    {
        let Some(list) = self.inner.get_mut(k) else {
            return false;
        };
        let Some(i) = list.iter().position(|e| e == v) else {
            return false;
        };
        list.remove(i);
        if list.is_empty() {
            trace!("list emptied, dropping key");
            self.inner.remove(k);
        }
        true
    }

    /// Returns the list stored at `k`.
    pub fn get(&self, k: &K) -> Option<&[V]> {
        self.inner.get(k).map(Vec::as_slice)
    }

    /// Returns `true` if `k` has a list.
    pub fn contains_key(&self, k: &K) -> bool {
        self.inner.contains_key(k)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates `(key, list)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.inner.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Unwraps the underlying map.
    pub fn into_inner(self) -> HashMap<K, Vec<V>> {
        self.inner
    }
}

impl<K, V> From<HashMap<K, Vec<V>>> for ListMap<K, V>
where
    K: Eq + Hash,
{
    /// Wraps an existing map as-is; empty lists already present are kept.
    fn from(inner: HashMap<K, Vec<V>>) -> Self {
        Self { inner }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u8, u8),
        Remove(u8, u8),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0_u8..4, 0_u8..6).prop_map(|(k, v)| Op::Insert(k, v)),
            (0_u8..4, 0_u8..6).prop_map(|(k, v)| Op::Remove(k, v)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn insert_and_remove_keep_lists_unique_and_non_empty(
            ops in proptest::collection::vec(op(), 0..60),
        ) {
            let mut m = ListMap::new();
            for op in ops {
                match op {
                    Op::Insert(k, v) => {
                        m.insert(k, v, false);
                    }
                    Op::Remove(k, v) => {
                        m.remove(&k, &v);
                    }
                }
            }
            for (_, list) in m.iter() {
                prop_assert!(!list.is_empty());
                let mut dedup = list.to_vec();
                dedup.sort();
                dedup.dedup();
                prop_assert_eq!(dedup.len(), list.len());
            }
        }
    }
}
