//! Helpers over `HashMap`.
//!
//! Every function borrows its inputs and returns a freshly allocated map or
//! vector; values are cloned, never aliased. Extraction order
//! ([`keys`], [`values`]) follows `HashMap` iteration and is not stable.
//!
//! For in-place mutation of maps whose values are lists, see
//! [`ListMap`](super::ListMap).

use std::collections::HashMap;
use std::hash::Hash;

use crate::numeric::Number;

/// Returns an independent copy of `m`.
pub fn copy<K, V>(m: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    m.clone()
}

/// Collects the keys of `m` in iteration order.
pub fn keys<K: Clone, V>(m: &HashMap<K, V>) -> Vec<K> {
    m.keys().cloned().collect()
}

/// Collects the values of `m` in iteration order.
pub fn values<K, V: Clone>(m: &HashMap<K, V>) -> Vec<V> {
    m.values().cloned().collect()
}

/// Projects `m` onto `keys`; keys absent from `m` are skipped.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use u_toolkit::collections::maps::with;
/// let m = HashMap::from([(1, "a"), (2, "b"), (3, "c")]);
/// assert_eq!(with(&m, &[1, 4]), HashMap::from([(1, "a")]));
/// ```
pub fn with<K, V>(m: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    keys.iter()
        .filter_map(|k| m.get(k).map(|v| (k.clone(), v.clone())))
        .collect()
}

/// Copies `m` and deletes `keys` from the copy.
pub fn without<K, V>(m: &HashMap<K, V>, keys: &[K]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut result = copy(m);
    for k in keys {
        result.remove(k);
    }
    result
}

/// Transforms every value; the key set is unchanged.
pub fn map<K, V1, V2, F>(m: &HashMap<K, V1>, mut f: F) -> HashMap<K, V2>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K, &V1) -> V2,
{
    m.iter().map(|(k, v)| (k.clone(), f(k, v))).collect()
}

/// Keeps the entries for which `pred(key, value)` holds.
pub fn filter<K, V, F>(m: &HashMap<K, V>, mut pred: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&K, &V) -> bool,
{
    m.iter()
        .filter(|&(k, v)| pred(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Filters and transforms in one pass: entries for which `f` returns
/// `None` are dropped.
pub fn filter_map<K, V1, V2, F>(m: &HashMap<K, V1>, mut f: F) -> HashMap<K, V2>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K, &V1) -> Option<V2>,
{
    m.iter()
        .filter_map(|(k, v)| f(k, v).map(|v2| (k.clone(), v2)))
        .collect()
}

/// Union of both maps; on collision the value from `m2` wins.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use u_toolkit::collections::maps::merge;
/// let m1 = HashMap::from([(1, "a"), (2, "b")]);
/// let m2 = HashMap::from([(1, "aa"), (3, "c")]);
/// assert_eq!(
///     merge(&m1, &m2),
///     HashMap::from([(1, "aa"), (2, "b"), (3, "c")])
/// );
/// ```
pub fn merge<K, V>(m1: &HashMap<K, V>, m2: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut result = copy(m1);
    result.extend(m2.iter().map(|(k, v)| (k.clone(), v.clone())));
    result
}

/// Union of both maps; on collision the value is `combine(key, v1, v2)`.
///
/// Keys present in only one map keep their value as-is.
pub fn merge_with<K, V, F>(m1: &HashMap<K, V>, m2: &HashMap<K, V>, mut combine: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: FnMut(&K, &V, &V) -> V,
{
    let mut result = copy(m1);
    for (k, v2) in m2 {
        let merged = match result.get(k) {
            Some(v1) => combine(k, v1, v2),
            None => v2.clone(),
        };
        result.insert(k.clone(), merged);
    }
    result
}

/// Adds each value of `m2` into a copy of `m1`; missing keys start at zero.
///
/// Integer values wrap around on overflow.
pub fn merge_with_add<K, V>(m1: &HashMap<K, V>, m2: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Number,
{
    let mut result = copy(m1);
    for (k, &v2) in m2 {
        let acc = result.entry(k.clone()).or_insert_with(V::zero);
        *acc = acc.wrapping_add(v2);
    }
    result
}

/// Subtracts each value of `m2` from a copy of `m1`; missing keys start at
/// zero.
///
/// A key present only in `m2` therefore ends up as `0 - v2`, not `v2`.
/// This is the accumulation semantics callers rely on for applying deltas;
/// it intentionally differs from [`merge_with`] with a subtracting closure.
/// Integer values wrap around, so for unsigned types such a key holds
/// `V::MAX - v2 + 1`.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use u_toolkit::collections::maps::merge_with_sub;
/// let m1 = HashMap::from([("a", 1), ("b", 2)]);
/// let m2 = HashMap::from([("a", 10), ("c", 3)]);
/// assert_eq!(
///     merge_with_sub(&m1, &m2),
///     HashMap::from([("a", -9), ("b", 2), ("c", -3)])
/// );
/// ```
pub fn merge_with_sub<K, V>(m1: &HashMap<K, V>, m2: &HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Number,
{
    let mut result = copy(m1);
    for (k, &v2) in m2 {
        let acc = result.entry(k.clone()).or_insert_with(V::zero);
        *acc = acc.wrapping_sub(v2);
    }
    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn merge_prefers_second(
            m1 in proptest::collection::hash_map(0_u8..20, any::<i32>(), 0..15),
            m2 in proptest::collection::hash_map(0_u8..20, any::<i32>(), 0..15),
        ) {
            let merged = merge(&m1, &m2);
            for (k, v) in &m2 {
                prop_assert_eq!(merged.get(k), Some(v));
            }
            for (k, v) in m1.iter().filter(|(k, _)| !m2.contains_key(*k)) {
                prop_assert_eq!(merged.get(k), Some(v));
            }
            prop_assert!(merged.keys().all(|k| m1.contains_key(k) || m2.contains_key(k)));
        }

        #[test]
        fn with_and_without_split_the_map(
            m in proptest::collection::hash_map(0_u8..20, any::<i32>(), 0..15),
            ks in proptest::collection::vec(0_u8..20, 0..10),
        ) {
            let kept = with(&m, &ks);
            let dropped = without(&m, &ks);
            prop_assert_eq!(kept.len() + dropped.len(), m.len());
            prop_assert_eq!(merge(&kept, &dropped), m);
        }
    }
}
