//! Sequence helpers over slices and vectors.
//!
//! Every operation is a linear scan. Order-preserving operations
//! ([`filter`], [`map`], [`partition`], ...) keep the relative order of the
//! input; the set-algebra operations ([`union`], [`intersection`],
//! [`difference`]) deduplicate through a [`HashSet`] and return elements in
//! unspecified order.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::PreconditionError;
use crate::numeric::Number;

/// Returns an independent copy of `data`.
pub fn copy<T: Clone>(data: &[T]) -> Vec<T> {
    data.to_vec()
}

/// Returns `true` if every element satisfies `pred` (vacuously true when empty).
pub fn all<T, F>(data: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    data.iter().all(pred)
}

/// Returns `true` if at least one element satisfies `pred`.
pub fn any<T, F>(data: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    data.iter().any(pred)
}

/// Appends `v` unless an equal element is already present.
///
/// # Returns
/// `true` if `v` was appended, `false` if `data` is unchanged.
///
/// # Examples
/// ```
/// use u_toolkit::collections::lists::insert;
/// let mut v = vec![1, 2, 3];
/// assert!(!insert(&mut v, 3));
/// assert!(insert(&mut v, 4));
/// assert_eq!(v, vec![1, 2, 3, 4]);
/// ```
pub fn insert<T: PartialEq>(data: &mut Vec<T>, v: T) -> bool {
    if data.contains(&v) {
        return false;
    }
    data.push(v);
    true
}

/// Removes the first element equal to `v`, shifting the rest left.
///
/// # Returns
/// `true` if an element was removed.
pub fn remove<T: PartialEq>(data: &mut Vec<T>, v: &T) -> bool {
    match data.iter().position(|e| e == v) {
        Some(i) => {
            data.remove(i);
            true
        }
        None => false,
    }
}

/// Linear membership test over numbers.
pub fn member<T: Number>(data: &[T], v: T) -> bool {
    data.iter().any(|&e| e == v)
}

/// Returns the smallest element, or an error if `data` is empty.
///
/// The first of several equal minima wins.
pub fn try_min<T: Number>(data: &[T]) -> Result<T, PreconditionError> {
    let (&first, rest) = data
        .split_first()
        .ok_or(PreconditionError::EmptySequence { operation: "min" })?;
    Ok(rest
        .iter()
        .fold(first, |acc, &e| if e < acc { e } else { acc }))
}

/// Returns the largest element, or an error if `data` is empty.
pub fn try_max<T: Number>(data: &[T]) -> Result<T, PreconditionError> {
    let (&first, rest) = data
        .split_first()
        .ok_or(PreconditionError::EmptySequence { operation: "max" })?;
    Ok(rest
        .iter()
        .fold(first, |acc, &e| if e > acc { e } else { acc }))
}

/// Returns the smallest element.
///
/// # Panics
/// Panics if `data` is empty.
///
/// # Examples
/// ```
/// use u_toolkit::collections::lists::min;
/// assert_eq!(min(&[3, 1, 2]), 1);
/// ```
pub fn min<T: Number>(data: &[T]) -> T {
    match try_min(data) {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

/// Returns the largest element.
///
/// # Panics
/// Panics if `data` is empty.
pub fn max<T: Number>(data: &[T]) -> T {
    match try_max(data) {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

/// Sums the elements; zero for an empty slice.
///
/// Integer sums wrap around on overflow.
pub fn sum<T: Number>(data: &[T]) -> T {
    data.iter().fold(T::zero(), |acc, &e| acc.wrapping_add(e))
}

/// Transforms every element, preserving order and length.
pub fn map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    data.iter().map(f).collect()
}

/// Keeps the elements satisfying `pred`, in their original order.
pub fn filter<T, F>(data: &[T], mut pred: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    data.iter().filter(|e| pred(*e)).cloned().collect()
}

/// Filters and transforms in one pass: elements for which `f` returns
/// `None` are dropped.
///
/// # Examples
/// ```
/// use u_toolkit::collections::lists::filter_map;
/// let odds_x10 = filter_map(&[1, 2, 3, 4, 5], |&e| (e % 2 == 1).then_some(e * 10));
/// assert_eq!(odds_x10, vec![10, 30, 50]);
/// ```
pub fn filter_map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> Option<U>,
{
    data.iter().filter_map(f).collect()
}

/// Splits `data` into `(matching, non_matching)`, both order-preserving.
pub fn partition<T, F>(data: &[T], mut pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut satisfied = Vec::with_capacity(data.len());
    let mut rest = Vec::with_capacity(data.len());
    for e in data {
        if pred(e) {
            satisfied.push(e.clone());
        } else {
            rest.push(e.clone());
        }
    }
    (satisfied, rest)
}

fn to_set<T: Eq + Hash + Clone>(data: &[T]) -> HashSet<T> {
    data.iter().cloned().collect()
}

/// Distinct elements appearing in either input. Order is unspecified.
pub fn union<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut set = to_set(a);
    set.extend(b.iter().cloned());
    set.into_iter().collect()
}

/// Distinct elements appearing in both inputs. Order is unspecified.
///
/// Probes with the smaller of the two deduplicated sets.
pub fn intersection<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let (mut small, mut large) = (to_set(a), to_set(b));
    if small.len() > large.len() {
        std::mem::swap(&mut small, &mut large);
    }
    small.into_iter().filter(|e| large.contains(e)).collect()
}

/// Distinct elements of `a` that do not appear in `b`. Order is unspecified.
///
/// # Examples
/// ```
/// use u_toolkit::collections::lists::difference;
/// assert_eq!(difference(&[1, 2, 3], &[2, 3, 4]), vec![1]);
/// ```
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let exclude = to_set(b);
    to_set(a)
        .into_iter()
        .filter(|e| !exclude.contains(e))
        .collect()
}
