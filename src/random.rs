//! Random integers, element choice, reservoir sampling and shuffling.
//!
//! Every function takes the generator explicitly. For reproducible runs,
//! build one with [`create_rng`] and a fixed seed; otherwise pass
//! `&mut rand::rng()`.
//!
//! # Preconditions
//!
//! [`choose`] and [`choose_n`] panic when the input cannot satisfy the
//! request (empty slice, or fewer than `n` elements). Use [`try_choose`] and
//! [`try_choose_n`] to get a [`PreconditionError`] instead.

use std::borrow::Cow;

use rand::distr::uniform::SampleUniform;
use rand::Rng;
use tracing::debug;

use crate::error::PreconditionError;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++). The sequence is deterministic for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_toolkit::random::{create_rng, random};
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(random(1, 100, &mut a), random(1, 100, &mut b));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws a uniform value from the inclusive range `[min, max]`.
///
/// Reversed bounds are swapped, so `random(10, 1, rng)` behaves like
/// `random(1, 10, rng)`.
///
/// # Examples
/// ```
/// use u_toolkit::random::{create_rng, random};
/// let mut rng = create_rng(42);
/// let x = random(5_i64, -5, &mut rng);
/// assert!((-5..=5).contains(&x));
/// ```
pub fn random<T, R>(min: T, max: T, rng: &mut R) -> T
where
    T: SampleUniform + PartialOrd,
    R: Rng,
{
    let (lo, hi) = if min > max { (max, min) } else { (min, max) };
    rng.random_range(lo..=hi)
}

/// Picks one element uniformly, or returns an error for an empty slice.
pub fn try_choose<'a, T, R>(data: &'a [T], rng: &mut R) -> Result<&'a T, PreconditionError>
where
    R: Rng,
{
    if data.is_empty() {
        return Err(PreconditionError::EmptySequence { operation: "choose" });
    }
    Ok(&data[rng.random_range(0..data.len())])
}

/// Picks one element uniformly.
///
/// # Panics
/// Panics if `data` is empty.
pub fn choose<'a, T, R>(data: &'a [T], rng: &mut R) -> &'a T
where
    R: Rng,
{
    match try_choose(data, rng) {
        Ok(v) => v,
        Err(err) => panic!("{err}"),
    }
}

/// Selects `n` elements without replacement by reservoir sampling.
///
/// The reservoir is seeded with the first `n` elements; each later element
/// at index `i` replaces slot `r = random(0, i)` when `r < n`.
///
/// When `data.len() == n` the input slice itself is returned as
/// [`Cow::Borrowed`], in its original order. Otherwise the sample is a new
/// vector whose order is not meaningful.
///
/// # Complexity
/// Time: O(len), Space: O(n)
pub fn try_choose_n<'a, T, R>(
    data: &'a [T],
    n: usize,
    rng: &mut R,
) -> Result<Cow<'a, [T]>, PreconditionError>
where
    T: Clone,
    R: Rng,
{
    let len = data.len();
    if len < n {
        return Err(PreconditionError::NotEnoughElements { requested: n, len });
    }
    if len == n {
        debug!(n, "choose_n: sample covers whole input, returning it as-is");
        return Ok(Cow::Borrowed(data));
    }

    let mut reservoir = data[..n].to_vec();
    for (i, e) in data.iter().enumerate().skip(n) {
        let r = random(0, i, rng);
        if r < n {
            reservoir[r] = e.clone();
        }
    }
    Ok(Cow::Owned(reservoir))
}

/// Selects `n` elements without replacement by reservoir sampling.
///
/// See [`try_choose_n`] for the algorithm and the borrowed fast path.
///
/// # Panics
/// Panics if `data.len() < n`.
///
/// # Examples
/// ```
/// use u_toolkit::random::{choose_n, create_rng};
/// let mut rng = create_rng(42);
/// let data = [1, 2, 3, 4, 5, 6, 7, 8];
/// let picked = choose_n(&data, 3, &mut rng);
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|x| data.contains(x)));
/// ```
pub fn choose_n<'a, T, R>(data: &'a [T], n: usize, rng: &mut R) -> Cow<'a, [T]>
where
    T: Clone,
    R: Rng,
{
    match try_choose_n(data, n, rng) {
        Ok(sample) => sample,
        Err(err) => panic!("{err}"),
    }
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Iterates backwards, swapping each element with a uniformly chosen
/// earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use u_toolkit::random::{create_rng, shuffle};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle(&mut v, &mut rng);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, R>(data: &mut [T], rng: &mut R)
where
    R: Rng,
{
    for i in (0..data.len()).rev() {
        let j = rng.random_range(0..=i);
        data.swap(i, j);
    }
}

// ============================================================================
// Tests
// ============================================================================
