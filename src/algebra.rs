//! Set algebra over one or more [`Set`]s.
//!
//! Every function here reads its inputs and builds a new set; no input is
//! modified. The degenerate cases return a zero set:
//!
//! - [`collect`] over an empty sequence
//! - [`union`] of no sets
//! - [`intersection`] of fewer than two sets
//!
//! Otherwise the result is allocated, even when it ends up empty.
//!
//! # Examples
//!
//! ```rust
//! use zeroset::{Set, difference, intersection, union};
//!
//! let s1 = Set::of([1, 2, 3, 4]);
//! let s2 = Set::of([3, 4, 5, 6]);
//!
//! assert_eq!(union([&s1, &s2]).to_string(), "{1 2 3 4 5 6}");
//! assert_eq!(intersection([&s1, &s2]).to_string(), "{3 4}");
//! assert_eq!(difference(s1, [&s2]).to_string(), "{1 2}");
//! ```

use std::hash::Hash;
use std::ops::{BitAnd, BitOr, Sub};

use crate::Set;

// =============================================================================
// Free Functions
// =============================================================================

/// Collects the values of `seq` into a new set.
///
/// An empty `seq` yields a zero set, unlike [`Set::of`].
///
/// # Examples
///
/// ```rust
/// use zeroset::collect;
///
/// assert!(collect(std::iter::empty::<i32>()).is_zero());
/// assert_eq!(collect([2, 1, 2]).len(), 2);
/// ```
pub fn collect<E, I>(seq: I) -> Set<E>
where
    E: Hash + Eq,
    I: IntoIterator<Item = E>,
{
    seq.into_iter().collect()
}

/// Returns a new set with the elements that appear in at least one of `sets`.
///
/// No sets at all yields a zero set.
pub fn union<'a, E, I>(sets: I) -> Set<E>
where
    E: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a Set<E>>,
{
    let mut sets = sets.into_iter().peekable();
    let Some(first) = sets.peek() else {
        return Set::new();
    };
    let mut result = Set::with_capacity(first.len());
    for set in sets {
        result.add_seq(set.iter().cloned());
    }
    result
}

/// Returns a new set with the elements common to all of `sets`.
///
/// Intersection needs at least two operands: zero or one set yields a
/// zero set. The first set is walked once and each of its elements is
/// probed in the remaining sets, stopping at the first set that lacks it.
pub fn intersection<'a, E, I>(sets: I) -> Set<E>
where
    E: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a Set<E>>,
{
    let sets: Vec<&Set<E>> = sets.into_iter().collect();
    let [first, rest @ ..] = sets.as_slice() else {
        return Set::new();
    };
    if rest.is_empty() {
        return Set::new();
    }

    let mut result = Set::with_capacity(0);
    for element in *first {
        if rest.iter().all(|set| set.contains(element)) {
            result.insert(element.clone());
        }
    }
    result
}

/// Returns the elements of `set` that are absent from every set in `others`.
///
/// `set` is taken by value. When `others` is empty it is handed back
/// unchanged, without copying; otherwise its elements are moved into a new
/// allocated set.
///
/// # Examples
///
/// ```rust
/// use zeroset::{Set, difference};
///
/// let set = Set::of([1, 2, 3]);
/// let unchanged = difference(set, []);
/// assert!(unchanged.equal(&Set::of([1, 2, 3])));
/// ```
pub fn difference<'a, E, I>(set: Set<E>, others: I) -> Set<E>
where
    E: Hash + Eq + 'a,
    I: IntoIterator<Item = &'a Set<E>>,
{
    let others: Vec<&Set<E>> = others.into_iter().collect();
    if others.is_empty() {
        return set;
    }

    let mut result = Set::with_capacity(0);
    for element in set {
        if !others.iter().any(|other| other.contains(&element)) {
            result.insert(element);
        }
    }
    result
}

// =============================================================================
// Operators
// =============================================================================

/// `&a | &b` is the union of two sets.
impl<E: Clone + Hash + Eq> BitOr<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    fn bitor(self, other: &Set<E>) -> Set<E> {
        union([self, other])
    }
}

/// `&a & &b` is the intersection of two sets.
impl<E: Clone + Hash + Eq> BitAnd<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    fn bitand(self, other: &Set<E>) -> Set<E> {
        intersection([self, other])
    }
}

/// `&a - &b` holds the elements of `a` that are not in `b`.
impl<E: Clone + Hash + Eq> Sub<&Set<E>> for &Set<E> {
    type Output = Set<E>;

    fn sub(self, other: &Set<E>) -> Set<E> {
        let mut result = Set::with_capacity(0);
        result.add_seq(
            self.iter()
                .filter(|element| !other.contains(*element))
                .cloned(),
        );
        result
    }
}

// =============================================================================
// Tests
// =============================================================================
