//! Maximum and minimum elements of a [`Set`].
//!
//! Asking an empty set for its maximum or minimum is a programming error:
//! all four functions panic in that case.

use std::cmp::Ordering;

use crate::Set;

/// Returns the element that wins every comparison against the others,
/// keeping the first one met on ties.
fn extremum<'a, E, F>(set: &'a Set<E>, operation: &str, mut compare: F, wanted: Ordering) -> &'a E
where
    F: FnMut(&E, &E) -> Ordering,
{
    let mut elements = set.iter();
    let Some(mut best) = elements.next() else {
        panic!("{operation}: empty set");
    };
    for element in elements {
        if compare(element, best) == wanted {
            best = element;
        }
    }
    best
}

/// Returns the greatest element of `set`.
///
/// # Panics
///
/// Panics if `set` is empty.
///
/// # Examples
///
/// ```rust
/// use zeroset::{Set, max};
///
/// assert_eq!(*max(&Set::of([5, 1, 9, 3])), 9);
/// ```
pub fn max<E: Ord>(set: &Set<E>) -> &E {
    extremum(set, "max", Ord::cmp, Ordering::Greater)
}

/// Returns the greatest element of `set` according to `compare`.
///
/// When several elements are maximal under `compare`, the first one met
/// during iteration is returned. Iteration order is unspecified, so callers
/// must not rely on which one that is.
///
/// # Panics
///
/// Panics if `set` is empty.
pub fn max_by<E, F>(set: &Set<E>, compare: F) -> &E
where
    F: FnMut(&E, &E) -> Ordering,
{
    extremum(set, "max_by", compare, Ordering::Greater)
}

/// Returns the least element of `set`.
///
/// # Panics
///
/// Panics if `set` is empty.
///
/// # Examples
///
/// ```rust
/// use zeroset::{Set, min};
///
/// assert_eq!(*min(&Set::of([5, 1, 9, 3])), 1);
/// ```
pub fn min<E: Ord>(set: &Set<E>) -> &E {
    extremum(set, "min", Ord::cmp, Ordering::Less)
}

/// Returns the least element of `set` according to `compare`.
///
/// Ties resolve to the first minimal element met during iteration.
///
/// # Panics
///
/// Panics if `set` is empty.
pub fn min_by<E, F>(set: &Set<E>, compare: F) -> &E
where
    F: FnMut(&E, &E) -> Ordering,
{
    extremum(set, "min_by", compare, Ordering::Less)
}
