//! The [`Set`] type: an unordered collection of unique elements.
//!
//! # Overview
//!
//! `Set` is a thin wrapper around a hash table mapping each element to `()`.
//! Its default value, the *zero set*, holds no table at all; the table is
//! created lazily by the first mutation that actually stores an element.
//!
//! - O(1) expected `contains`, `insert`, `remove`
//! - O(1) `len`, `is_empty`, `is_zero`
//! - O(n) `equal`, `clone`
//!
//! A zero set behaves exactly like an empty set everywhere except
//! [`Set::is_zero`] and serialization, where it becomes `null` instead of
//! an empty array.
//!
//! # Equality
//!
//! `Set` intentionally implements neither [`PartialEq`] nor [`Eq`]: a zero
//! set and an allocated empty set hold different representations but the
//! same elements. Compare sets with [`Set::equal`].
//!
//! # Examples
//!
//! ```rust
//! use zeroset::Set;
//!
//! let mut set: Set<i32> = Set::new();
//! assert!(set.is_zero());
//!
//! set.add([1, 2, 3]);
//! assert!(!set.is_zero());
//! assert!(set.contains(&2));
//! assert_eq!(set.to_string(), "{1 2 3}");
//!
//! assert!(set.equal(&Set::of([3, 2, 1])));
//! ```

mod iter;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "serde")]
mod serialization;

pub use iter::{IntoIter, Iter};

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use crate::hash::{DefaultHashBuilder, Table};

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// The default value is the zero set: empty and ready to use, with no
/// backing table allocated. Mutations allocate the table on demand.
///
/// `Set` is not synchronized. Sharing one instance between threads
/// requires external locking, e.g. a `Mutex<Set<E>>`.
///
/// # Time Complexity
///
/// | Operation      | Complexity            |
/// |----------------|-----------------------|
/// | `new`          | O(1), no allocation   |
/// | `contains`     | O(1) expected         |
/// | `insert`       | O(1) expected         |
/// | `remove`       | O(1) expected         |
/// | `len`          | O(1)                  |
/// | `equal`        | O(n)                  |
/// | `to_string`    | O(n log n)            |
///
/// # Examples
///
/// ```rust
/// use zeroset::Set;
///
/// let set = Set::of(["apple".to_string(), "pear".to_string()]);
/// assert!(set.contains("apple"));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone)]
pub struct Set<E> {
    table: Option<Table<E>>,
}

static_assertions::assert_not_impl_any!(Set<i32>: PartialEq, Eq, PartialOrd, Hash);
static_assertions::assert_not_impl_any!(Set<String>: PartialEq, Eq, PartialOrd, Hash);

impl<E> Set<E> {
    /// Creates a zero set. Nothing is allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_zero());
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { table: None }
    }

    /// Creates an allocated, empty set with room for at least `capacity`
    /// elements. The result is never a zero set.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: Some(Table::with_capacity_and_hasher(
                capacity,
                DefaultHashBuilder::default(),
            )),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// Zero sets and allocated empty sets both report `0`.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, Table::len)
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the backing table has never been allocated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let mut set: Set<i32> = Set::new();
    /// set.add([]);
    /// assert!(set.is_zero());
    ///
    /// set.add([1]);
    /// assert!(!set.is_zero());
    ///
    /// set.clear();
    /// assert!(!set.is_zero());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.table.is_none()
    }

    /// Removes all elements, keeping the allocated table.
    ///
    /// A zero set stays a zero set.
    pub fn clear(&mut self) {
        if let Some(table) = self.table.as_mut() {
            table.clear();
        }
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// The order is unspecified. Every call starts a fresh traversal of the
    /// current contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let set = Set::of([1, 2, 3]);
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.table.as_ref().map(Table::keys))
    }

    /// Reports whether at least one element satisfies `predicate`.
    ///
    /// The predicate is never invoked on an empty set.
    pub fn contains_func<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&E) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Allocates the backing table if this is still a zero set.
    fn table_mut(&mut self) -> &mut Table<E> {
        self.table.get_or_insert_with(Table::default)
    }
}

impl<E: Hash + Eq> Set<E> {
    /// Creates a set holding the unique elements of `values`.
    ///
    /// Duplicates collapse. Unlike [`collect`](crate::collect), the result
    /// is allocated even when `values` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let set = Set::of([1, 1, 2]);
    /// assert_eq!(set.len(), 2);
    ///
    /// let empty: Set<i32> = Set::of([]);
    /// assert!(!empty.is_zero());
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = E>>(values: I) -> Self {
        let values = values.into_iter();
        let mut set = Self::with_capacity(values.size_hint().0);
        set.add_seq(values);
        set
    }

    /// Inserts one element, returning `true` if it was not already present.
    pub fn insert(&mut self, element: E) -> bool {
        self.table_mut().insert(element, ()).is_none()
    }

    /// Inserts every element of `values`.
    ///
    /// Elements already present are left alone. An empty array is a no-op
    /// and does not allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add([1, 2]);
    /// set.add([2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn add<const N: usize>(&mut self, values: [E; N]) {
        self.add_seq(values);
    }

    /// Drains `seq` once, inserting each element in iteration order.
    pub fn add_seq<I: IntoIterator<Item = E>>(&mut self, seq: I) {
        for element in seq {
            self.insert(element);
        }
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let set = Set::of(["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table
            .as_ref()
            .is_some_and(|table| table.contains_key(element))
    }

    /// Reports whether any element of `seq` is in the set.
    ///
    /// Stops pulling from `seq` at the first hit.
    pub fn contains_any<I>(&self, seq: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        seq.into_iter()
            .any(|element| self.contains::<E>(element.borrow()))
    }

    /// Reports whether every element of `seq` is in the set.
    ///
    /// Stops pulling from `seq` at the first miss. An empty `seq` yields `true`.
    pub fn contains_all<I>(&self, seq: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        seq.into_iter()
            .all(|element| self.contains::<E>(element.borrow()))
    }

    /// Removes one element, returning `true` if it was present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table
            .as_mut()
            .is_some_and(|table| table.remove(element).is_some())
    }

    /// Removes every element of `values` that is present.
    ///
    /// Returns the number of elements actually removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// assert_eq!(set.delete([2, 3, 4]), 2);
    /// assert!(set.equal(&Set::of([1])));
    /// ```
    pub fn delete<const N: usize>(&mut self, values: [E; N]) -> usize {
        let before = self.len();
        for element in &values {
            self.remove(element);
        }
        before - self.len()
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// Returns the number of elements removed.
    pub fn delete_func<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        let Some(table) = self.table.as_mut() else {
            return 0;
        };
        let before = table.len();
        table.retain(|element, _| !predicate(element));
        before - table.len()
    }

    /// Removes every element of the set that also appears in `seq`.
    ///
    /// Returns the number of elements removed; repeats within `seq` are
    /// counted once.
    pub fn delete_seq<I>(&mut self, seq: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let mut removed = 0;
        for element in seq {
            if self.remove::<E>(element.borrow()) {
                removed += 1;
            }
        }
        removed
    }

    /// Reports whether both sets hold exactly the same elements.
    ///
    /// A zero set equals an allocated empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let zero: Set<i32> = Set::new();
    /// let empty: Set<i32> = Set::of([]);
    /// assert!(zero.equal(&empty));
    /// assert!(Set::of([1, 2]).equal(&Set::of([2, 1])));
    /// ```
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Removes and returns an arbitrary element, or `None` if the set is empty.
    ///
    /// Which element is chosen is unspecified.
    pub fn pop(&mut self) -> Option<E> {
        let table = self.table.as_mut()?;
        table
            .extract_if(|_, _| true)
            .next()
            .map(|(element, ())| element)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for Set<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Collects into a new set. An empty iterator yields a zero set.
impl<E: Hash + Eq> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add_seq(iter);
        set
    }
}

impl<E: Hash + Eq> Extend<E> for Set<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add_seq(iter);
    }
}

impl<'a, E: Hash + Eq + Copy + 'a> Extend<&'a E> for Set<E> {
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.add_seq(iter.into_iter().copied());
    }
}

impl<E: Hash + Eq, const N: usize> From<[E; N]> for Set<E> {
    fn from(values: [E; N]) -> Self {
        Self::of(values)
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.table.map(Table::into_keys))
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders `{a b c}` with the textual forms sorted, so output is reproducible.
impl<E: fmt::Display> fmt::Display for Set<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered: Vec<String> = self.iter().map(ToString::to_string).collect();
        rendered.sort_unstable();
        write!(formatter, "{{{}}}", rendered.join(" "))
    }
}

// =============================================================================
// Tests
// =============================================================================
