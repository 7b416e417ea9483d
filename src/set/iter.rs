//! Iterators over the elements of a [`Set`](super::Set).

use std::collections::hash_map;
use std::iter::FusedIterator;

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over the elements of a [`Set`](super::Set).
///
/// Created by [`Set::iter`](super::Set::iter). A zero set yields nothing.
pub struct Iter<'a, E> {
    inner: Option<hash_map::Keys<'a, E, ()>>,
}

impl<'a, E> Iter<'a, E> {
    pub(super) const fn new(inner: Option<hash_map::Keys<'a, E, ()>>) -> Self {
        Self { inner }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the elements of a [`Set`](super::Set).
///
/// Created by `Set::into_iter`.
pub struct IntoIter<E> {
    inner: Option<hash_map::IntoKeys<E, ()>>,
}

impl<E> IntoIter<E> {
    pub(super) const fn new(inner: Option<hash_map::IntoKeys<E, ()>>) -> Self {
        Self { inner }
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}
