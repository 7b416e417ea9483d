//! Hasher selection for the backing table of [`Set`](crate::Set).
//!
//! By default the standard library's randomly seeded `RandomState` is used.
//! The `fxhash` and `ahash` features swap in faster, non-DoS-resistant
//! hashers. When both are enabled, `ahash` wins.

// =============================================================================
// Build Hasher Selection
// =============================================================================

/// The [`BuildHasher`](std::hash::BuildHasher) used by every [`Set`](crate::Set).
#[cfg(feature = "ahash")]
pub type DefaultHashBuilder = ahash::RandomState;

/// The [`BuildHasher`](std::hash::BuildHasher) used by every [`Set`](crate::Set).
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The [`BuildHasher`](std::hash::BuildHasher) used by every [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// Backing table: element to presence marker.
pub(crate) type Table<E> = std::collections::HashMap<E, (), DefaultHashBuilder>;
