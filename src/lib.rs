//! # zeroset
//!
//! A generic hash set whose default value is ready to use, with
//! value-semantics set algebra and JSON round-tripping.
//!
//! ## Overview
//!
//! - **[`Set`]**: an unordered collection of unique elements. Its zero value
//!   allocates nothing until an element is stored, and stays distinguishable
//!   from an allocated empty set through [`Set::is_zero`] and serialization.
//! - **Set algebra**: [`union`], [`intersection`], [`difference`] and
//!   [`collect`], plus the `|`, `&` and `-` operators on borrowed sets.
//! - **Extremal values**: [`max`], [`min`], [`max_by`], [`min_by`].
//!
//! Sets are compared with [`Set::equal`]; `==` is deliberately unavailable.
//! A `Set` is not synchronized; wrap it in a lock to share it across threads.
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Set`]
//! - `json` (default): [`Set::to_json`], [`Set::from_json`],
//!   [`Set::replace_from_json`] and [`SetError`]
//! - `fxhash`: hash elements with `rustc-hash`
//! - `ahash`: hash elements with `ahash`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use zeroset::prelude::*;
//!
//! let s1 = set![1, 2, 3, 4];
//! let s2 = set![3, 4, 5, 6];
//!
//! assert!(union([&s1, &s2]).equal(&set![1, 2, 3, 4, 5, 6]));
//! assert!(intersection([&s1, &s2]).equal(&set![3, 4]));
//! assert_eq!(*max(&s2), 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use zeroset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Set;
    pub use crate::algebra::*;
    pub use crate::extremal::*;
    pub use crate::set;

    #[cfg(feature = "json")]
    pub use crate::SetError;
}

mod algebra;
#[cfg(feature = "json")]
mod error;
mod extremal;
pub mod hash;
pub mod set;

pub use algebra::{collect, difference, intersection, union};
#[cfg(feature = "json")]
pub use error::SetError;
pub use extremal::{max, max_by, min, min_by};
pub use set::{IntoIter, Iter, Set};

/// Creates an allocated [`Set`] holding the given elements.
///
/// `set![]` gives an allocated empty set, the same as `Set::of([])`.
///
/// # Examples
///
/// ```rust
/// use zeroset::set;
///
/// let numbers = set![1, 2, 2, 3];
/// assert_eq!(numbers.len(), 3);
///
/// let empty: zeroset::Set<i32> = set![];
/// assert!(!empty.is_zero());
/// ```
#[macro_export]
macro_rules! set {
    ($($element:expr),* $(,)?) => {
        $crate::Set::of([$($element),*])
    };
}
