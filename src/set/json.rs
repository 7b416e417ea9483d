//! JSON entry points for [`Set`].

use std::hash::Hash;

use serde::de::{Deserialize, DeserializeOwned};
use serde::ser::Serialize;

use super::Set;
use crate::error::SetError;

impl<E: Serialize> Set<E> {
    /// Encodes the set as JSON.
    ///
    /// A zero set becomes `null`; any other set becomes an array whose
    /// element order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Encode`] if an element fails to serialize.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let zero: Set<i32> = Set::new();
    /// assert_eq!(zero.to_json().unwrap(), "null");
    ///
    /// let empty: Set<i32> = Set::of([]);
    /// assert_eq!(empty.to_json().unwrap(), "[]");
    /// ```
    pub fn to_json(&self) -> Result<String, SetError> {
        serde_json::to_string(self).map_err(SetError::Encode)
    }
}

impl<E: DeserializeOwned + Hash + Eq> Set<E> {
    /// Decodes a set from JSON: `null` gives a zero set, an array gives an
    /// allocated set.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`] for malformed JSON or any value that is
    /// neither an array nor `null`.
    pub fn from_json(text: &str) -> Result<Self, SetError> {
        serde_json::from_str(text).map_err(SetError::Decode)
    }

    /// Replaces the contents of the set with the JSON in `text`.
    ///
    /// The set is cleared before decoding starts. `null` turns it into a
    /// zero set; an array (even an empty one) leaves it allocated.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Decode`] for malformed JSON, any value that is
    /// neither an array nor `null`, or trailing characters. The set is left
    /// empty in that case and its previous contents are lost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zeroset::Set;
    ///
    /// let mut set = Set::of([1, 2, 3]);
    /// set.replace_from_json("[4]").unwrap();
    /// assert!(set.equal(&Set::of([4])));
    ///
    /// assert!(set.replace_from_json("{}").is_err());
    /// assert!(set.is_empty());
    /// ```
    pub fn replace_from_json(&mut self, text: &str) -> Result<(), SetError> {
        let mut deserializer = serde_json::Deserializer::from_str(text);
        let result = Self::deserialize_in_place(&mut deserializer, self)
            .and_then(|()| deserializer.end());
        result.map_err(|error| {
            self.clear();
            SetError::Decode(error)
        })
    }
}
