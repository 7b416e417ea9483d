//! Serde support for [`Set`].
//!
//! A zero set is written as `none` (JSON `null`); any allocated set, empty
//! or not, is written as `some(sequence)` (a JSON array). Decoding mirrors
//! this, so the zero/empty distinction survives a round trip.
//!
//! [`Deserialize::deserialize_in_place`] clears the target before decoding.
//! When decoding fails the previous contents are therefore gone, and any
//! elements decoded before the failure remain in the set.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::Set;
use crate::hash::Table;

/// Upper bound on the capacity reserved from an untrusted size hint.
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

// =============================================================================
// Serialize
// =============================================================================

/// Serializes the elements of an allocated table as a sequence.
struct Elements<'a, E>(&'a Table<E>);

impl<E: Serialize> Serialize for Elements<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for element in self.0.keys() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<E: Serialize> Serialize for Set<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.table {
            None => serializer.serialize_none(),
            Some(table) => serializer.serialize_some(&Elements(table)),
        }
    }
}

// =============================================================================
// Deserialize
// =============================================================================

/// Decodes `null` or a sequence into a fresh set.
struct SetVisitor<E> {
    marker: PhantomData<E>,
}

impl<E> SetVisitor<E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, E> Visitor<'de> for SetVisitor<E>
where
    E: Deserialize<'de> + Hash + Eq,
{
    type Value = Set<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence or null")
    }

    fn visit_none<Err>(self) -> Result<Self::Value, Err>
    where
        Err: de::Error,
    {
        Ok(Set::new())
    }

    fn visit_unit<Err>(self) -> Result<Self::Value, Err>
    where
        Err: de::Error,
    {
        Ok(Set::new())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut set = Set::new();
        deserializer.deserialize_seq(ElementsVisitor { place: &mut set })?;
        Ok(set)
    }
}

/// Decodes `null` or a sequence into an existing set.
struct InPlaceVisitor<'a, E> {
    place: &'a mut Set<E>,
}

impl<'de, E> Visitor<'de> for InPlaceVisitor<'_, E>
where
    E: Deserialize<'de> + Hash + Eq,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence or null")
    }

    fn visit_none<Err>(self) -> Result<Self::Value, Err>
    where
        Err: de::Error,
    {
        self.place.table = None;
        Ok(())
    }

    fn visit_unit<Err>(self) -> Result<Self::Value, Err>
    where
        Err: de::Error,
    {
        self.visit_none()
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(ElementsVisitor { place: self.place })
    }
}

/// Inserts every element of a sequence, allocating the table even when the
/// sequence is empty.
struct ElementsVisitor<'a, E> {
    place: &'a mut Set<E>,
}

impl<'de, E> Visitor<'de> for ElementsVisitor<'_, E>
where
    E: Deserialize<'de> + Hash + Eq,
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let table = self.place.table_mut();
        table.reserve(
            seq.size_hint()
                .unwrap_or(0)
                .min(MAX_PREALLOCATED_ELEMENTS),
        );
        while let Some(element) = seq.next_element()? {
            table.insert(element, ());
        }
        Ok(())
    }
}

impl<'de, E> Deserialize<'de> for Set<E>
where
    E: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(SetVisitor::new())
    }

    fn deserialize_in_place<D>(deserializer: D, place: &mut Self) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        place.clear();
        deserializer.deserialize_option(InPlaceVisitor { place })
    }
}

// =============================================================================
// Tests
// =============================================================================
