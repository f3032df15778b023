//! Tri-state optional field
//!
//! JSON distinguishes a missing key from a key explicitly set to `null`.
//! `Option<T>` collapses the two, so record fields whose *presence* carries
//! meaning use [`FieldState`] instead.
//!
//! Use it with `#[serde(default, skip_serializing_if = "FieldState::is_absent")]`
//! so that an absent field stays absent on the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional field that remembers whether it was absent, null, or set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState<T> {
    /// The key was not present at all
    Absent,
    /// The key was present with an explicit `null`
    Null,
    /// The key was present with a value
    Value(T),
}

impl<T> FieldState<T> {
    /// True if the key was not present
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldState::Absent)
    }

    /// True if the key was present, even with `null`
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// True if the key was present with an explicit `null`
    pub fn is_null(&self) -> bool {
        matches!(self, FieldState::Null)
    }

    /// True if the key carries a non-null value
    pub fn has_value(&self) -> bool {
        matches!(self, FieldState::Value(_))
    }

    /// Borrow the value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldState::Value(v) => Some(v),
            FieldState::Absent | FieldState::Null => None,
        }
    }

    /// Convert to `Option`, merging absent and null
    pub fn into_option(self) -> Option<T> {
        match self {
            FieldState::Value(v) => Some(v),
            FieldState::Absent | FieldState::Null => None,
        }
    }
}

impl<T> Default for FieldState<T> {
    fn default() -> Self {
        FieldState::Absent
    }
}

impl<T> From<Option<T>> for FieldState<T> {
    /// A present key: `None` becomes `Null`
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => FieldState::Value(v),
            None => FieldState::Null,
        }
    }
}

impl<T: Serialize> Serialize for FieldState<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldState::Value(v) => serializer.serialize_some(v),
            // Absent is normally skipped by the container attribute
            FieldState::Absent | FieldState::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldState<T> {
    // Only called when the key is present; `#[serde(default)]` covers absence.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(FieldState::from)
    }
}
