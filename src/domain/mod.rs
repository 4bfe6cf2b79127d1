//! Domain types for the catalog with strong typing.
//!
//! Ids are wrapped in newtypes so a `MovieId` can never be handed to a
//! function expecting a `CharacterId`. The store itself works with raw `i32`
//! keys; the wrappers live at the service boundary.

pub mod error;
pub mod relations;

pub use error::{CatalogError, EntityKind};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i32(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                i32::deserialize(deserializer).map(Self)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a Character.
    ///
    /// ```rust
    /// use cinedex::domain::CharacterId;
    ///
    /// let id = CharacterId::new(7);
    /// assert_eq!(id.value(), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    CharacterId
);

entity_id!(
    /// Unique identifier for a Movie.
    MovieId
);

entity_id!(
    /// Unique identifier for a Franchise.
    FranchiseId
);

/// Unwraps a slice of typed ids into the raw keys the store works with.
pub fn raw_ids<T: Copy + Into<i32>>(ids: &[T]) -> Vec<i32> {
    ids.iter().map(|id| (*id).into()).collect()
}
