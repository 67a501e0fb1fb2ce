//! Newtype keys for catalog attributes.
//!
//! Product identifiers and the string-valued facet vocabularies (colors,
//! collections, size tokens) each get their own type so a color can never
//! be passed where a collection is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generates a string newtype for one catalog attribute.
macro_rules! define_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

define_key!(
    /// Unique product identifier.
    ProductId
);
define_key!(
    /// Product color, e.g. `black`.
    Color
);
define_key!(
    /// Named product collection, e.g. `summer-2024`.
    Collection
);
define_key!(
    /// Bare size label such as `L`, meaningful only within a product family.
    SizeToken
);

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}
