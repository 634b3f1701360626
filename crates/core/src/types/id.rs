//! Newtype IDs for type-safe entity references.
//!
//! Catalog entities are keyed by human-readable slugs (`"solene"`, `"forest"`),
//! created with the `define_slug!` macro. Cart lines are keyed by a synthetic
//! [`LineId`] generated when the line is first inserted, so the same product
//! with a different variant can sit in the cart as a separate row.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Macro to define a type-safe slug wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use naia_core::define_slug;
/// define_slug!(ShelfId);
/// define_slug!(BinId);
///
/// let shelf = ShelfId::new("north");
/// let bin = BinId::new("north");
///
/// assert_eq!(shelf.as_str(), bin.as_str());
/// // These are different types, so this won't compile:
/// // let _: ShelfId = bin;
/// ```
#[macro_export]
macro_rules! define_slug {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new slug from any string-like value.
            #[must_use]
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Get the underlying slug.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(slug: &str) -> Self {
                Self(slug.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(slug: String) -> Self {
                Self(slug)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }
    };
}

define_slug!(ProductId);
define_slug!(VariantId);

/// Error parsing an identifier from user input.
#[derive(Debug, Error)]
pub enum IdError {
    #[error("invalid line id: {0}")]
    InvalidLineId(#[from] uuid::Error),
}

/// Synthetic key of a cart line.
///
/// Distinct from [`ProductId`]: two lines may reference the same product with
/// different variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(Uuid);

impl LineId {
    /// Generate a fresh random line ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl ::core::fmt::Display for LineId {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_display_and_eq() {
        let id = ProductId::new("solene");
        assert_eq!(id.to_string(), "solene");
        assert!(id == *"solene");
        assert_eq!(ProductId::from("solene"), id);
    }

    #[test]
    fn test_slug_serializes_transparently() {
        let json = serde_json::to_string(&VariantId::new("forest")).unwrap();
        assert_eq!(json, "\"forest\"");
    }

    #[test]
    fn test_line_id_parse_roundtrip() {
        let id = LineId::generate();
        let parsed: LineId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_line_id_rejects_garbage() {
        let result = "not-a-line".parse::<LineId>();
        assert!(matches!(result, Err(IdError::InvalidLineId(_))));
    }

    #[test]
    fn test_generated_line_ids_differ() {
        assert_ne!(LineId::generate(), LineId::generate());
    }
}
