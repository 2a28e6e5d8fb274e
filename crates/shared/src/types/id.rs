//! Typed IDs for type-safe entity references.
//!
//! Journal and posting identifiers are generated by the caller (the entry form,
//! the receipts/payments shortcuts, or the persistence layer), so they wrap
//! plain strings rather than UUIDs. Wrapping them keeps a `PostingId` from being
//! passed where a `JournalEntryId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a fresh random ID (UUID v4 rendered as a string).
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Wraps an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty or whitespace only.
            #[must_use]
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

typed_id!(JournalEntryId, "Unique identifier for a journal entry.");
typed_id!(
    PostingId,
    "Identifier for a posting, unique within its journal entry."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = JournalEntryId::generate();
        let b = JournalEntryId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_blank_detection() {
        assert!(PostingId::new("").is_blank());
        assert!(PostingId::new("   ").is_blank());
        assert!(!PostingId::new("p-1").is_blank());
    }

    #[test]
    fn test_display_and_conversions() {
        let id = JournalEntryId::from("1718000000000");
        assert_eq!(id.to_string(), "1718000000000");
        assert_eq!(id.clone().into_inner(), "1718000000000");
        assert_eq!(JournalEntryId::from("x".to_string()), JournalEntryId::new("x"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = PostingId::new("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
        let back: PostingId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
