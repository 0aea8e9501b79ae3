//! Utilities to help with API request validation.

use derive_more::derive::{AsRef, Deref, Display};
use serde::Serialize;

/// A user handle, normalized to lowercase so lookups are case-insensitive. Never empty.
#[derive(
    Deref, AsRef, Display, Serialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub(crate) struct Identity(String);

impl Identity {
    /// Normalizes a user-inputted identity, or returns `None` if it's empty.
    ///
    /// Whitespace is kept as is: `" "` is a valid (if unusual) identity.
    pub(crate) fn normalize(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        Some(Self(raw.to_lowercase()))
    }

    /// Gets a reference to the identity string.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}
