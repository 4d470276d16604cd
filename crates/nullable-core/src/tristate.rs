//! Rules shared by every tri-state field.
//!
//! A tri-state field is in exactly one of three states:
//!
//! | state    | `present` | `valid` | JSON                          |
//! |----------|-----------|---------|-------------------------------|
//! | absent   | false     | false   | key omitted                   |
//! | null     | true      | false   | `"key": null`                 |
//! | value    | true      | true    | `"key": <payload>`            |
//!
//! `present = false, valid = true` is never produced by this crate and is
//! reported as [`FieldState::Absent`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The JSON null literal. Only this exact byte sequence is an explicit null
/// at the byte-hook level.
pub const NULL_TOKEN: &[u8] = b"null";

/// The observable state of a tri-state field, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    /// The key was not mentioned (or the caller never set the field).
    Absent,
    /// The key was mentioned with an explicit `null`.
    Null,
    /// The key holds a concrete payload.
    Value,
}

impl FieldState {
    /// Classify a pair of presence/validity flags.
    #[must_use]
    pub const fn classify(present: bool, valid: bool) -> Self {
        match (present, valid) {
            (false, _) => Self::Absent,
            (true, false) => Self::Null,
            (true, true) => Self::Value,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
