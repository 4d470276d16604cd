//! Two-state nullable scalars.
//!
//! These follow the conventional "value plus validity flag" shape used by
//! database bindings: a payload slot that is meaningful only while the
//! scalar is valid. The slot is an `Option`, so `valid` is exactly
//! `is_some()` and a null scalar needs no placeholder payload. They carry no
//! JSON behavior of their own; the tri-state wrappers in [`crate::value`]
//! and [`crate::time`] embed them and add presence tracking on top.

use chrono::{DateTime, FixedOffset};

/// A nullable payload of arbitrary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Null<T> {
    /// The payload; `None` is SQL-style NULL.
    pub value: Option<T>,
}

impl<T> Null<T> {
    /// A valid scalar holding `value`.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self { value: None }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Null<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

/// A nullable timestamp that keeps the offset it was created or parsed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NullTime {
    pub time: Option<DateTime<FixedOffset>>,
}

impl NullTime {
    #[must_use]
    pub const fn new(time: DateTime<FixedOffset>) -> Self {
        Self { time: Some(time) }
    }

    #[must_use]
    pub const fn null() -> Self {
        Self { time: None }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.time.is_some()
    }

    #[must_use]
    pub const fn as_option(&self) -> Option<&DateTime<FixedOffset>> {
        self.time.as_ref()
    }

    #[must_use]
    pub const fn into_option(self) -> Option<DateTime<FixedOffset>> {
        self.time
    }
}

impl From<Option<DateTime<FixedOffset>>> for NullTime {
    fn from(time: Option<DateTime<FixedOffset>>) -> Self {
        Self { time }
    }
}
