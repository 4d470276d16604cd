//! Tri-state timestamp.
//!
//! Same three-state contract as [`Value`](crate::Value), built on the
//! [`NullTime`] scalar. Timestamps keep the offset they were created or
//! decoded with, so `+07:00` input re-encodes as `+07:00`. They are written
//! in chrono's RFC 3339 form (`Z` for a zero offset, fractional seconds only
//! when non-zero).

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::Error;
use crate::scalar::NullTime;
use crate::tristate::{FieldState, NULL_TOKEN};

/// A timestamp field that remembers whether it was absent, explicitly null,
/// or set.
///
/// Annotate struct fields with
/// `#[serde(default, skip_serializing_if = "Time::is_absent")]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Time {
    pub null_time: NullTime,
    pub present: bool,
}

impl Time {
    /// A present, valid field holding `time` in its own offset. The epoch
    /// and any other instant are ordinary payloads.
    #[must_use]
    pub fn of<Tz: TimeZone>(time: DateTime<Tz>) -> Self {
        Self {
            null_time: NullTime::new(time.fixed_offset()),
            present: true,
        }
    }

    /// A present field with an explicit null.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            null_time: NullTime::null(),
            present: true,
        }
    }

    #[must_use]
    pub const fn state(&self) -> FieldState {
        FieldState::classify(self.present, self.null_time.is_valid())
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.state(), FieldState::Absent)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.state(), FieldState::Null)
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.state(), FieldState::Value)
    }

    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.present
    }

    #[must_use]
    pub const fn get(&self) -> Option<&DateTime<FixedOffset>> {
        if self.present {
            self.null_time.as_option()
        } else {
            None
        }
    }

    #[must_use]
    pub const fn into_option(self) -> Option<DateTime<FixedOffset>> {
        if self.present {
            self.null_time.into_option()
        } else {
            None
        }
    }

    /// Encode the field as JSON bytes: empty when absent, `null` when null,
    /// a quoted RFC 3339 string otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the timestamp encoder fails.
    pub fn marshal_json(&self) -> Result<Vec<u8>, Error> {
        match self.get() {
            Some(time) => serde_json::to_vec(time).map_err(Error::Encode),
            None if self.present => Ok(NULL_TOKEN.to_vec()),
            None => Ok(Vec::new()),
        }
    }

    /// Decode JSON bytes into the field, replacing whatever it held.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when non-null input is not an RFC 3339
    /// string. The field is left absent in that case.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), Error> {
        *self = Self::default();

        if data.is_empty() {
            trace!("empty input, timestamp left absent");
            return Ok(());
        }
        if data == NULL_TOKEN {
            trace!("explicit null timestamp");
            self.present = true;
            return Ok(());
        }

        let time = serde_json::from_slice::<DateTime<FixedOffset>>(data).map_err(|err| {
            debug!(error = %err, len = data.len(), "timestamp decode failed, field left absent");
            Error::Decode(err)
        })?;
        *self = Self::of(time);
        Ok(())
    }
}

impl<Tz: TimeZone> From<Option<DateTime<Tz>>> for Time {
    fn from(value: Option<DateTime<Tz>>) -> Self {
        value.map_or_else(Self::null, Self::of)
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(time) => serializer.serialize_some(time),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<DateTime<FixedOffset>>::deserialize(deserializer)?.map_or_else(Self::null, Self::of))
    }
}
