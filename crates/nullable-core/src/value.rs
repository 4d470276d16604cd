//! Generic tri-state container.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::Error;
use crate::scalar::Null;
use crate::tristate::{FieldState, NULL_TOKEN};

/// A struct field that remembers whether it was absent, explicitly null, or
/// set to a concrete `T`.
///
/// The payload lives in the embedded [`Null`] scalar, whose validity is
/// whether it holds one; `present` records whether the field was mentioned
/// at all. `T` needs no `Default`: an absent or null field holds no payload.
///
/// When used as a struct field, annotate it so absent values are omitted and
/// missing keys decode as absent:
///
/// ```
/// use nullable_core::Value;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Patch {
///     #[serde(default, skip_serializing_if = "Value::is_absent")]
///     age: Value<i64>,
/// }
///
/// let patch: Patch = serde_json::from_str("{}").unwrap();
/// assert!(patch.age.is_absent());
/// assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value<T> {
    pub null: Null<T>,
    pub present: bool,
}

impl<T> Value<T> {
    /// A present, valid field holding `value`.
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self {
            null: Null::new(value),
            present: true,
        }
    }

    /// A present field with an explicit null.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            null: Null::null(),
            present: true,
        }
    }

    #[must_use]
    pub const fn state(&self) -> FieldState {
        FieldState::classify(self.present, self.null.is_valid())
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

    /// The payload, if the field holds one.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        if self.present {
            self.null.as_option()
        } else {
            None
        }
    }

    /// Collapse to a two-state option; absent and null both become `None`.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        if self.present {
            self.null.into_option()
        } else {
            None
        }
    }
}

impl<T> Default for Value<T> {
    /// The absent state.
    fn default() -> Self {
        Self {
            null: Null::null(),
            present: false,
        }
    }
}

impl<T: Serialize> Value<T> {
    /// Encode the field as JSON bytes.
    ///
    /// Absent fields produce zero bytes (not `null`) so a caller can drop
    /// the key; null fields produce `null`; values are encoded by the
    /// payload's own `Serialize`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the payload encoder fails.
    pub fn marshal_json(&self) -> Result<Vec<u8>, Error> {
        match self.get() {
            Some(value) => serde_json::to_vec(value).map_err(Error::Encode),
            None if self.present => Ok(NULL_TOKEN.to_vec()),
            None => Ok(Vec::new()),
        }
    }
}

impl<T: DeserializeOwned> Value<T> {
    /// Decode JSON bytes into the field, replacing whatever it held.
    ///
    /// Empty input leaves the field absent, the exact bytes `null` make it
    /// an explicit null, and anything else is decoded as a `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when non-null input is not a valid `T`. The
    /// field is left absent in that case.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), Error> {
        *self = Self::default();

        if data.is_empty() {
            trace!("empty input, field left absent");
            return Ok(());
        }
        if data == NULL_TOKEN {
            trace!("explicit null");
            self.present = true;
            return Ok(());
        }

        let value = serde_json::from_slice::<T>(data).map_err(|err| {
            debug!(error = %err, len = data.len(), "payload decode failed, field left absent");
            Error::Decode(err)
        })?;
        *self = Self::of(value);
        Ok(())
    }
}

impl<T> From<Option<T>> for Value<T> {
    /// `None` becomes an explicit null, never absent.
    fn from(value: Option<T>) -> Self {
        Self {
            null: Null::from(value),
            present: true,
        }
    }
}

// Serde cannot drop a key from inside the field's own `Serialize`; absent
// and null both write `null` here and omission is left to
// `skip_serializing_if = "Value::is_absent"` on the owning struct.
impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

// Only reached when the key exists; a missing key is handled by
// `#[serde(default)]` and stays absent.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de;
    use std::collections::HashMap;

    /// No `Default`, no zero value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    enum Color {
        Red,
        Blue,
    }

    /// Wire form is a string like `"21C"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Celsius(i32);

    impl Serialize for Celsius {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&format_args!("{}C", self.0))
        }
    }

    impl<'de> Deserialize<'de> for Celsius {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.strip_suffix('C')
                .and_then(|n| n.parse().ok())
                .map(Self)
                .ok_or_else(|| de::Error::custom(format!("bad temperature {raw:?}")))
        }
    }

    #[test]
    fn of_yields_value_state() {
        for v in [1, 0, -7] {
            let got = Value::of(v);
            assert_eq!(
                got,
                Value {
                    null: Null::new(v),
                    present: true
                }
            );
            assert_eq!(got.state(), FieldState::Value);
        }
    }

    #[test]
    fn default_is_absent() {
        let v = Value::<i32>::default();
        assert!(v.is_absent());
        assert!(!v.is_present());
        assert_eq!(v.get(), None);
    }

    #[test]
    fn marshal_absent_is_empty() {
        let got = Value::<i32>::default().marshal_json().expect("marshal");
        assert!(got.is_empty());
    }

    #[test]
    fn marshal_null() {
        let got = Value::<i32>::null().marshal_json().expect("marshal");
        assert_eq!(got, b"null");
    }

    #[test]
    fn marshal_value() {
        let got = Value::of(42).marshal_json().expect("marshal");
        assert_eq!(got, b"42");
    }

    #[test]
    fn marshal_ignores_stray_valid_flag_when_absent() {
        let v = Value {
            null: Null::new(5),
            present: false,
        };
        assert!(v.marshal_json().expect("marshal").is_empty());
    }

    #[test]
    fn marshal_encoder_failure_is_encode_error() {
        // JSON object keys must be strings.
        let map = HashMap::from([(vec![1_u8], 1)]);
        let expected = serde_json::to_vec(&map).expect_err("byte-vector keys are rejected");

        let err = Value::of(map).marshal_json().expect_err("encoder fails");
        assert_eq!(err.kind(), crate::ErrorKind::Encode);
        assert_eq!(err.to_string(), expected.to_string());
        assert_eq!(err.into_inner().to_string(), expected.to_string());
    }

    #[test]
    fn marshal_uses_payload_serialize() {
        let got = Value::of(Celsius(21)).marshal_json().expect("marshal");
        assert_eq!(got, br#""21C""#);
        assert_eq!(serde_json::to_string(&Value::of(Celsius(-4))).expect("ser"), r#""-4C""#);
    }

    #[test]
    fn unmarshal_uses_payload_deserialize() {
        let mut v = Value::<Celsius>::default();
        v.unmarshal_json(br#""21C""#).expect("custom form decodes");
        assert_eq!(v, Value::of(Celsius(21)));

        let err = v.unmarshal_json(b"21").expect_err("bare number is not the custom form");
        assert_eq!(err.kind(), crate::ErrorKind::Decode);
        assert!(v.is_absent());
    }

    #[test]
    fn payload_without_default() {
        let mut v = Value::of(Color::Red);
        v.unmarshal_json(br#""Blue""#).expect("variant decodes");
        assert_eq!(v.get(), Some(&Color::Blue));

        v.unmarshal_json(b"null").expect("null is accepted");
        assert!(v.is_null());
        assert_eq!(v.null.value, None);

        assert!(v.unmarshal_json(br#""Green""#).is_err());
        assert!(v.is_absent());

        assert!(Value::<Color>::null().is_null());
        assert_eq!(Value::from(Some(Color::Red)), Value::of(Color::Red));
        let back: Value<Color> = serde_json::from_str("null").expect("de");
        assert!(back.is_null());
    }

    #[test]
    fn unmarshal_empty_is_absent() {
        let mut v = Value::<String>::default();
        v.unmarshal_json(b"").expect("empty input is accepted");
        assert!(!v.present);
        assert!(!v.null.is_valid());
    }

    #[test]
    fn unmarshal_null_is_explicit_null() {
        let mut v = Value::<String>::default();
        v.unmarshal_json(b"null").expect("null is accepted");
        assert!(v.present);
        assert!(!v.null.is_valid());
        assert!(v.is_null());
    }

    #[test]
    fn unmarshal_value() {
        let mut v = Value::<String>::default();
        v.unmarshal_json(br#""hello""#).expect("string decodes");
        assert_eq!(v, Value::of("hello".to_string()));
    }

    #[test]
    fn unmarshal_invalid_errors_and_leaves_absent() {
        let mut v = Value::of("stale".to_string());
        let err = v.unmarshal_json(b"invalid").expect_err("not json");
        assert_eq!(err.kind(), crate::ErrorKind::Decode);
        assert!(v.is_absent());
        assert_eq!(v.null.value, None);
    }

    #[test]
    fn unmarshal_wrong_type_errors() {
        let mut v = Value::<i64>::default();
        assert!(v.unmarshal_json(br#""42""#).is_err());
        assert!(v.is_absent());
    }

    #[test]
    fn unmarshal_empty_resets_previous_value() {
        let mut v = Value::<i64>::default();
        v.unmarshal_json(b"7").expect("decode");
        assert!(v.is_valid());

        v.unmarshal_json(b"").expect("empty input is accepted");
        assert!(v.is_absent());
        assert_eq!(v.null.value, None);
    }

    #[test]
    fn padded_null_goes_to_payload_decoder() {
        let mut v = Value::<i64>::default();
        assert!(v.unmarshal_json(b" null").is_err());
        assert!(v.is_absent());

        let mut o = Value::<Option<i64>>::default();
        o.unmarshal_json(b" null").expect("Option<T> accepts null");
        assert_eq!(o.get(), Some(&None));
    }

    #[test]
    fn from_option_never_absent() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some(3)), Value::of(3));
    }

    #[test]
    fn into_option_collapses_null_and_absent() {
        assert_eq!(Value::of(1).into_option(), Some(1));
        assert_eq!(Value::<i32>::null().into_option(), None);
        assert_eq!(Value::<i32>::default().into_option(), None);
    }

    #[test]
    fn serde_standalone() {
        assert_eq!(serde_json::to_string(&Value::of(42)).expect("ser"), "42");
        assert_eq!(serde_json::to_string(&Value::<i32>::null()).expect("ser"), "null");

        let v: Value<i32> = serde_json::from_str("null").expect("de");
        assert!(v.is_null());
        let v: Value<i32> = serde_json::from_str("42").expect("de");
        assert_eq!(v, Value::of(42));
    }
}
