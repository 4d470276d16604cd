//! nullable-core library.
//!
//! Tri-state JSON fields: a field is either **absent** (key not mentioned),
//! an explicit **null**, or holds a **value**. [`Value<T>`] carries any
//! serde payload, with no `Default` required of it; [`Time`] is the
//! timestamp specialization built on the [`NullTime`] scalar, keeping the
//! offset a timestamp was written with.
//!
//! # Struct fields
//!
//! Serde decides whether to emit a key before the field's own `Serialize`
//! runs, so omission of absent fields is requested on the owning struct:
//!
//! ```
//! use nullable_core::{Time, Value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Person {
//!     name: String,
//!     #[serde(default, skip_serializing_if = "Time::is_absent")]
//!     birthday: Time,
//!     #[serde(default, skip_serializing_if = "Value::is_absent")]
//!     age: Value<i64>,
//! }
//!
//! let p: Person = serde_json::from_str(r#"{"name":"Ann","age":null}"#).unwrap();
//! assert!(p.birthday.is_absent());
//! assert!(p.age.is_null());
//! assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"name":"Ann","age":null}"#);
//! ```
//!
//! Without `default` a missing key is a decode error; without
//! `skip_serializing_if` an absent field is written as `null`.
//!
//! # Byte hooks
//!
//! [`Value::marshal_json`] / [`Value::unmarshal_json`] (and the same pair on
//! [`Time`]) work on raw field bytes: absent encodes to zero bytes, and
//! decoding always resets the field before reading its input.
//!
//! # Conventions
//!
//! - **Errors**: [`Error`] wraps the `serde_json` error unchanged.
//! - **Logging**: `tracing` at `trace`/`debug` only; the library never
//!   installs a subscriber.

#![forbid(unsafe_code)]

pub mod error;
pub mod scalar;
pub mod time;
pub mod tristate;
pub mod value;

pub use error::{Error, ErrorKind};
pub use scalar::{Null, NullTime};
pub use time::Time;
pub use tristate::{FieldState, NULL_TOKEN};
pub use value::Value;
