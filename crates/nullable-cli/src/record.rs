//! The sample `Person` record shared by `sample` and `inspect`.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use nullable_core::{Time, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Time::is_absent")]
    pub birthday: Time,
    #[serde(default, skip_serializing_if = "Value::is_absent")]
    pub age: Value<i64>,
}

/// Decode `inspect` input: one record or an array of them.
pub fn decode_people(raw: serde_json::Value) -> serde_json::Result<Vec<Person>> {
    if raw.is_array() {
        serde_json::from_value(raw)
    } else {
        serde_json::from_value(raw).map(|person| vec![person])
    }
}

/// Four records covering every field state: values, absent fields, an old
/// birthday, and explicit nulls.
pub fn sample_people(now: DateTime<FixedOffset>) -> Vec<Person> {
    let bob_birthday = Utc
        .with_ymd_and_hms(1980, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();

    vec![
        Person {
            name: "John Doe".to_string(),
            birthday: Time::of(now),
            age: Value::of(30),
        },
        Person {
            name: "Jane Smith".to_string(),
            birthday: Time::default(),
            age: Value::default(),
        },
        Person {
            name: "Bob Johnson".to_string(),
            birthday: Time::of(bob_birthday),
            age: Value::of(40),
        },
        Person {
            name: "Sam Lee".to_string(),
            birthday: Time::null(),
            age: Value::null(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nullable_core::FieldState;

    fn fixed_now() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp")
            .fixed_offset()
    }

    #[test]
    fn samples_cover_every_state() {
        let people = sample_people(fixed_now());
        let states: Vec<_> = people.iter().map(|p| p.age.state()).collect();
        assert_eq!(
            states,
            [
                FieldState::Value,
                FieldState::Absent,
                FieldState::Value,
                FieldState::Null
            ]
        );
        assert_eq!(people[0].birthday.get(), Some(&fixed_now()));
    }

    #[test]
    fn samples_serialize_with_omission() {
        let json = serde_json::to_value(sample_people(fixed_now())).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([
                { "name": "John Doe", "birthday": "2024-06-01T09:30:00Z", "age": 30 },
                { "name": "Jane Smith" },
                { "name": "Bob Johnson", "birthday": "1980-01-01T00:00:00Z", "age": 40 },
                { "name": "Sam Lee", "birthday": null, "age": null },
            ])
        );
    }

    #[test]
    fn sample_keeps_caller_offset() {
        let now = DateTime::parse_from_rfc3339("2024-06-01T16:30:00+07:00").expect("valid timestamp");
        let json = serde_json::to_value(&sample_people(now)[0]).expect("serialize");
        assert_eq!(json["birthday"], "2024-06-01T16:30:00+07:00");
    }

    #[test]
    fn decode_accepts_one_or_many() {
        let one = decode_people(serde_json::json!({ "name": "A" })).expect("single");
        assert_eq!(one.len(), 1);
        assert!(one[0].age.is_absent());

        let many = decode_people(serde_json::json!([{ "name": "A" }, { "name": "B", "age": null }]))
            .expect("array");
        assert_eq!(many.len(), 2);
        assert!(many[1].age.is_null());
    }

    #[test]
    fn decode_surfaces_field_errors() {
        let err = decode_people(serde_json::json!({ "name": "X", "birthday": "invalid" }))
            .expect_err("bad timestamp");
        assert!(err.is_data());
    }
}
