#![no_main]

use libfuzzer_sys::fuzz_target;
use nullable_core::{FieldState, Value};

fuzz_target!(|data: &[u8]| {
    let mut v = Value::of(String::from("stale"));
    match v.unmarshal_json(data) {
        Ok(()) => {
            if data.is_empty() {
                assert_eq!(v.state(), FieldState::Absent);
            } else {
                assert!(v.present);
            }
            if v.is_valid() {
                let bytes = v.marshal_json().expect("decoded payload re-encodes");
                let mut again = Value::<String>::default();
                again.unmarshal_json(&bytes).expect("re-encoded payload decodes");
                assert_eq!(again, v);
            }
        }
        Err(_) => assert_eq!(v, Value::default()),
    }
});
