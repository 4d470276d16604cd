#![no_main]

use libfuzzer_sys::fuzz_target;
use nullable_core::Time;

fuzz_target!(|data: &[u8]| {
    let mut t = Time::of(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH);
    if t.unmarshal_json(data).is_err() {
        assert_eq!(t, Time::default());
        return;
    }
    if t.is_valid() {
        let bytes = t.marshal_json().expect("decoded timestamp re-encodes");
        let mut again = Time::default();
        again.unmarshal_json(&bytes).expect("re-encoded timestamp decodes");
        assert_eq!(again, t);
        assert_eq!(again.marshal_json().expect("stable encoding"), bytes);
    }
});
