#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Fuzz the record file decoder with arbitrary text.
    // Decoding must never panic, and anything that decodes must
    // survive a re-encode/decode cycle unchanged.
    if let Ok(records) = tally::store::codec::decode(data) {
        let encoded = tally::store::codec::encode(&records);
        let again = tally::store::codec::decode(&encoded).expect("re-decode of encoded records");
        assert_eq!(records, again);
    }
});
