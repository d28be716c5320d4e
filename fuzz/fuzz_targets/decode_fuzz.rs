#![no_main]
use libfuzzer_sys::fuzz_target;
use deoparse::deo::decode_memory;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic, only return errors.
    // Anything that decodes must decode the same way twice.
    if let Ok(file) = decode_memory(data) {
        assert_eq!(decode_memory(data).ok(), Some(file));
    }
});
