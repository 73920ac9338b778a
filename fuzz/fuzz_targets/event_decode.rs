//! Fuzz target for `ServerEvent::decode`
//!
//! Feeds arbitrary bytes through the inbound wire decoder with:
//! - Malformed JSON
//! - Valid JSON that matches no event shape
//! - Type confusion (wrong payload for an event name)
//! - Deeply nested or oversized structures
//!
//! The decoder should NEVER panic. All invalid inputs must return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use parlor_proto::ServerEvent;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = ServerEvent::decode(text);
    }
});
