//! Fuzz target for `ClientCommand::decode`
//!
//! Same contract as the event decoder: arbitrary bytes must never panic,
//! and anything that decodes must re-encode without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use parlor_proto::ClientCommand;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(command) = ClientCommand::decode(text) {
            let _ = command.encode();
        }
    }
});
