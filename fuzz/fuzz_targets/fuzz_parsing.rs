#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate dns_wire;
use dns_wire::Message;

fuzz_target!(|data: &[u8]| {
    let _ = Message::from_bytes(data);
});
