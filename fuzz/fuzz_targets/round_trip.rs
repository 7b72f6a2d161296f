#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::error::ErrorKind;
use nbtree::io;
use nbtree::{snbt, Compound, Value};

fuzz_target!(|v: Value| {
    let mut root = Compound::new();
    root.put("", v);

    // Encoding fails for strings too long for the format, which is fine.
    if let Ok(bs) = io::to_bytes(&root) {
        match io::from_bytes(&bs) {
            Ok(read) => assert_eq!(read, root),
            Err(e) => assert_eq!(e.kind(), &ErrorKind::NestingTooDeep),
        }
    }

    // NaN payloads are not kept by the text form, so only check it parses.
    if let Err(e) = snbt::from_str(&root.to_string()) {
        assert_eq!(e.kind(), &ErrorKind::NestingTooDeep);
    }
});
