#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::io::{self, ReadOpts};

fuzz_target!(|data: &[u8]| {
    let opts = ReadOpts::new().max_bytes(1024 * 1024);
    if let Ok((name, root)) = io::read_compound(data, opts) {
        let mut bs = Vec::new();
        io::write_compound(&mut bs, &name, &root).unwrap();
        assert_eq!(io::from_bytes(&bs).unwrap(), root);
    }
});
