#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::snbt;

fuzz_target!(|data: &str| {
    if let Ok(v) = snbt::from_str(data) {
        let text = snbt::to_string(&v);
        assert_eq!(snbt::from_str(&text).unwrap(), v, "{}", text);

        let pretty = snbt::to_string_pretty(&v);
        assert_eq!(snbt::from_str(&pretty).unwrap(), v, "{}", pretty);
    }
});
