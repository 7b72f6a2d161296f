use serde_json::json;

use crate::{factory, Compound, List};

#[test]
fn export_to_json() {
    let mut pos = List::new();
    pos.add_double(1.5).unwrap();

    let mut c = Compound::new();
    c.put_byte("b", 1);
    c.put_string("name", "Steve");
    c.put_byte_array("bytes", vec![1, -1]);
    c.put_long_array("longs", vec![5]);
    c.put("Pos", pos);
    c.put("empty", factory::compound());

    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(
        json,
        json!({
            "b": 1,
            "name": "Steve",
            "bytes": [1, 255],
            "longs": [5],
            "Pos": [1.5],
            "empty": {},
        })
    );
}

#[test]
fn json_keeps_entry_order() {
    let c: Compound = vec![("z", 1), ("a", 2)].into_iter().collect();
    assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"z":1,"a":2}"#);
}
