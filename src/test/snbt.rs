use crate::error::{ErrorKind, Result};
use crate::snbt::{self, SnbtOpts};
use crate::{factory, Compound, List, Value};

fn sample() -> Compound {
    let mut item = Compound::new();
    item.put_string("id", "minecraft:stone");
    item.put_byte("Count", 64);

    let mut inventory = List::new();
    inventory.add_compound(item).unwrap();

    let mut c = Compound::new();
    c.put_byte("b", i8::MIN);
    c.put_short("s", 300);
    c.put_int("i", -7);
    c.put_long("l", i64::MIN);
    c.put_float("f", 0.1);
    c.put_double("d", f64::MAX);
    c.put_string("quote \"and\" slash \\", "snow \u{2603}");
    c.put_string("", "empty key");
    c.put_string("number like", "123");
    c.put_byte_array("ba", vec![1, -1]);
    c.put_int_array("ia", Vec::<i32>::new());
    c.put_long_array("la", vec![1, 2]);
    c.put("empty", List::new());
    c.put("inventory", inventory);
    c.put("nested", {
        let mut l = List::new();
        l.add_list(factory::double_list([1.0, -0.0])).unwrap();
        l.add_list(List::new()).unwrap();
        l
    });
    c
}

#[test]
fn compact_output() {
    let mut c = Compound::new();
    c.put_int("x", 5);
    c.put_float("health", 20.0);
    c.put_string("name", "Steve");
    c.put_byte_array("bytes", vec![1, 2]);
    c.put_long_array("longs", vec![3]);
    c.put("list", factory::short_list([1, 2]));

    assert_eq!(
        c.to_string(),
        r#"{x:5,health:20.0f,name:"Steve",bytes:[B;1b,2b],longs:[L;3L],list:[1s,2s]}"#
    );
}

#[test]
fn keys_and_strings_are_quoted() {
    let mut c = Compound::new();
    c.put_string("a b", "say \"hi\"\\");
    c.put_int("", 1);
    c.put_int("minecraft.id-1+x_y", 2);

    assert_eq!(
        c.to_string(),
        r#"{"a b":"say \"hi\"\\","":1,minecraft.id-1+x_y:2}"#
    );
}

#[test]
fn pretty_output() {
    let mut c = Compound::new();
    c.put_int_array("a", vec![1, 2]);
    c.put("l", factory::int_list([1]));
    c.put("e", Compound::new());

    let text = snbt::to_string_pretty(&c.into());
    assert_eq!(text, "{\n  a: [I; 1, 2],\n  l: [\n    1\n  ],\n  e: {}\n}");
}

#[test]
fn pretty_arrays_expanded() {
    let value = factory::byte_array(vec![1, 2]);
    let opts = SnbtOpts::new().pretty(true);
    assert_eq!(snbt::to_string_with(&value, &opts), "[B;\n  1b,\n  2b\n]");
}

#[test]
fn round_trip() -> Result<()> {
    let value = Value::Compound(sample());

    for text in [
        snbt::to_string(&value),
        snbt::to_string_pretty(&value),
        snbt::to_string_with(&value, &SnbtOpts::new().pretty(true)),
    ] {
        assert_eq!(snbt::from_str(&text)?, value, "{}", text);
    }
    Ok(())
}

#[test]
fn parses_loose_input() -> Result<()> {
    let c = snbt::compound_from_str(
        " { name : 'Steve' , on: true, off:false, pos: [ 1.5d , 2.0 , -3e1 ], tag: minecraft.stone, n: 3000000000 } ",
    )?;

    assert_eq!(c.get_string("name"), Some("Steve"));
    assert_eq!(c.get_byte("on"), 1);
    assert_eq!(c.get_byte("off"), 0);
    assert_eq!(c.get_double_list("pos"), Some(vec![1.5, 2.0, -30.0]));
    assert_eq!(c.get_string("tag"), Some("minecraft.stone"));
    // Too big for an int, so it is a string.
    assert_eq!(c.get_string("n"), Some("3000000000"));
    Ok(())
}

#[test]
fn parses_suffixes() -> Result<()> {
    assert_eq!(snbt::from_str("1b")?, Value::Byte(1));
    assert_eq!(snbt::from_str("1S")?, Value::Short(1));
    assert_eq!(snbt::from_str("1")?, Value::Int(1));
    assert_eq!(snbt::from_str("1l")?, Value::Long(1));
    assert_eq!(snbt::from_str("1.5F")?, Value::Float(1.5));
    assert_eq!(snbt::from_str("1.5")?, Value::Double(1.5));
    assert_eq!(snbt::from_str("\"1\"")?, Value::String("1".into()));
    Ok(())
}

#[test]
fn parses_arrays() -> Result<()> {
    assert_eq!(snbt::from_str("[B; 1b, -2b]")?, factory::byte_array(vec![1, -2]));
    assert_eq!(snbt::from_str("[I;]")?, factory::int_array(Vec::<i32>::new()));
    assert_eq!(snbt::from_str("[L;1,2L]")?, factory::long_array(vec![1, 2]));

    // A list holding the string B, not an array.
    assert_eq!(snbt::from_str("[B]")?, Value::List(factory::string_list(["B"])));
    Ok(())
}

#[test]
fn array_elements_checked() {
    for bad in ["[B;300]", "[I;1.5]", "[L;a]", "[B;1,]"] {
        let err = snbt::from_str(bad).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Syntax, "{}", bad);
    }
}

#[test]
fn syntax_errors() {
    for bad in ["", "{", "{a:}", "{a 1}", "{a:1,}", "[1,2b]", "\"open", "{a:1} x", "[1,]"] {
        let err = snbt::from_str(bad).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Syntax, "{:?}", bad);
    }
}

#[test]
fn error_reports_offset() {
    let err = snbt::from_str("{a:1 b:2}").unwrap_err();
    assert!(err.to_string().contains("at 5"), "{}", err);
}

#[test]
fn compound_required() {
    let err = snbt::compound_from_str("[1]").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
}

#[test]
fn nesting_limit() {
    let deep = "[".repeat(600) + &"]".repeat(600);
    let err = snbt::from_str(&deep).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NestingTooDeep);

    let ok = "[".repeat(512) + &"]".repeat(512);
    assert!(snbt::from_str(&ok).is_ok());
}

#[test]
fn emptied_list_round_trips() -> Result<()> {
    let mut list = factory::int_list([1, 2]);
    list.clear();

    let value = Value::List(list);
    assert_eq!(snbt::to_string(&value), "[]");
    assert_eq!(snbt::from_str(&snbt::to_string(&value))?, value);
    Ok(())
}

#[test]
fn special_floats() -> Result<()> {
    let text = snbt::to_string(&Value::Double(f64::INFINITY));
    assert_eq!(snbt::from_str(&text)?, Value::Double(f64::INFINITY));

    let text = snbt::to_string(&Value::Float(f32::NAN));
    assert!(matches!(snbt::from_str(&text)?, Value::Float(f) if f.is_nan()));
    Ok(())
}
