use std::borrow::Cow;

use crate::error::{ErrorKind, Result};
use crate::path::{self, Node, TagPath};
use crate::{snbt, Compound, Value};

fn sample() -> Compound {
    snbt::compound_from_str(
        r#"{
            obj: {
                string: "Hello, world!",
                integers: [I; 1, 2, 3, 4, 5, 6],
                a_long: 98709987897698L,
                string1: "String"
            },
            an_int: 1000,
            string_list: ["Foo", "Bar", "Foobar"],
            float: 1.0564f,
            Items: [{Slot: 0b, id: "stone"}, {Slot: 1b, id: "dirt"}]
        }"#,
    )
    .unwrap()
}

fn get(path: &str, root: &Compound) -> Vec<Value> {
    TagPath::parse(path)
        .unwrap()
        .get(root)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

fn remove(path: &str, root: &mut Compound) -> usize {
    TagPath::parse(path).unwrap().remove(root)
}

fn set(path: &str, root: &mut Compound, value: impl Into<Value>) -> usize {
    TagPath::parse(path).unwrap().set(root, &value.into())
}

#[test]
fn get_by_key() {
    let root = sample();
    assert_eq!(get("an_int", &root), vec![Value::Int(1000)]);
    assert_eq!(get("obj.string", &root), vec![Value::from("Hello, world!")]);
    assert!(get("obj.not_real", &root).is_empty());
    assert!(get("an_int.deeper", &root).is_empty());
}

#[test]
fn get_with_root_filter() {
    let root = sample();
    assert_eq!(get("{an_int:1000}obj.a_long", &root), vec![Value::Long(98709987897698)]);
    assert_eq!(get("{an_int:1000}.obj.a_long", &root).len(), 1);
    assert!(get("{an_int:0999}obj.a_long", &root).is_empty());

    // A filter on its own selects the root.
    assert_eq!(get("{an_int:1000}", &root), vec![Value::Compound(root.clone())]);
}

#[test]
fn get_by_index() {
    let root = sample();
    assert_eq!(get("string_list[0]", &root), vec![Value::from("Foo")]);
    assert_eq!(get("string_list[-1]", &root), vec![Value::from("Foobar")]);
    assert!(get("string_list[40]", &root).is_empty());
    assert!(get("string_list[-4]", &root).is_empty());
    assert_eq!(get("obj.integers[2]", &root), vec![Value::Int(3)]);
}

#[test]
fn get_all() {
    let root = sample();
    assert_eq!(get("string_list[]", &root).len(), 3);
    assert_eq!(get("obj.integers[]", &root).len(), 6);
    assert!(get("float[]", &root).is_empty());
    assert_eq!(
        get("Items[].id", &root),
        vec![Value::from("stone"), Value::from("dirt")]
    );
}

#[test]
fn get_filtered() {
    let root = sample();
    assert_eq!(get("Items[{Slot:1b}].id", &root), vec![Value::from("dirt")]);
    assert!(get("Items[{Slot:2b}].id", &root).is_empty());
    assert_eq!(get(r#"obj{string1:"String"}.a_long"#, &root).len(), 1);
    assert!(get(r#"obj{string1:"Other"}.a_long"#, &root).is_empty());
}

#[test]
fn get_borrows_from_the_tree() {
    let root = sample();
    let path = TagPath::parse("obj.string").unwrap();
    assert!(matches!(path.get(&root).as_slice(), [Cow::Borrowed(_)]));
}

#[test]
fn remove_by_key() {
    let mut root = sample();
    assert_eq!(remove("obj", &mut root), 1);
    assert!(!root.contains_key("obj"));
    assert_eq!(remove("floats", &mut root), 0);
}

#[test]
fn remove_with_root_filter() {
    let mut root = sample();
    assert_eq!(remove("{an_int:0999}obj.a_long", &mut root), 0);
    assert_eq!(remove("{an_int:1000}obj.a_long", &mut root), 1);
    assert!(get("obj.a_long", &root).is_empty());
}

#[test]
fn remove_by_index() {
    let mut root = sample();
    assert_eq!(remove("string_list[40]", &mut root), 0);
    assert_eq!(remove("string_list[0]", &mut root), 1);
    assert_eq!(get("string_list[]", &root), vec![Value::from("Bar"), Value::from("Foobar")]);

    assert_eq!(remove("obj.integers[-1]", &mut root), 1);
    assert_eq!(root.get_compound("obj").unwrap().get_int_array("integers"), Some(&[1, 2, 3, 4, 5][..]));
}

#[test]
fn remove_all() {
    let mut root = sample();
    assert_eq!(remove("float[]", &mut root), 0);
    assert_eq!(remove("Items[{Slot:0b}]", &mut root), 1);
    assert_eq!(get("Items[].id", &root), vec![Value::from("dirt")]);

    assert_eq!(remove("string_list[]", &mut root), 3);
    assert_eq!(root.get_list("string_list").map(|l| l.len()), Some(0));
}

#[test]
fn remove_does_not_create() {
    let mut root = sample();
    assert_eq!(remove("missing.deeper", &mut root), 0);
    assert!(!root.contains_key("missing"));
}

#[test]
fn set_by_key() {
    let mut root = sample();
    assert_eq!(set("obj", &mut root, Value::Byte(1)), 1);
    assert_eq!(root.get("obj"), Some(&Value::Byte(1)));

    // Setting the same value again changes nothing.
    assert_eq!(set("obj", &mut root, Value::Byte(1)), 0);
}

#[test]
fn set_with_root_filter() {
    let mut root = sample();
    assert_eq!(set("{an_int:0999}obj.a_long", &mut root, Value::Byte(1)), 0);
    assert_eq!(set("{an_int:1000}obj.a_long", &mut root, Value::Byte(1)), 1);
    assert_eq!(get("obj.a_long", &root), vec![Value::Byte(1)]);
}

#[test]
fn set_creates_parents() -> Result<()> {
    let mut root = Compound::new();
    assert_eq!(set("a.b[].c", &mut root, 5), 1);
    assert_eq!(root, snbt::compound_from_str("{a:{b:[{c:5}]}}")?);

    // The list is created, but an index into it has nothing to replace.
    assert_eq!(set("x[0]", &mut root, 5), 0);
    assert_eq!(root.get_list("x").map(|l| l.len()), Some(0));
    Ok(())
}

#[test]
fn set_keeps_lists_homogeneous() {
    let mut root = sample();
    assert_eq!(set("string_list[0]", &mut root, 1), 0);
    assert_eq!(set("string_list[]", &mut root, 1), 0);
    assert_eq!(get("string_list[0]", &root), vec![Value::from("Foo")]);

    assert_eq!(set("string_list[]", &mut root, "Foo"), 2);
    assert_eq!(get("string_list[]", &root), vec![Value::from("Foo"); 3]);
}

#[test]
fn set_array_elements() {
    let mut root = sample();
    assert_eq!(set("obj.integers[0]", &mut root, 9), 1);
    assert_eq!(set("obj.integers[0]", &mut root, Value::Byte(9)), 0);
    assert_eq!(set("obj.integers[]", &mut root, 9), 5);
    assert_eq!(get("obj.integers[]", &root), vec![Value::Int(9); 6]);
}

#[test]
fn set_filtered() {
    let mut root = sample();
    assert_eq!(set("Items[{Slot:1b}].id", &mut root, "air"), 1);
    assert_eq!(
        get("Items[].id", &root),
        vec![Value::from("stone"), Value::from("air")]
    );
}

#[test]
fn parse_steps() -> Result<()> {
    let path = TagPath::parse("{foo:1b}node1.node2.node3[].node4[1].node5{foo:'bar'}")?;

    let mut foo = Compound::new();
    foo.put_byte("foo", 1);
    assert_eq!(path.root_filter(), Some(&foo));

    let mut bar = Compound::new();
    bar.put_string("foo", "bar");
    let expected = TagPath::new()
        .filter(foo)
        .key("node1")
        .key("node2")
        .key("node3")
        .all()
        .key("node4")
        .index(1)
        .key_matching("node5", bar);
    assert_eq!(path, expected);
    assert_eq!(path.nodes().len(), 7);
    Ok(())
}

#[test]
fn parse_quoted_keys() -> Result<()> {
    let path = TagPath::parse(r#""with space".'a.b'[-2]"#)?;
    assert_eq!(
        path.nodes(),
        &[
            Node::Key {
                name: "with space".into(),
                filter: None
            },
            Node::Key {
                name: "a.b".into(),
                filter: None
            },
            Node::Index(-2),
        ]
    );
    Ok(())
}

#[test]
fn parse_errors() {
    for bad in ["", "node1..node2", "a.", "a[x]", "a[", "a[0", "a b", "{a:1}."] {
        let err = TagPath::parse(bad).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Syntax, "{:?}", bad);
    }

    let err = TagPath::parse("a[99999999999]").unwrap_err();
    assert!(err.to_string().contains("out of range"), "{}", err);
}

#[test]
fn display_reads_back() -> Result<()> {
    for input in [
        r#"{foo:1b}node1.node2.node3[].node4[1].node5{foo:"bar"}"#,
        "Items[{Slot:0b}].tag.display",
        r#""with space".a[-1][]"#,
        "{a:1}",
    ] {
        let path: TagPath = input.parse()?;
        assert_eq!(path.to_string(), input);
        assert_eq!(TagPath::parse(&path.to_string())?, path);
    }
    Ok(())
}

#[test]
fn pattern_matching() -> Result<()> {
    let subject = snbt::from_str("{a:1,b:[1,2,3],c:{d:\"x\",e:2}}")?;

    assert!(path::matches(&snbt::from_str("{}")?, &subject));
    assert!(path::matches(&snbt::from_str("{a:1,c:{d:\"x\"}}")?, &subject));
    assert!(path::matches(&snbt::from_str("{b:[3,1]}")?, &subject));
    assert!(!path::matches(&snbt::from_str("{b:[4]}")?, &subject));
    assert!(!path::matches(&snbt::from_str("{b:[]}")?, &subject));
    assert!(!path::matches(&snbt::from_str("{a:1b}")?, &subject));
    assert!(!path::matches(&snbt::from_str("{z:1}")?, &subject));
    Ok(())
}
