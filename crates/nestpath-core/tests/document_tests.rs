use nestpath_core::{Document, NestpathError};
use serde_json::{json, Map, Value};

/// Compact fixture with one leaf of every scalar kind.
const S1: &str = r#"{"a":1,"b":"moo","c":true,"d":1.2}"#;

/// Nested fixture: objects, arrays, arrays of arrays, arrays of objects.
const S2: &str =
    r#"{"a":{"b":"moo","c":1,"d":false},"b":0,"c":[1,2,3],"d":[[0,1],{"a":1},[{"b":2},{"c":3}]]}"#;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn new_document_is_empty() {
    let doc = Document::new();
    assert!(doc.data().is_empty());
    assert_eq!(doc.encode_string().unwrap(), "{}");
}

#[test]
fn default_matches_new() {
    assert_eq!(Document::default(), Document::new());
}

#[test]
fn from_object_takes_ownership() {
    let mut root = Map::new();
    root.insert("a".to_string(), json!(1));
    let doc = Document::from_object(root);
    assert_eq!(doc.get("a").unwrap(), &json!(1));

    let via_from: Document = {
        let mut root = Map::new();
        root.insert("a".to_string(), json!(1));
        root.into()
    };
    assert_eq!(via_from, doc);
}

#[test]
fn try_from_value_accepts_only_objects() {
    let doc = Document::try_from(json!({"a": 1})).unwrap();
    assert_eq!(doc.get_i64("a").unwrap(), 1);

    for (value, kind) in [
        (json!([1, 2, 3]), "array"),
        (json!(42), "number"),
        (json!("moo"), "string"),
        (json!(true), "boolean"),
        (json!(null), "null"),
    ] {
        match Document::try_from(value) {
            Err(NestpathError::RootNotObject { found }) => assert_eq!(found, kind),
            other => panic!("expected RootNotObject({kind}), got {other:?}"),
        }
    }
}

// ============================================================================
// Decode
// ============================================================================

#[test]
fn decode_str_reads_a_nested_document() {
    let doc = Document::decode_str(S2).unwrap();
    assert_eq!(doc.get("a.b").unwrap(), &json!("moo"));
    assert_eq!(doc.get("d[2][1].c").unwrap(), &json!(3));
}

#[test]
fn decode_accepts_bytes() {
    let doc = Document::decode(S1.as_bytes()).unwrap();
    assert_eq!(doc.get_str("b").unwrap(), "moo");
}

#[test]
fn from_str_trait_decodes() {
    let doc: Document = S1.parse().unwrap();
    assert_eq!(doc.get_i64("a").unwrap(), 1);
}

#[test]
fn decode_rejects_invalid_json() {
    match Document::decode_str("{\"a\": ") {
        Err(NestpathError::Json(_)) => {}
        other => panic!("expected Json error, got {other:?}"),
    }
}

#[test]
fn decode_rejects_non_object_roots() {
    for (text, kind) in [("[1,2,3]", "array"), ("42", "number"), ("\"moo\"", "string")] {
        match Document::decode_str(text) {
            Err(NestpathError::RootNotObject { found }) => assert_eq!(found, kind),
            other => panic!("expected RootNotObject for {text:?}, got {other:?}"),
        }
    }
}

// ============================================================================
// Encode (insertion order is preserved, so strings compare exactly)
// ============================================================================

#[test]
fn decode_then_encode_is_identity_on_compact_input() {
    for text in [S1, S2] {
        let doc = Document::decode_str(text).unwrap();
        assert_eq!(doc.encode_string().unwrap(), text);
    }
}

#[test]
fn encode_bytes_match_encode_string() {
    let doc = Document::decode_str(S1).unwrap();
    assert_eq!(doc.encode().unwrap(), doc.encode_string().unwrap().into_bytes());
}

#[test]
fn encode_preserves_insertion_order_not_alphabetical() {
    let doc = Document::decode_str(r#"{"z":1,"a":2,"m":3}"#).unwrap();
    assert_eq!(doc.encode_string().unwrap(), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn encode_pretty_uses_two_space_indent() {
    let mut doc = Document::new();
    doc.set("a", 1).unwrap();
    assert_eq!(doc.encode_string_pretty().unwrap(), "{\n  \"a\": 1\n}");
    assert_eq!(
        doc.encode_pretty().unwrap(),
        doc.encode_string_pretty().unwrap().into_bytes()
    );
}

// ============================================================================
// Get / Set through the string-path API
// ============================================================================

#[test]
fn get_propagates_parse_errors() {
    let doc = Document::decode_str(S1).unwrap();
    match doc.get("a..b") {
        Err(NestpathError::InvalidPath { pos, .. }) => assert_eq!(pos, 2),
        other => panic!("expected InvalidPath, got {other:?}"),
    }
}

#[test]
fn set_propagates_parse_errors() {
    let mut doc = Document::new();
    match doc.set("", 1) {
        Err(NestpathError::InvalidPath { message, .. }) => assert_eq!(message, "empty path"),
        other => panic!("expected InvalidPath, got {other:?}"),
    }
}

#[test]
fn set_builds_a_document_from_scratch() {
    let mut doc = Document::new();
    doc.set("a.b.c", 1).unwrap();
    doc.set("a.b.d", "moo").unwrap();
    doc.set("b", json!([1, 2, 3])).unwrap();
    doc.set("b[0]", 4).unwrap();
    assert_eq!(doc.get_i64("b[0]").unwrap(), 4);
    doc.set("c", json!({"A": 1, "B": 1.2, "C": true})).unwrap();
    doc.set("c.A", false).unwrap();
    doc.set("c.A", "X").unwrap();
    doc.set("c.B", 4.5).unwrap();
    doc.set("b[0]", json!([1.2, 1.3, 1.4])).unwrap();
    doc.set("b[0][0]", json!(["a", "b", "c"])).unwrap();
    doc.set("b[0][0][1]", "FUU").unwrap();

    assert_eq!(
        doc.encode_string().unwrap(),
        r#"{"a":{"b":{"c":1,"d":"moo"}},"b":[[["a","FUU","c"],1.3,1.4],2,3],"c":{"A":"X","B":4.5,"C":true}}"#
    );
}

#[test]
fn set_edits_an_existing_document() {
    let mut doc = Document::decode_str(S2).unwrap();
    doc.set("a.b", json!({"x": 0.5, "y": 10})).unwrap();
    doc.set("c[0]", "xxx").unwrap();
    doc.set("b", json!([1, 2, 3, 4, 5])).unwrap();
    doc.set("d[1].a", "zzz").unwrap();

    assert_eq!(
        doc.encode_string().unwrap(),
        r#"{"a":{"b":{"x":0.5,"y":10},"c":1,"d":false},"b":[1,2,3,4,5],"c":["xxx",2,3],"d":[[0,1],{"a":"zzz"},[{"b":2},{"c":3}]]}"#
    );
}

#[test]
fn set_accepts_anything_convertible_to_a_value() {
    let mut doc = Document::new();
    doc.set("s", "text").unwrap();
    doc.set("i", 7).unwrap();
    doc.set("f", 2.5).unwrap();
    doc.set("flag", true).unwrap();
    doc.set("list", vec![1, 2, 3]).unwrap();
    doc.set("nothing", json!(null)).unwrap();
    assert_eq!(
        doc.encode_string().unwrap(),
        r#"{"s":"text","i":7,"f":2.5,"flag":true,"list":[1,2,3],"nothing":null}"#
    );
}

#[test]
fn failed_set_reports_navigation_errors() {
    let mut doc = Document::decode_str(S2).unwrap();
    match doc.set("c[10]", 0) {
        Err(NestpathError::IndexOutOfBounds { index, len, .. }) => {
            assert_eq!((index, len), (10, 3));
        }
        other => panic!("expected IndexOutOfBounds, got {other:?}"),
    }
}

// ============================================================================
// Typed Accessors
// ============================================================================

#[test]
fn typed_getters_return_each_scalar_kind() {
    let doc = Document::decode_str(S1).unwrap();
    assert_eq!(doc.get_i64("a").unwrap(), 1);
    assert_eq!(doc.get_str("b").unwrap(), "moo");
    assert!(doc.get_bool("c").unwrap());
    assert_eq!(doc.get_f64("d").unwrap(), 1.2);
}

#[test]
fn typed_getters_return_containers() {
    let doc = Document::decode_str(S2).unwrap();
    assert_eq!(doc.get_array("c").unwrap(), &vec![json!(1), json!(2), json!(3)]);
    let inner = doc.get_object("a").unwrap();
    assert_eq!(inner.get("c"), Some(&json!(1)));
}

#[test]
fn get_i64_truncates_floats_toward_zero() {
    let mut doc = Document::decode_str(S1).unwrap();
    assert_eq!(doc.get_i64("d").unwrap(), 1); // 1.2
    doc.set("neg", -1.9).unwrap();
    assert_eq!(doc.get_i64("neg").unwrap(), -1);
}

#[test]
fn get_i64_saturates_outside_the_i64_range() {
    let mut doc = Document::new();
    doc.set("big", 1e300).unwrap();
    doc.set("small", -1e300).unwrap();
    doc.set("huge_uint", u64::MAX).unwrap();
    assert_eq!(doc.get_i64("big").unwrap(), i64::MAX);
    assert_eq!(doc.get_i64("small").unwrap(), i64::MIN);
    assert_eq!(doc.get_i64("huge_uint").unwrap(), i64::MAX);
}

#[test]
fn get_f64_widens_integers() {
    let doc = Document::decode_str(S1).unwrap();
    assert_eq!(doc.get_f64("a").unwrap(), 1.0);
}

#[test]
fn typed_getters_report_mismatches_with_path_context() {
    let doc = Document::decode_str(S2).unwrap();
    match doc.get_i64("a.b") {
        Err(NestpathError::TypeMismatch {
            path,
            expected,
            found,
        }) => {
            assert_eq!(path.to_string(), "a.b");
            assert_eq!(expected, "number");
            assert_eq!(found, "string");
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }

    let err = doc.get_str("a.c").unwrap_err();
    assert_eq!(err.to_string(), "type mismatch at a.c: expected string, found number");
}

#[test]
fn null_never_narrows() {
    let mut doc = Document::new();
    doc.set("n", json!(null)).unwrap();
    for result in [
        doc.get_bool("n").err(),
        doc.get_i64("n").err(),
        doc.get_str("n").map(str::to_owned).err(),
    ] {
        match result {
            Some(NestpathError::TypeMismatch { found, .. }) => assert_eq!(found, "null"),
            other => panic!("expected TypeMismatch on null, got {other:?}"),
        }
    }
}

#[test]
fn typed_getters_propagate_navigation_errors() {
    let doc = Document::decode_str(S1).unwrap();
    match doc.get_str("zzz") {
        Err(NestpathError::KeyNotFound { path }) => assert_eq!(path.to_string(), "zzz"),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

// ============================================================================
// Escape Hatch
// ============================================================================

#[test]
fn data_exposes_the_live_root() {
    let doc = Document::decode_str(S1).unwrap();
    assert_eq!(doc.data().len(), 4);
    assert_eq!(doc.data().get("b"), Some(&json!("moo")));
}

#[test]
fn data_mut_changes_are_seen_by_path_reads() {
    let mut doc = Document::new();
    doc.data_mut().insert("k".to_string(), json!({"x": 1}));
    assert_eq!(doc.get_i64("k.x").unwrap(), 1);
}

#[test]
fn data_mut_bypasses_path_validation() {
    let mut doc = Document::new();
    // A key the grammar cannot address still lives happily in the tree.
    doc.data_mut().insert("weird key!".to_string(), json!(1));
    match doc.get("weird key!") {
        Err(NestpathError::InvalidPath { pos, .. }) => assert_eq!(pos, 5),
        other => panic!("expected InvalidPath, got {other:?}"),
    }
    assert_eq!(doc.data().get("weird key!"), Some(&json!(1)));
}

#[test]
fn into_object_returns_the_root() {
    let doc = Document::decode_str(S1).unwrap();
    let root = doc.into_object();
    assert_eq!(root.get("a"), Some(&json!(1)));
    assert_eq!(root.len(), 4);
}

// ============================================================================
// Clone / Equality / Serde Embedding
// ============================================================================

#[test]
fn clones_diverge_independently() {
    let original = Document::decode_str(S1).unwrap();
    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy.set("a", 99).unwrap();
    assert_ne!(copy, original);
    assert_eq!(original.get_i64("a").unwrap(), 1);
}

#[test]
fn document_embeds_in_serde_structures() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Config {
        name: String,
        doc: Document,
    }

    let config = Config {
        name: "main".to_string(),
        doc: Document::decode_str(S1).unwrap(),
    };
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(text, format!(r#"{{"name":"main","doc":{S1}}}"#));

    let back: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn document_deserialization_rejects_non_objects() {
    assert!(serde_json::from_value::<Document>(json!([1, 2, 3])).is_err());
    assert!(serde_json::from_value::<Document>(json!(42)).is_err());
    let doc: Document = serde_json::from_value(json!({"a": 1})).unwrap();
    assert_eq!(doc.get_i64("a").unwrap(), 1);
}

#[test]
fn document_serializes_as_its_root() {
    let doc = Document::decode_str(S1).unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(value, serde_json::from_str::<Value>(S1).unwrap());
}
