use json_iface::{generate, Codegen, GenerateError};
use json_iface::inference::classify;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn render(v: Value, name: &str) -> String {
    generate(&v, name).unwrap()
}

#[test]
fn infers_primitive_fields() {
    let out = render(json!({"name": "test"}), "Test");
    assert!(out.starts_with("export interface Test {"));
    assert!(out.contains("name: string;"));

    assert!(render(json!({"age": 25}), "Test").contains("age: number;"));
    assert!(render(json!({"isActive": true}), "Test").contains("isActive: boolean;"));
    assert!(render(json!({"value": null}), "Test").contains("value: null;"));
}

#[test]
fn infers_array_fields() {
    assert!(render(json!({"tags": ["tag1", "tag2", "tag3"]}), "Test").contains("tags: string[];"));
    assert!(render(json!({"scores": [85, 92, 78]}), "Test").contains("scores: number[];"));
    assert!(render(json!({"empty": []}), "Test").contains("empty: unknown[];"));
    assert!(render(json!({"mixed": ["text", 123, true]}), "Test").contains("mixed: (string | number | boolean)[];"));
}

#[test]
fn nested_objects_get_synthetic_declarations() {
    let out = render(json!({"user": {"name": "John", "age": 30}}), "Test");
    assert_eq!(
        out,
        "export interface Test {\n  user: Interface1;\n}\n\n\
         export interface Interface1 {\n  name: string;\n  age: number;\n}"
    );
}

#[test]
fn deep_nesting_numbers_in_traversal_order() {
    let out = render(json!({"data": {"user": {"profile": {"name": "John"}}}}), "Test");
    assert!(out.contains("data: Interface1;"));
    assert!(out.contains("user: Interface2;"));
    assert!(out.contains("profile: Interface3;"));
    assert!(!out.contains("Interface4"));
}

#[test]
fn array_of_objects_uses_first_shape() {
    let out = render(json!({"users": [{"name": "John", "age": 30}, {"name": "Jane", "age": 25}]}), "Test");
    assert_eq!(
        out,
        "export interface Test {\n  users: Interface1[];\n}\n\n\
         export interface Interface1 {\n  name: string;\n  age: number;\n}"
    );
}

#[test]
fn complex_structure() {
    let out = render(json!({
        "name": "Test User",
        "age": 30,
        "address": {
            "street": "123 Main St",
            "city": "Tokyo",
            "coordinates": {"lat": 35.6762, "lng": 139.6503}
        },
        "hobbies": ["reading", "coding"],
        "scores": [85, 92, 78]
    }), "ComplexTest");

    for line in [
        "export interface ComplexTest {",
        "address: Interface1;",
        "hobbies: string[];",
        "scores: number[];",
        "export interface Interface1 {",
        "city: string;",
        "coordinates: Interface2;",
        "export interface Interface2 {",
        "lat: number;",
        "lng: number;",
    ] {
        assert!(out.contains(line), "missing `{line}` in:\n{out}");
    }
}

#[test]
fn invalid_keys_are_quoted() {
    let out = render(json!({"invalid-key": "value", "123numeric": "value", "with space": "value"}), "Test");
    assert!(out.contains("\"invalid-key\": string;"));
    assert!(out.contains("\"123numeric\": string;"));
    assert!(out.contains("\"with space\": string;"));
}

#[test]
fn empty_object_root() {
    assert_eq!(render(json!({}), "Empty"), "export interface Empty {\n}");
}

#[test]
fn root_name_becomes_pascal_case() {
    let out = render(json!({"test": "value"}), "test-name_with-special");
    assert!(out.starts_with("export interface TestNameWithSpecial {"));
}

#[test]
fn non_object_roots_fail_without_output() {
    let err = generate(&json!("not an object"), "Test").unwrap_err();
    assert_eq!(err, GenerateError::InvalidRootShape { found: "string" });
    assert!(err.to_string().contains("Root type must be an object"));

    let err = generate(&json!([1, 2, 3]), "Test").unwrap_err();
    assert_eq!(err, GenerateError::InvalidRootShape { found: "array" });

    assert!(generate(&json!(42), "Test").is_err());
    assert!(generate(&json!(null), "Test").is_err());
}

#[test]
fn sequential_generations_do_not_share_counters() {
    let v = json!({"a": {"b": 1}, "c": [{"d": true}]});
    let first = render(v.clone(), "Same");
    let second = render(v, "Same");
    assert_eq!(first, second);
    assert!(second.contains("a: Interface1;"));

    let mut cg = Codegen::new();
    cg.emit(&classify(&json!({"x": {}, "y": {}})), "One").unwrap();
    cg.emit(&classify(&json!({"z": {}})), "Two").unwrap();
    assert_eq!(cg.into_string(), "export interface Two {\n  z: Interface1;\n}\n\nexport interface Interface1 {\n}");
}

#[test]
fn nested_mixed_arrays() {
    let out = render(json!({"rows": [[1, "a"], [2], [3, "b"]], "flat": [[1], [2]]}), "Grid");
    assert!(out.contains("rows: ((number | string)[] | number[])[];"));
    assert!(out.contains("flat: number[][];"));
}

#[test]
fn sample_document_matches_fixture() {
    let v: Value = serde_json::from_str(include_str!("fixtures/sample.json")).unwrap();
    let expected = include_str!("fixtures/sample-type.ts");
    assert_eq!(render(v, "Sample"), expected);
}
