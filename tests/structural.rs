use serde_json::json;
use valtree::json::{from_json, read_value_file, to_json, write_value_file_pretty};
use valtree::merge::deep_merge;
use valtree::sort::{sort_keys, SortOrder};
use valtree::{deep_copy, deep_equal, deep_equal_all, Value};

fn fixture() -> Value {
    from_json(&json!({
        "name": "demo",
        "version": 2.0,
        "i18n": {"locales": ["en", "zh"], "fallback": "en"},
        "servers": [{"host": "a", "port": 80.0}, {"host": "b", "port": 443.0}]
    }))
}

#[test]
fn copy_of_acyclic_value_is_equal_and_independent() {
    let original = fixture();
    let copy = deep_copy(&original);

    assert!(deep_equal(&original, &copy));
    assert!(!Value::same_ref(&original, &copy));

    copy.get("i18n").unwrap().set("fallback", Value::from("zh"));
    copy.get("servers").unwrap().at(0).unwrap().set("port", Value::from(8080));

    assert!(!deep_equal(&original, &copy));
    assert!(matches!(
        original.get("i18n").unwrap().get("fallback"),
        Some(Value::String(s)) if s == "en"
    ));
}

#[test]
fn self_referencing_container_copies_and_compares_safely() {
    let config = Value::map(vec![("name".to_string(), Value::from("root"))]);
    config.set("self", config.clone());

    let copy = deep_copy(&config);
    let inner = copy.get("self").unwrap();
    assert!(Value::same_ref(&copy, &inner));

    assert!(deep_equal(&config, &config));
    assert!(deep_equal(&copy, &copy));
}

#[test]
fn equality_is_symmetric_across_mixed_inputs() {
    let cases = vec![
        (fixture(), fixture()),
        (fixture(), Value::from(1)),
        (Value::from("2"), Value::from(2)),
        (Value::Number(f64::NAN), Value::Number(f64::NAN)),
        (
            Value::map(vec![("a".to_string(), Value::from(1))]),
            Value::seq(vec![Value::from(1)]),
        ),
    ];

    for (x, y) in cases {
        assert_eq!(deep_equal(&x, &y), deep_equal(&y, &x));
    }
}

#[test]
fn variadic_equality_over_copies() {
    let original = fixture();
    let copies = vec![original.clone(), deep_copy(&original), deep_copy(&original)];
    assert!(deep_equal_all(&copies));
}

#[test]
fn merged_config_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("project.json");

    let defaults = fixture();
    let overrides = from_json(&json!({
        "version": 3.0,
        "i18n": {"fallback": "zh"},
        "servers": null
    }));

    let merged = deep_merge(&defaults, &overrides);
    write_value_file_pretty(&path, &merged).unwrap();
    let loaded = read_value_file(&path).unwrap();

    assert!(deep_equal(&merged, &loaded));
    assert!(loaded.get("servers").is_none());
    assert!(matches!(
        loaded.get("i18n").unwrap().get("fallback"),
        Some(Value::String(s)) if s == "zh"
    ));
    assert!(matches!(
        loaded.get("i18n").unwrap().get("locales"),
        Some(Value::Seq(_))
    ));
}

#[test]
fn sorting_keys_changes_order_but_not_structure() {
    let original = fixture();
    let sorted = sort_keys(&original, SortOrder::Ascending);

    assert_eq!(
        sorted.keys(),
        vec![
            "i18n".to_string(),
            "name".to_string(),
            "servers".to_string(),
            "version".to_string()
        ]
    );
    assert!(deep_equal(&original, &sorted));
}

#[test]
fn json_rendering_of_a_copy_matches_the_original() {
    let original = fixture();
    let copy = deep_copy(&original);

    assert_eq!(to_json(&original).unwrap(), to_json(&copy).unwrap());
}
