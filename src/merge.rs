use crate::value::Value;

/// Merge `source` into `target`, returning the merged value.
///
/// Mappings merge key by key: a null source value removes the key, nested
/// mappings merge recursively, and any other source value replaces the
/// target's. When either side is not a mapping, the source wins. The
/// result is a fresh mapping at every merged level; unmerged members are
/// shared with the inputs. Inputs must be acyclic.
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let (Value::Map(_), Value::Map(source_entries)) = (target, source) else {
        return source.clone();
    };

    let merged = Value::map(target.entries());
    for (key, incoming) in source_entries.borrow().iter() {
        if incoming.is_null() {
            merged.remove(key);
        } else if incoming.is_map() {
            let base = match merged.get(key) {
                Some(existing) if existing.is_map() => existing,
                _ => Value::map(Vec::new()),
            };
            merged.set(key, deep_merge(&base, incoming));
        } else {
            merged.set(key, incoming.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deep::deep_equal;
    use crate::json::from_json;
    use serde_json::json;

    #[test]
    fn merges_nested_maps_recursively() {
        let target = from_json(&json!({"a": {"x": 1.0, "y": 2.0}, "b": 3.0}));
        let source = from_json(&json!({"a": {"y": 20.0, "z": 30.0}}));

        let merged = deep_merge(&target, &source);
        let expected = from_json(&json!({"a": {"x": 1.0, "y": 20.0, "z": 30.0}, "b": 3.0}));

        assert!(deep_equal(&merged, &expected));
    }

    #[test]
    fn null_source_value_removes_the_key() {
        let target = from_json(&json!({"keep": 1.0, "drop": 2.0}));
        let source = from_json(&json!({"drop": null}));

        let merged = deep_merge(&target, &source);

        assert!(merged.get("drop").is_none());
        assert!(merged.get("keep").is_some());
    }

    #[test]
    fn scalar_source_replaces_nested_target() {
        let target = from_json(&json!({"a": {"deep": true}}));
        let source = from_json(&json!({"a": 5.0}));

        let merged = deep_merge(&target, &source);
        assert!(matches!(merged.get("a"), Some(Value::Number(n)) if n == 5.0));
    }

    #[test]
    fn map_source_over_scalar_target_entry_merges_into_empty() {
        let target = from_json(&json!({"a": 1.0}));
        let source = from_json(&json!({"a": {"x": 1.0, "gone": null}}));

        let merged = deep_merge(&target, &source);
        let expected = from_json(&json!({"a": {"x": 1.0}}));

        assert!(deep_equal(&merged, &expected));
    }

    #[test]
    fn non_map_inputs_yield_the_source() {
        let merged = deep_merge(&Value::from(1), &Value::from("s"));
        assert!(deep_equal(&merged, &Value::from("s")));

        let map = from_json(&json!({"a": 1.0}));
        let merged = deep_merge(&Value::from(1), &map);
        assert!(deep_equal(&merged, &map));
    }

    #[test]
    fn merge_does_not_mutate_its_inputs() {
        let target = from_json(&json!({"a": {"x": 1.0}}));
        let source = from_json(&json!({"a": {"y": 2.0}, "b": 3.0}));

        let _merged = deep_merge(&target, &source);

        assert!(deep_equal(&target, &from_json(&json!({"a": {"x": 1.0}}))));
        assert!(deep_equal(
            &source,
            &from_json(&json!({"a": {"y": 2.0}, "b": 3.0}))
        ));
    }
}
