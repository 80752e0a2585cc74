use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use crate::json::to_json;
use crate::path::get_path;
use crate::value::Value;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Total order across mixed value kinds, usable with a stable sort.
///
/// Kinds rank null < bool < number < seq < map < opaque < string, so
/// numbers and containers order before strings. Within a kind, bools,
/// numbers, and strings use their natural order; containers and opaques
/// tie, letting a stable sort preserve their input order.
pub fn cmp_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::Seq(_) => 3,
        Value::Map(_) => 4,
        Value::Opaque(_) => 5,
        Value::String(_) => 6,
    }
}

/// Sorted copy of a sequence, ordered by the value at `key_path` within
/// each element. No key path returns the copy unsorted. Map elements sort
/// by the resolved path value (missing paths resolve as null, so they sort
/// first ascending); scalar elements sort by themselves.
pub fn sort_seq_by(items: &[Value], key_path: Option<&str>, descending: bool) -> Vec<Value> {
    let Some(key_path) = key_path else {
        return items.to_vec();
    };

    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = cmp_values(&sort_key(a, key_path), &sort_key(b, key_path));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}

fn sort_key(element: &Value, key_path: &str) -> Value {
    if element.is_container() {
        get_path(element, key_path).unwrap_or(Value::Null)
    } else {
        element.clone()
    }
}

/// Recursively rebuild a value with ordered containers.
///
/// Ascending sorts map keys lexicographically and sequence elements by
/// [`cmp_values`]; descending reverses the existing order. Scalars pass
/// through. Containers already rebuilt within the same call are reused,
/// so cyclic values terminate with their topology intact.
pub fn sort_keys(value: &Value, order: SortOrder) -> Value {
    let mut visited: Vec<(Value, Value)> = Vec::new();
    sort_value(value, order, &mut visited)
}

fn sort_value(value: &Value, order: SortOrder, visited: &mut Vec<(Value, Value)>) -> Value {
    match value {
        Value::Map(entries) => {
            if let Some(copy) = lookup_sorted(visited, value) {
                return copy;
            }
            let copy = Rc::new(RefCell::new(Vec::with_capacity(entries.borrow().len())));
            visited.push((value.clone(), Value::Map(Rc::clone(&copy))));

            let mut ordered = entries.borrow().clone();
            match order {
                SortOrder::Ascending => ordered.sort_by(|(a, _), (b, _)| a.cmp(b)),
                SortOrder::Descending => ordered.reverse(),
            }
            for (key, item) in ordered {
                let sorted = sort_value(&item, order, visited);
                copy.borrow_mut().push((key, sorted));
            }
            Value::Map(copy)
        }
        Value::Seq(items) => {
            if let Some(copy) = lookup_sorted(visited, value) {
                return copy;
            }
            let copy = Rc::new(RefCell::new(Vec::with_capacity(items.borrow().len())));
            visited.push((value.clone(), Value::Seq(Rc::clone(&copy))));

            let mut ordered = items.borrow().clone();
            match order {
                SortOrder::Ascending => ordered.sort_by(cmp_values),
                SortOrder::Descending => ordered.reverse(),
            }
            for item in ordered {
                let sorted = sort_value(&item, order, visited);
                copy.borrow_mut().push(sorted);
            }
            Value::Seq(copy)
        }
        other => other.clone(),
    }
}

fn lookup_sorted(visited: &[(Value, Value)], original: &Value) -> Option<Value> {
    visited
        .iter()
        .find(|(seen, _)| Value::same_ref(seen, original))
        .map(|(_, copy)| copy.clone())
}

/// Order-insensitive sequence equality: equal length and the same multiset
/// of elements, compared by canonical JSON rendering. Cyclic elements have
/// no rendering and error.
pub fn eq_ignore_order(a: &[Value], b: &[Value]) -> Result<bool> {
    if a.len() != b.len() {
        return Ok(false);
    }

    let mut left = render_all(a)?;
    let mut right = render_all(b)?;
    left.sort();
    right.sort();

    Ok(left == right)
}

fn render_all(items: &[Value]) -> Result<Vec<String>> {
    items
        .iter()
        .map(|item| Ok(serde_json::to_string(&to_json(item)?)?))
        .collect()
}
