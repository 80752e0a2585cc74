use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// Deep-copy a value graph.
///
/// Containers already copied within the same call are reused, so shared
/// substructure stays shared and a self-referencing container copies to a
/// self-referencing copy instead of recursing forever. Scalars and opaque
/// values carry value semantics and are returned as-is.
pub fn deep_copy(value: &Value) -> Value {
    let mut visited: Vec<(Value, Value)> = Vec::new();
    copy_value(value, &mut visited)
}

fn copy_value(value: &Value, visited: &mut Vec<(Value, Value)>) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Opaque(_) => {
            value.clone()
        }
        Value::Seq(items) => {
            if let Some(copy) = lookup_copy(visited, value) {
                return copy;
            }
            let copy = Rc::new(RefCell::new(Vec::with_capacity(items.borrow().len())));
            // Register before recursing so a member cycling back to this
            // container resolves to the in-progress copy.
            visited.push((value.clone(), Value::Seq(Rc::clone(&copy))));
            for item in items.borrow().iter() {
                let copied = copy_value(item, visited);
                copy.borrow_mut().push(copied);
            }
            Value::Seq(copy)
        }
        Value::Map(entries) => {
            if let Some(copy) = lookup_copy(visited, value) {
                return copy;
            }
            let copy = Rc::new(RefCell::new(Vec::with_capacity(entries.borrow().len())));
            visited.push((value.clone(), Value::Map(Rc::clone(&copy))));
            for (key, item) in entries.borrow().iter() {
                let copied = copy_value(item, visited);
                copy.borrow_mut().push((key.clone(), copied));
            }
            Value::Map(copy)
        }
    }
}

fn lookup_copy(visited: &[(Value, Value)], original: &Value) -> Option<Value> {
    visited
        .iter()
        .find(|(seen, _)| Value::same_ref(seen, original))
        .map(|(_, copy)| copy.clone())
}

/// Structural equality over value graphs.
///
/// NaN compares equal to NaN, opaque values compare by kind and textual
/// representation, and kind mismatches (including map vs seq) are unequal
/// with no coercion. Containers compare member-by-member; re-entering a
/// container that is already being compared cuts the recursion, so the
/// predicate terminates on cyclic inputs.
pub fn deep_equal(left: &Value, right: &Value) -> bool {
    let mut left_chain: Vec<Value> = Vec::new();
    let mut right_chain: Vec<Value> = Vec::new();
    eq_values(left, right, &mut left_chain, &mut right_chain)
}

/// True when every value is structurally equal to the first. Zero or one
/// values are trivially equal.
pub fn deep_equal_all(values: &[Value]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|value| deep_equal(first, value)),
        None => true,
    }
}

fn eq_values(
    left: &Value,
    right: &Value,
    left_chain: &mut Vec<Value>,
    right_chain: &mut Vec<Value>,
) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Opaque(a), Value::Opaque(b)) => a.kind == b.kind && a.repr == b.repr,
        (Value::Seq(a), Value::Seq(b)) => {
            if Rc::ptr_eq(a, b) {
                return true;
            }
            if in_chain(left_chain, left) || in_chain(right_chain, right) {
                return false;
            }
            let (a, b) = (a.borrow(), b.borrow());
            if a.len() != b.len() {
                return false;
            }
            left_chain.push(left.clone());
            right_chain.push(right.clone());
            let equal = a
                .iter()
                .zip(b.iter())
                .all(|(x, y)| eq_values(x, y, left_chain, right_chain));
            left_chain.pop();
            right_chain.pop();
            equal
        }
        (Value::Map(a), Value::Map(b)) => {
            if Rc::ptr_eq(a, b) {
                return true;
            }
            if in_chain(left_chain, left) || in_chain(right_chain, right) {
                return false;
            }
            let (a, b) = (a.borrow(), b.borrow());
            if a.len() != b.len() {
                return false;
            }
            left_chain.push(left.clone());
            right_chain.push(right.clone());
            let equal = a.iter().all(|(key, x)| {
                match b.iter().find(|(other, _)| other == key) {
                    Some((_, y)) => eq_values(x, y, left_chain, right_chain),
                    None => false,
                }
            });
            left_chain.pop();
            right_chain.pop();
            equal
        }
        _ => false,
    }
}

fn in_chain(chain: &[Value], value: &Value) -> bool {
    chain.iter().any(|seen| Value::same_ref(seen, value))
}
