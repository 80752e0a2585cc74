use crate::value::Value;
use crate::{Error, Result};

/// Look up a nested value by dot-separated path ("a.b.0.c").
///
/// Maps are walked by key, sequences by numeric index. The empty path
/// resolves to the root. Any missing segment, bad index, or traversal
/// through a scalar yields None.
pub fn get_path(root: &Value, path: &str) -> Option<Value> {
    if path.is_empty() {
        return Some(root.clone());
    }

    let mut current = root.clone();
    for segment in path.split('.') {
        let next = match &current {
            Value::Map(entries) => entries
                .borrow()
                .iter()
                .find(|(key, _)| key == segment)
                .map(|(_, item)| item.clone()),
            Value::Seq(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.borrow().get(index).cloned()),
            _ => None,
        };
        current = next?;
    }

    Some(current)
}

/// Set the value at a dot-separated path, replacing an existing map entry
/// or sequence element, or appending a new map entry. Every parent segment
/// must already exist.
pub fn set_path(root: &Value, path: &str, new_value: Value) -> Result<()> {
    let (parent, leaf) = resolve_parent(root, path)?;
    set_child(&parent, &leaf, new_value)
}

/// Remove the value at a dot-separated path. Removing a missing map key is
/// a no-op; sequence removal shifts later elements down.
pub fn remove_path(root: &Value, path: &str) -> Result<()> {
    let (parent, leaf) = resolve_parent(root, path)?;
    remove_child(&parent, &leaf)
}

fn resolve_parent(root: &Value, path: &str) -> Result<(Value, String)> {
    if path.is_empty() {
        return Err(Error::InvalidPath(
            "Cannot address the root value".to_string(),
        ));
    }

    match path.rsplit_once('.') {
        Some((parent_path, leaf)) => {
            let parent = get_path(root, parent_path).ok_or_else(|| {
                Error::InvalidPath(format!("Parent path not found: {}", parent_path))
            })?;
            Ok((parent, leaf.to_string()))
        }
        None => Ok((root.clone(), path.to_string())),
    }
}

fn set_child(parent: &Value, leaf: &str, new_value: Value) -> Result<()> {
    match parent {
        Value::Map(_) => {
            parent.set(leaf, new_value);
            Ok(())
        }
        Value::Seq(items) => {
            let index = parse_index(leaf)?;
            let mut items = items.borrow_mut();
            if index >= items.len() {
                return Err(Error::InvalidPath(format!(
                    "Sequence index out of bounds: {}",
                    index
                )));
            }
            items[index] = new_value;
            Ok(())
        }
        other => Err(Error::InvalidPath(format!(
            "Cannot set '{}' on {}",
            leaf,
            other.kind()
        ))),
    }
}

fn remove_child(parent: &Value, leaf: &str) -> Result<()> {
    match parent {
        Value::Map(_) => {
            parent.remove(leaf);
            Ok(())
        }
        Value::Seq(items) => {
            let index = parse_index(leaf)?;
            let mut items = items.borrow_mut();
            if index >= items.len() {
                return Err(Error::InvalidPath(format!(
                    "Sequence index out of bounds: {}",
                    index
                )));
            }
            items.remove(index);
            Ok(())
        }
        other => Err(Error::InvalidPath(format!(
            "Cannot remove '{}' from {}",
            leaf,
            other.kind()
        ))),
    }
}

fn parse_index(token: &str) -> Result<usize> {
    token
        .parse::<usize>()
        .map_err(|_| Error::InvalidPath(format!("Invalid sequence index '{}'", token)))
}
