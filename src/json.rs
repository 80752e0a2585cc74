use std::fs;
use std::path::{Path, PathBuf};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::value::Value;
use crate::{Error, Result};

/// Convert a parsed JSON document into a value graph.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::seq(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => Value::map(
            map.iter()
                .map(|(key, item)| (key.clone(), from_json(item)))
                .collect(),
        ),
    }
}

/// Render a value graph as a JSON document.
///
/// Opaque values render as their textual representation and non-finite
/// numbers as null. Cyclic graphs have no JSON form and error with
/// `CYCLIC_VALUE`.
pub fn to_json(value: &Value) -> Result<serde_json::Value> {
    let mut in_progress: Vec<Value> = Vec::new();
    to_json_inner(value, &mut in_progress)
}

fn to_json_inner(value: &Value, in_progress: &mut Vec<Value>) -> Result<serde_json::Value> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Number(n) => Ok(serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)),
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Opaque(opaque) => Ok(serde_json::Value::String(opaque.repr.clone())),
        Value::Seq(items) => {
            check_not_in_progress(in_progress, value)?;
            in_progress.push(value.clone());
            let rendered = items
                .borrow()
                .iter()
                .map(|item| to_json_inner(item, in_progress))
                .collect::<Result<Vec<_>>>()?;
            in_progress.pop();
            Ok(serde_json::Value::Array(rendered))
        }
        Value::Map(entries) => {
            check_not_in_progress(in_progress, value)?;
            in_progress.push(value.clone());
            let mut rendered = serde_json::Map::new();
            for (key, item) in entries.borrow().iter() {
                rendered.insert(key.clone(), to_json_inner(item, in_progress)?);
            }
            in_progress.pop();
            Ok(serde_json::Value::Object(rendered))
        }
    }
}

fn check_not_in_progress(in_progress: &[Value], value: &Value) -> Result<()> {
    if in_progress.iter().any(|seen| Value::same_ref(seen, value)) {
        return Err(Error::CyclicValue(
            "Cannot render a cyclic value as JSON".to_string(),
        ));
    }
    Ok(())
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let json = to_json(self).map_err(serde::ser::Error::custom)?;
        json.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Ok(from_json(&json))
    }
}

pub fn read_value_file(path: impl AsRef<Path>) -> Result<Value> {
    let content = fs::read_to_string(&path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    Ok(from_json(&json))
}

pub fn write_value_file_pretty(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    let json = to_json(value)?;
    let content = serde_json::to_string_pretty(&json)?;
    write_file_atomic(path.as_ref(), content.as_bytes())
}

fn write_file_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Other(format!("Invalid path: {}", path.display())))?;
    let filename = path
        .file_name()
        .ok_or_else(|| Error::Other(format!("Invalid path: {}", path.display())))?;

    let tmp_path: PathBuf = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}
