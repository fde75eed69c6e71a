//! JSON mapping and artifact IO
//!
//! Artifacts are written with 4-space indentation and keep object key
//! order as read. Output is plain UTF-8: non-ASCII characters are written
//! as-is, not as `\uXXXX` escapes. Readers accept either form.

use std::fs;
use std::path::Path;

use classforge_core::{DeltaRecord, Mapping};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::atomic::atomic_write;
use crate::errors::{invalid_input, io_error, json_error, Result};

const INDENT: &[u8] = b"    ";

/// Read any JSON document into `T`
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Serialization` if it does
/// not deserialize into `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_json", path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| json_error("read_json", e).with_entity_id(path.display().to_string()))
}

/// Read a flat configuration mapping
///
/// # Errors
///
/// Fails with `InvalidInput` if the top-level JSON value is not an object.
pub fn read_mapping(path: &Path) -> Result<Mapping> {
    match read_json::<Value>(path)? {
        Value::Object(map) => Ok(map),
        other => Err(invalid_input(
            "read_mapping",
            &format!(
                "top-level JSON value must be an object, found {}",
                json_type_name(&other)
            ),
        )
        .with_entity_id(path.display().to_string())),
    }
}

/// Read a delta document (`additions`, `deletions`, `updates`)
///
/// # Errors
///
/// As [`read_json`].
pub fn read_delta(path: &Path) -> Result<DeltaRecord> {
    read_json(path)
}

/// Serialize `value` as 4-space-indented JSON
///
/// # Errors
///
/// Returns `Serialization` if `value` cannot be represented as JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|e| json_error("to_json_pretty", e))?;

    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Write `value` to `path` as 4-space-indented JSON
///
/// # Errors
///
/// Returns `Serialization` or `Io` on failure.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = to_json_pretty(value)?;
    atomic_write(path, text.as_bytes())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
