use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Load a conversation export (a JSON array of conversation objects)
///
/// The whole document is parsed up front; a malformed file aborts the run
/// before anything is written. Entries are returned untouched, including ones
/// that are not objects, so callers decide what to skip.
pub fn load_export(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open conversation export: {}", path.display()))?;
    let reader = BufReader::new(file);

    let document: Value = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse conversation export: {}", path.display()))?;

    match document {
        Value::Array(conversations) => Ok(conversations),
        other => bail!(
            "Conversation export must be a JSON array, found {} in {}",
            json_type_name(&other),
            path.display()
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
