//! Reading JSON result payloads for the `results` and `mcp-result` commands.

use crate::error::{AppError, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

/// Read a JSON value from `path`, or from `stdin` when `path` is `None` or `-`.
pub fn read_json_input(path: Option<&Path>, mut stdin: impl Read) -> Result<Value> {
    let (source, content) = match path {
        Some(p) if p != Path::new("-") => {
            let content = std::fs::read_to_string(p).map_err(|e| {
                AppError::InputError(format!("failed to read '{}': {}", p.display(), e))
            })?;
            (p.display().to_string(), content)
        }
        _ => {
            let mut content = String::new();
            stdin
                .read_to_string(&mut content)
                .map_err(|e| AppError::InputError(format!("failed to read stdin: {}", e)))?;
            ("stdin".to_string(), content)
        }
    };

    serde_json::from_str(&content)
        .map_err(|e| AppError::InputError(format!("{} is not valid JSON: {}", source, e)))
}

/// Split a JSON array into its elements, keeping their order.
pub fn expect_array(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(AppError::InputError(format!(
            "expected a JSON array of execution results, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
