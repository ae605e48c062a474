use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Nudge model-emitted arguments toward a tool's schema. Models routinely
/// quote integers, and occasionally double-encode the whole argument object
/// as a JSON string; both are recoverable without a round trip through the
/// model.
pub fn coerce_to_schema(value: &Value, schema: &Value) -> Result<Value> {
    let schema_type = schema
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("object");

    match (schema_type, value) {
        ("object", Value::String(raw)) => {
            let parsed: Value = serde_json::from_str(raw)
                .context("Arguments were a string that did not parse as JSON")?;
            coerce_to_schema(&parsed, schema)
        }
        ("object", Value::Object(map)) => {
            let Some(properties) = schema.get("properties").and_then(Value::as_object) else {
                return Ok(value.clone());
            };

            let mut coerced = serde_json::Map::new();
            for (key, item) in map {
                let item = match properties.get(key) {
                    Some(property) => coerce_to_schema(item, property)
                        .with_context(|| format!("Failed to coerce parameter '{key}'"))?,
                    None => item.clone(),
                };
                coerced.insert(key.clone(), item);
            }
            Ok(Value::Object(coerced))
        }
        ("integer", Value::String(raw)) => match raw.trim().parse::<i64>() {
            Ok(number) => Ok(Value::from(number)),
            Err(_) => bail!("Expected an integer, got {raw:?}"),
        },
        ("boolean", Value::String(raw)) => match raw.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => bail!("Expected a boolean, got {other:?}"),
        },
        ("string", Value::Number(number)) => Ok(Value::String(number.to_string())),
        _ => Ok(value.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "path": {"type": "string"},
                "start_line": {"type": "integer"},
                "end_line": {"type": "integer"}
            }
        })
    }

    #[test]
    fn passes_through_well_formed_arguments() {
        let args = json!({"path": "a.txt", "start_line": 1, "end_line": 2});
        assert_eq!(coerce_to_schema(&args, &schema()).unwrap(), args);
    }

    #[test]
    fn unquotes_stringified_integers() {
        let args = json!({"path": "a.txt", "start_line": "1", "end_line": " 2 "});
        let coerced = coerce_to_schema(&args, &schema()).unwrap();
        assert_eq!(coerced["start_line"], json!(1));
        assert_eq!(coerced["end_line"], json!(2));
    }

    #[test]
    fn parses_double_encoded_argument_objects() {
        let args = json!(r#"{"path": "a.txt", "start_line": "3"}"#);
        let coerced = coerce_to_schema(&args, &schema()).unwrap();
        assert_eq!(coerced["path"], json!("a.txt"));
        assert_eq!(coerced["start_line"], json!(3));
    }

    #[test]
    fn rejects_unparseable_integers() {
        let args = json!({"start_line": "two"});
        assert!(coerce_to_schema(&args, &schema()).is_err());
    }
}
