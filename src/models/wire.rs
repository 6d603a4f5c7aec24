use serde::de::DeserializeOwned;
use serde_json::Value;

/// Resolves a field that the platform may send in snake_case or camelCase.
///
/// The snake_case value wins. The camelCase value is only decoded when the
/// snake_case key is absent, so a stray camelCase key next to a present
/// snake_case one is ignored like any other unknown key.
pub fn prefer_snake<T: DeserializeOwned>(
    field: &str,
    snake: Option<T>,
    camel: Option<Value>,
) -> Result<Option<T>, String> {
    match (snake, camel) {
        (Some(value), _) => Ok(Some(value)),
        (None, None) | (None, Some(Value::Null)) => Ok(None),
        (None, Some(raw)) => serde_json::from_value(raw)
            .map(Some)
            .map_err(|e| format!("invalid value for {}: {}", field, e)),
    }
}

/// Message for a record whose required fields were not all supplied.
pub fn missing_fields_message(fields: &[(&str, bool)]) -> Option<String> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !*present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("missing required field(s): {}", missing.join(", ")))
    }
}
