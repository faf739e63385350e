use serde::Serialize;
use serde_json::{Map, Value};
use shasha_models::contact::FieldValue;

pub mod contact;
pub mod newsletter;

#[derive(Debug, Serialize)]
pub struct ApiSuccess {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

/// The body must be an object in which all of `required` are present and not `null`.
fn object_with_fields(body: Value, required: &[&str]) -> Option<Map<String, Value>> {
    let Value::Object(fields) = body else {
        return None;
    };
    required
        .iter()
        .all(|&key| fields.get(key).is_some_and(|value| !value.is_null()))
        .then_some(fields)
}

fn take_field(fields: &mut Map<String, Value>, key: &str) -> FieldValue {
    match fields.remove(key) {
        None | Some(Value::Null) => FieldValue::Absent,
        Some(Value::String(value)) => FieldValue::Text(value),
        Some(_) => FieldValue::Malformed,
    }
}
