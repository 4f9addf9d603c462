//! Mapping of HTTP responses to outcomes.

use premium_core::{ClientError, PredictionOutcome};
use serde_json::Value;

/// Build the outcome for a non-2xx response.
///
/// Message cascade: a truthy `detail` field of a JSON body, else the whole
/// JSON body as text, else the reason phrase, else `HTTP <status>`.
pub fn error_outcome(status: u16, reason: Option<&str>, body: Option<&[u8]>) -> PredictionOutcome {
    let parsed = body.and_then(|b| serde_json::from_slice::<Value>(b).ok());
    PredictionOutcome::http_error(status, error_message(status, reason, parsed.as_ref()))
}

/// Best-effort human message for an error response.
pub fn error_message(status: u16, reason: Option<&str>, body: Option<&Value>) -> String {
    if let Some(body) = body {
        if let Some(detail) = body.get("detail").filter(|d| is_truthy(d)) {
            return match detail {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
        }
        return body.to_string();
    }
    match reason {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => format!("HTTP {status}"),
    }
}

/// Extract `prediction` from a 2xx body.
pub fn success_outcome(body: &[u8]) -> Result<PredictionOutcome, ClientError> {
    let data: Value = serde_json::from_slice(body).map_err(|e| ClientError::Decode {
        reason: e.to_string(),
    })?;
    let prediction = data
        .get("prediction")
        .cloned()
        .ok_or(ClientError::MissingPrediction)?;
    Ok(PredictionOutcome::success(prediction))
}

/// JSON truthiness: `null`, `false`, `0`, and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
