//! Response envelopes shared by every API endpoint.

use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    #[serde(default)]
    pub error: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Optional details (field errors and similar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorResponse {
    /// Try to read an error body, returning `None` when it is not JSON of this shape.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Message suitable for display, including field details when present.
    pub fn display_message(&self) -> String {
        match &self.details {
            Some(serde_json::Value::Object(fields)) if !fields.is_empty() => {
                let mut parts: Vec<String> = fields
                    .iter()
                    .map(|(field, reason)| match reason.as_str() {
                        Some(text) => format!("{field}: {text}"),
                        None => format!("{field}: {reason}"),
                    })
                    .collect();
                parts.sort();
                format!("{} ({})", self.message, parts.join("; "))
            }
            _ => self.message.clone(),
        }
    }
}
