use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Shown when a request was sent but no response came back.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Shown when nothing more specific is known.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Client-side API error. Every service failure is exactly one of these, and
/// its `Display` is the message the console shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Server rejected fields; messages joined in server order.
    #[error("{0}")]
    Validation(String),

    /// Server supplied a `message`.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No response received. The detail is for logs only.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(String),

    /// Anything else.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// The user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// An unexpected error with `msg`, or the generic fallback when empty.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.trim().is_empty() {
            ApiError::Unexpected(FALLBACK_ERROR_MESSAGE.to_string())
        } else {
            ApiError::Unexpected(msg)
        }
    }

    /// Normalize a non-2xx response.
    ///
    /// Preference order: validation map, then `message`, then the status line.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = serde_json::from_slice::<ErrorBody>(body).unwrap_or_default();
        if let Some(joined) = parsed.validation_errors.as_ref().and_then(join_validation_errors) {
            return ApiError::Validation(joined);
        }
        match parsed.message {
            Some(message) if !message.trim().is_empty() => ApiError::Api { status, message },
            _ => ApiError::unexpected(format!("Request failed with status code {}", status)),
        }
    }

    /// Normalize a failure to obtain a response at all. A request that could
    /// not be built (bad base URL) was never sent, so it keeps its own message.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            return ApiError::unexpected(err.to_string());
        }
        ApiError::Network(err.to_string())
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error-shaped body fields of the response envelope.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    validation_errors: Option<Map<String, Value>>,
}

/// Join a `field -> message` map into one comma-separated message.
///
/// Returns `None` for an empty map.
pub fn join_validation_errors(errors: &Map<String, Value>) -> Option<String> {
    if errors.is_empty() {
        return None;
    }
    let joined = errors
        .values()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(joined)
}
