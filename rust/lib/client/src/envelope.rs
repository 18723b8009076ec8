use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{join_validation_errors, ApiError};

/// Response envelope: `{ data, message?, validationErrors? }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub validation_errors: Option<Map<String, Value>>,
}

impl<T> Envelope<T> {
    /// Unwrap `data` from a 2xx envelope.
    ///
    /// An error-shaped body (validation map, or `message` without `data`) is
    /// still an error even though the status was a success.
    pub fn into_data(self, status: u16) -> Result<T, ApiError> {
        if let Some(joined) = self.validation_errors.as_ref().and_then(join_validation_errors) {
            return Err(ApiError::Validation(joined));
        }
        match (self.data, self.message) {
            (Some(data), _) => Ok(data),
            (None, Some(message)) if !message.trim().is_empty() => {
                Err(ApiError::Api { status, message })
            }
            (None, _) => Err(ApiError::unexpected("Response did not contain data")),
        }
    }
}

/// One page of a paginated listing, exactly as the server reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based page index.
    pub number: u32,
    pub size: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    /// An empty first page, for views that have not loaded yet.
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size,
            has_next: false,
            has_previous: false,
        }
    }
}

/// Zero-based page request, sent as `?page=&size=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}
