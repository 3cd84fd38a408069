//! Response type for REST calls.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::AppError;

/// A decoded response: HTTP status plus JSON body.
///
/// Empty bodies decode to `Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RestResult {
    status: u16,
    body: JsonValue,
}

impl RestResult {
    /// Creates a result from a status code and body.
    pub fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Deserializes the whole body.
    pub fn read<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_value(self.body.clone()).map_err(AppError::from)
    }

    /// Gets a top-level field from the body, deserializing to the requested type.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not found or if deserialization fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let task_id: i64 = result.get("task_id")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, AppError> {
        self.body
            .get(key)
            .ok_or_else(|| AppError::Internal(format!("response field not found: {}", key)))
            .and_then(|v| {
                serde_json::from_value(v.clone()).map_err(|e| {
                    AppError::Internal(format!("failed to deserialize '{}': {}", key, e))
                })
            })
    }

    /// Gets a top-level field, returning `None` if missing or null.
    ///
    /// Still returns an error if the key exists but deserialization fails.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        match self.body.get(key) {
            Some(v) if v.is_null() => Ok(None),
            Some(v) => serde_json::from_value(v.clone())
                .map(Some)
                .map_err(|e| AppError::Internal(format!("failed to deserialize '{}': {}", key, e))),
            None => Ok(None),
        }
    }

    /// Reads a list wrapped under `key`, e.g. `{"vertices": [...]}`.
    ///
    /// A missing or null key reads as an empty list.
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        Ok(self.get_opt(key)?.unwrap_or_default())
    }

    /// Returns the raw JSON body.
    pub fn body(&self) -> &JsonValue {
        &self.body
    }

    /// Consumes the result and returns the body.
    pub fn into_body(self) -> JsonValue {
        self.body
    }
}
