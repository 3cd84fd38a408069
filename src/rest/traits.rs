//! Core trait for the HTTP transport.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::rest::response::RestResult;

/// A fully described REST call, independent of the HTTP library.
///
/// `path` holds raw (unencoded) segments relative to the server base URL;
/// the executor is responsible for percent-encoding them.
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub path: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<JsonValue>,
}

impl RestRequest {
    /// Creates a request without parameters or body.
    pub fn new(method: Method, path: Vec<String>) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    /// Returns the path joined with `/`, for logging and assertions.
    pub fn path_str(&self) -> String {
        self.path.join("/")
    }

    /// Returns the value of a query parameter, if set.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Executes REST calls against a HugeGraph server.
///
/// This is the seam between the typed API layer and the wire. The
/// production implementation is [`RestClient`](crate::rest::RestClient);
/// tests substitute recording executors.
#[async_trait]
pub trait RestExecutor: Send + Sync {
    /// Sends the request and returns the decoded response.
    ///
    /// Non-2xx responses must be reported as [`AppError::Server`].
    async fn execute(&self, request: RestRequest) -> Result<RestResult, AppError>;
}

#[async_trait]
impl<E: RestExecutor + ?Sized> RestExecutor for std::sync::Arc<E> {
    async fn execute(&self, request: RestRequest) -> Result<RestResult, AppError> {
        (**self).execute(request).await
    }
}
