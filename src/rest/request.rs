//! Request builder for fluent REST call construction.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;
use crate::rest::response::RestResult;
use crate::rest::traits::{RestExecutor, RestRequest};

/// A builder for constructing and executing REST calls.
///
/// `Request` provides a fluent API for adding query parameters and a JSON
/// body, then executing against any [`RestExecutor`].
///
/// # Example
///
/// ```ignore
/// let vertices: Vec<Vertex> = rest
///     .get(["graphs", "hugegraph", "graph", "vertices"])
///     .param("label", "person")
///     .param("limit", 10)
///     .fetch_list("vertices")
///     .await?;
/// ```
pub struct Request<'a, E: RestExecutor + ?Sized> {
    executor: &'a E,
    request: RestRequest,
    error: Option<AppError>,
}

impl<'a, E: RestExecutor + ?Sized> Request<'a, E> {
    /// Creates a new request builder.
    pub fn new<I, S>(executor: &'a E, method: Method, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            executor,
            request: RestRequest::new(method, path.into_iter().map(Into::into).collect()),
            error: None,
        }
    }

    /// Adds a query parameter.
    ///
    /// Strings are sent as-is; other values use their JSON text
    /// (so `10` becomes `10` and `true` becomes `true`).
    pub fn param<T: Serialize>(mut self, name: &str, value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(serde_json::Value::String(s)) => self.request.query.push((name.to_string(), s)),
            Ok(serde_json::Value::Null) => {}
            Ok(other) => self.request.query.push((name.to_string(), other.to_string())),
            Err(e) => self.error = Some(e.into()),
        }
        self
    }

    /// Adds a query parameter only when `value` is `Some`.
    pub fn param_opt<T: Serialize>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Sets the JSON body.
    pub fn body<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(v) => self.request.body = Some(v),
            Err(e) => self.error = Some(e.into()),
        }
        self
    }

    /// Returns the request that would be sent.
    pub fn as_rest_request(&self) -> &RestRequest {
        &self.request
    }

    /// Sends the request and returns the raw result.
    pub async fn send(self) -> Result<RestResult, AppError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.executor.execute(self.request).await
    }

    /// Sends the request and deserializes the whole body.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, AppError> {
        self.send().await?.read()
    }

    /// Sends the request and reads the list wrapped under `key`.
    pub async fn fetch_list<T: DeserializeOwned>(self, key: &str) -> Result<Vec<T>, AppError> {
        self.send().await?.read_list(key)
    }

    /// Sends the request, discarding the body.
    pub async fn run(self) -> Result<(), AppError> {
        self.send().await.map(|_| ())
    }
}

/// Extension trait providing HTTP-verb shortcuts.
///
/// Implemented for all [`RestExecutor`] types, so `rest.get(path)` can be
/// written instead of `Request::new(&rest, Method::GET, path)`.
pub trait RestExt: RestExecutor {
    fn get<I, S>(&self, path: I) -> Request<'_, Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request::new(self, Method::GET, path)
    }

    fn post<I, S>(&self, path: I) -> Request<'_, Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request::new(self, Method::POST, path)
    }

    fn put<I, S>(&self, path: I) -> Request<'_, Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request::new(self, Method::PUT, path)
    }

    fn delete<I, S>(&self, path: I) -> Request<'_, Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Request::new(self, Method::DELETE, path)
    }
}

impl<E: RestExecutor + ?Sized> RestExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Mock executor asserting on the request it receives
    struct MockExecutor {
        expected: RestRequest,
    }

    #[async_trait::async_trait]
    impl RestExecutor for MockExecutor {
        async fn execute(&self, request: RestRequest) -> Result<RestResult, AppError> {
            assert_eq!(request, self.expected);
            Ok(RestResult::new(200, json!({"vertices": [{"id": 1}]})))
        }
    }

    #[tokio::test]
    async fn test_get_with_params() {
        let mut expected = RestRequest::new(
            Method::GET,
            vec!["graphs".into(), "g".into(), "graph".into(), "vertices".into()],
        );
        expected.query = vec![
            ("label".into(), "person".into()),
            ("limit".into(), "10".into()),
        ];

        let executor = MockExecutor { expected };
        let rows: Vec<serde_json::Value> = executor
            .get(["graphs", "g", "graph", "vertices"])
            .param("label", "person")
            .param("limit", 10)
            .param_opt::<&str>("page", None)
            .fetch_list("vertices")
            .await
            .unwrap();
        assert_eq!(rows, vec![json!({"id": 1})]);
    }

    #[tokio::test]
    async fn test_post_with_body() {
        let mut expected = RestRequest::new(Method::POST, vec!["graphs".into()]);
        expected.body = Some(json!({"name": "age"}));

        let executor = MockExecutor { expected };
        let result = executor
            .post(["graphs"])
            .body(&json!({"name": "age"}))
            .run()
            .await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_json_encoded_param() {
        let executor = MockExecutor {
            expected: RestRequest::new(Method::GET, vec![]),
        };
        let request = executor
            .get(Vec::<String>::new())
            .param("source", "\"1:marko\"")
            .param("nearest", true);
        assert_eq!(
            request.as_rest_request().query_param("source"),
            Some("\"1:marko\"")
        );
        assert_eq!(request.as_rest_request().query_param("nearest"), Some("true"));
    }
}
