//! reqwest-backed implementation of [`RestExecutor`].
//!
//! # Example
//!
//! ```ignore
//! use hugegraph_client::config::ServerConfig;
//! use hugegraph_client::rest::{RestClient, RestExt};
//!
//! let client = RestClient::new(&ServerConfig::new("http://localhost:8080", "hugegraph"))?;
//! let versions = client.get(["versions"]).send().await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::rest::response::RestResult;
use crate::rest::traits::{RestExecutor, RestRequest};

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    exception: Option<String>,
    message: Option<String>,
    cause: Option<String>,
}

/// HTTP client for the HugeGraph REST API.
///
/// Cheap to clone: `reqwest::Client` is `Arc`-based.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_url: Url,
    auth: Option<(String, Option<String>)>,
}

impl RestClient {
    /// Creates a client from server settings. Does not touch the network.
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        let base_url = parse_base_url(&config.url)?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url,
            auth: config
                .username
                .clone()
                .map(|user| (user, config.password.clone())),
        })
    }

    /// Returns the base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves path segments and query parameters into a full URL.
    ///
    /// Segments are percent-encoded individually, so ids such as
    /// `"1:marko"` or `S1:a>1>>S1:b` survive intact.
    fn build_url(&self, request: &RestRequest) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| AppError::Url(format!("cannot-be-a-base URL: {}", self.base_url)))?;
            segments.pop_if_empty();
            segments.extend(request.path.iter());
        }
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }
}

/// Parses and normalises the configured server URL.
fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|e| AppError::Url(format!("'{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::Url(format!(
            "unsupported scheme '{}' in '{}', expected http or https",
            other, raw
        ))),
    }
}

/// Decodes a response body; empty bodies become `Null`.
fn decode_body(text: &str) -> Result<JsonValue, AppError> {
    if text.trim().is_empty() {
        return Ok(JsonValue::Null);
    }
    serde_json::from_str(text).map_err(AppError::from)
}

/// Maps a non-2xx response to [`AppError::Server`].
fn server_error(status: u16, text: &str) -> AppError {
    match serde_json::from_str::<ServerErrorBody>(text) {
        Ok(body) => AppError::Server {
            status,
            exception: body.exception,
            message: body.message.unwrap_or_else(|| text.to_string()),
            cause: body.cause,
        },
        Err(_) => AppError::Server {
            status,
            exception: None,
            message: text.to_string(),
            cause: None,
        },
    }
}

#[async_trait]
impl RestExecutor for RestClient {
    async fn execute(&self, request: RestRequest) -> Result<RestResult, AppError> {
        let url = self.build_url(&request)?;
        let method = request.method.clone();

        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some((user, password)) = &self.auth {
            builder = builder.basic_auth(user, password.as_ref());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "request failed");
            AppError::Http(e)
        })?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        tracing::debug!(%method, %url, status, "response received");

        if !(200..300).contains(&status) {
            return Err(server_error(status, &text));
        }

        Ok(RestResult::new(status, decode_body(&text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn client(url: &str) -> RestClient {
        RestClient::new(&ServerConfig::new(url, "hugegraph")).unwrap()
    }

    #[test]
    fn test_build_url_encodes_segments() {
        let client = client("http://localhost:8080");
        let mut request = RestRequest::new(
            Method::GET,
            vec![
                "graphs".into(),
                "hugegraph".into(),
                "graph".into(),
                "vertices".into(),
                "\"1:marko\"".into(),
            ],
        );
        request.query.push(("label".into(), "person".into()));

        let url = client.build_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/graphs/hugegraph/graph/vertices/%221:marko%22?label=person"
        );
    }

    #[test]
    fn test_build_url_keeps_base_path() {
        let client = client("http://proxy.local/hg/");
        let request = RestRequest::new(Method::GET, vec!["versions".into()]);
        let url = client.build_url(&request).unwrap();
        assert_eq!(url.as_str(), "http://proxy.local/hg/versions");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = RestClient::new(&ServerConfig::new("ftp://files", "g"))
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Url(_)));
    }

    #[test]
    fn test_server_error_parses_body() {
        let err = server_error(
            400,
            r#"{"exception":"java.lang.IllegalArgumentException","message":"Invalid alpha","cause":"[]"}"#,
        );
        match err {
            AppError::Server {
                status,
                exception,
                message,
                cause,
            } => {
                assert_eq!(status, 400);
                assert_eq!(exception.as_deref(), Some("java.lang.IllegalArgumentException"));
                assert_eq!(message, "Invalid alpha");
                assert_eq!(cause.as_deref(), Some("[]"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_server_error_plain_text() {
        let err = server_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Server error 502: Bad Gateway");
    }

    #[test]
    fn test_decode_empty_body() {
        assert_eq!(decode_body("").unwrap(), JsonValue::Null);
        assert!(decode_body("{oops").is_err());
    }
}
