//! Client entry point.

use crate::api::{ServerVersion, VersionApi};
use crate::config::{Config, ServerConfig};
use crate::context::Context;
use crate::di::FromRef;
use crate::driver::{GraphManager, SchemaManager, TraverserManager};
use crate::error::AppError;

/// Handle to one graph on a HugeGraph server.
///
/// Cheap to clone; managers are resolved from the shared [`Context`] on each
/// call and share its HTTP connection pool.
///
/// ```ignore
/// let client = HugeClient::connect("http://localhost:8080", "hugegraph").await?;
/// let marko = client
///     .graph()
///     .add_vertex(&Vertex::new("person").property("name", "marko"))
///     .await?;
/// ```
#[derive(Clone)]
pub struct HugeClient {
    ctx: Context,
}

impl HugeClient {
    /// Creates a client without contacting the server.
    pub fn new(url: &str, graph: &str) -> Result<Self, AppError> {
        Self::from_server_config(&ServerConfig::new(url, graph))
    }

    /// Creates a client and checks that the server answers.
    pub async fn connect(url: &str, graph: &str) -> Result<Self, AppError> {
        let client = Self::new(url, graph)?;
        let version = client.version().await?;
        tracing::info!(
            url,
            graph,
            api = version.api.as_deref().unwrap_or("unknown"),
            "Connected to HugeGraph"
        );
        Ok(client)
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::from_server_config(&config.server)
    }

    pub fn from_server_config(config: &ServerConfig) -> Result<Self, AppError> {
        Ok(Self::with_context(Context::from_config(config)?))
    }

    /// Wraps an existing context, e.g. one over a custom executor.
    pub fn with_context(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Name of the graph this client is bound to.
    pub fn graph_name(&self) -> &str {
        &self.ctx.graph
    }

    pub fn schema(&self) -> SchemaManager {
        SchemaManager::from_ref(&self.ctx)
    }

    pub fn graph(&self) -> GraphManager {
        GraphManager::from_ref(&self.ctx)
    }

    pub fn traverser(&self) -> TraverserManager {
        TraverserManager::from_ref(&self.ctx)
    }

    pub async fn version(&self) -> Result<ServerVersion, AppError> {
        VersionApi::from_ref(&self.ctx).get().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::ScriptedExecutor;
    use serde_json::json;

    #[tokio::test]
    async fn test_version() {
        let executor = ScriptedExecutor::new(vec![json!({
            "versions": {
                "version": "v1",
                "core": "1.0.0",
                "gremlin": "3.5.1",
                "api": "0.69.0.0"
            }
        })]);
        let client = HugeClient::with_context(executor.context());

        let version = client.version().await.unwrap();
        assert_eq!(version.version, "v1");
        assert_eq!(version.api.as_deref(), Some("0.69.0.0"));
        assert_eq!(executor.request(0).path, vec!["versions"]);
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let err = HugeClient::new("localhost:8080", "hugegraph").err().unwrap();
        assert!(matches!(err, AppError::Url(_)));
    }

    #[test]
    fn test_graph_name() {
        let client = HugeClient::new("http://localhost:8080", "social").unwrap();
        assert_eq!(client.graph_name(), "social");
    }
}
