//! Client context providing the dependency injection root.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::rest::{RestClient, RestExecutor};

/// Shared transport handle.
pub type AppRest = Arc<dyn RestExecutor>;

/// Name of the graph every API path is scoped to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphName(Arc<str>);

impl GraphName {
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Builds `graphs/{graph}/<tail...>` path segments.
    pub fn path(&self, tail: &[&str]) -> Vec<String> {
        let mut segments = Vec::with_capacity(tail.len() + 2);
        segments.push("graphs".to_string());
        segments.push(self.0.to_string());
        segments.extend(tail.iter().map(|s| s.to_string()));
        segments
    }
}

impl Deref for GraphName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root context for dependency injection.
///
/// Uses `#[derive(Context)]` to generate `FromRef` implementations for each
/// field, so API types and managers resolve their dependencies at compile time.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Transport used by every API call.
    pub rest: AppRest,
    /// Graph the client is bound to.
    pub graph: GraphName,
}

impl Context {
    /// Creates a context over an arbitrary executor.
    pub fn new(rest: AppRest, graph: &str) -> Self {
        Self {
            rest,
            graph: GraphName::new(graph),
        }
    }

    /// Creates a context backed by a [`RestClient`].
    pub fn from_config(config: &ServerConfig) -> Result<Self, AppError> {
        let client = RestClient::new(config)?;
        Ok(Self::new(Arc::new(client), &config.graph))
    }
}
