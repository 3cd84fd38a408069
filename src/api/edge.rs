//! Edge REST API.

use crate::context::{AppRest, Context, GraphName};
use crate::di::FromContext;
use crate::error::AppError;
use crate::rest::RestExt;
use crate::structure::{Direction, Edge, Id, Properties, UpdateAction};

/// Calls on `graphs/{graph}/graph/edges`.
///
/// Edge ids are opaque strings and go into the path unquoted.
#[derive(FromContext, Clone)]
pub struct EdgeApi {
    rest: AppRest,
    graph: GraphName,
}

impl EdgeApi {
    fn path(&self, tail: &[&str]) -> Vec<String> {
        let mut path = self.graph.path(&["graph", "edges"]);
        path.extend(tail.iter().map(|s| s.to_string()));
        path
    }

    pub async fn create(&self, edge: &Edge) -> Result<Edge, AppError> {
        self.rest.post(self.path(&[])).body(edge).fetch().await
    }

    /// Creates edges in one call. With `check_vertex` the server verifies
    /// that both endpoints exist.
    pub async fn create_batch(
        &self,
        edges: &[Edge],
        check_vertex: bool,
    ) -> Result<Vec<String>, AppError> {
        self.rest
            .post(self.path(&["batch"]))
            .param("check_vertex", check_vertex)
            .body(&edges)
            .fetch()
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Edge, AppError> {
        self.rest.get(self.path(&[id])).fetch().await
    }

    pub async fn list(
        &self,
        vertex_id: Option<&Id>,
        direction: Direction,
        label: Option<&str>,
        properties: &Properties,
        limit: i64,
    ) -> Result<Vec<Edge>, AppError> {
        let properties = if properties.is_empty() {
            None
        } else {
            Some(serde_json::to_string(properties)?)
        };
        let mut request = self.rest.get(self.path(&[]));
        if let Some(id) = vertex_id {
            request = request
                .param("vertex_id", id.to_json())
                .param("direction", direction.as_str());
        }
        request
            .param_opt("label", label)
            .param_opt("properties", properties)
            .param("limit", limit)
            .fetch_list("edges")
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        edge: &Edge,
        action: UpdateAction,
    ) -> Result<Edge, AppError> {
        self.rest
            .put(self.path(&[id]))
            .param("action", action.as_str())
            .body(edge)
            .fetch()
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.rest.delete(self.path(&[id])).run().await
    }
}
