//! Vertex REST API.

use crate::context::{AppRest, Context, GraphName};
use crate::di::FromContext;
use crate::error::AppError;
use crate::rest::RestExt;
use crate::structure::{Id, Properties, UpdateAction, Vertex};

/// Calls on `graphs/{graph}/graph/vertices`.
#[derive(FromContext, Clone)]
pub struct VertexApi {
    rest: AppRest,
    graph: GraphName,
}

impl VertexApi {
    fn path(&self, tail: &[&str]) -> Vec<String> {
        let mut path = self.graph.path(&["graph", "vertices"]);
        path.extend(tail.iter().map(|s| s.to_string()));
        path
    }

    pub async fn create(&self, vertex: &Vertex) -> Result<Vertex, AppError> {
        self.rest.post(self.path(&[])).body(vertex).fetch().await
    }

    /// Creates vertices in one call; the server answers with their ids in order.
    pub async fn create_batch(&self, vertices: &[Vertex]) -> Result<Vec<Id>, AppError> {
        self.rest
            .post(self.path(&["batch"]))
            .body(&vertices)
            .fetch()
            .await
    }

    pub async fn get(&self, id: &Id) -> Result<Vertex, AppError> {
        self.rest.get(self.path(&[id.to_json().as_str()])).fetch().await
    }

    pub async fn list(
        &self,
        label: Option<&str>,
        properties: &Properties,
        limit: i64,
    ) -> Result<Vec<Vertex>, AppError> {
        let properties = if properties.is_empty() {
            None
        } else {
            Some(serde_json::to_string(properties)?)
        };
        self.rest
            .get(self.path(&[]))
            .param_opt("label", label)
            .param_opt("properties", properties)
            .param("limit", limit)
            .fetch_list("vertices")
            .await
    }

    pub async fn update(
        &self,
        id: &Id,
        vertex: &Vertex,
        action: UpdateAction,
    ) -> Result<Vertex, AppError> {
        self.rest
            .put(self.path(&[id.to_json().as_str()]))
            .param("action", action.as_str())
            .body(vertex)
            .fetch()
            .await
    }

    pub async fn delete(&self, id: &Id) -> Result<(), AppError> {
        self.rest.delete(self.path(&[id.to_json().as_str()])).run().await
    }
}
