//! Graph manager: vertex and edge CRUD.

use crate::api::{EdgeApi, VertexApi};
use crate::context::Context;
use crate::di::FromContext;
use crate::error::{check_argument, AppError};
use crate::structure::{Direction, Edge, Id, Properties, UpdateAction, Vertex};

/// Largest batch accepted by the server's batch endpoints.
pub const BATCH_MAX: usize = 500;

/// Default page size for vertex and edge listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Manages the vertices and edges of one graph.
#[derive(FromContext, Clone)]
pub struct GraphManager {
    vertices: VertexApi,
    edges: EdgeApi,
}

fn check_batch(kind: &str, size: usize) -> Result<(), AppError> {
    check_argument(size > 0, || format!("The {} batch can't be empty", kind))?;
    check_argument(size <= BATCH_MAX, || {
        format!(
            "The {} batch size must be <= {}, but got: {}",
            kind, BATCH_MAX, size
        )
    })
}

fn check_returned(kind: &str, sent: usize, returned: usize) -> Result<(), AppError> {
    if sent != returned {
        return Err(AppError::Internal(format!(
            "Sent {} {}s but the server returned {} ids",
            sent, kind, returned
        )));
    }
    Ok(())
}

fn require_edge_id(edge: &Edge) -> Result<&str, AppError> {
    edge.id().ok_or_else(|| {
        AppError::InvalidArgument(format!("The id of edge '{}' can't be null", edge.label()))
    })
}

impl GraphManager {
    // ========================================================================
    // Vertices
    // ========================================================================

    pub async fn add_vertex(&self, vertex: &Vertex) -> Result<Vertex, AppError> {
        self.vertices.create(vertex).await
    }

    /// Creates up to [`BATCH_MAX`] vertices in one request and returns them
    /// with the ids the server assigned.
    pub async fn add_vertices(&self, vertices: Vec<Vertex>) -> Result<Vec<Vertex>, AppError> {
        check_batch("vertex", vertices.len())?;
        let ids = self.vertices.create_batch(&vertices).await?;
        check_returned("vertex", vertices.len(), ids.len())?;
        tracing::debug!(count = ids.len(), "Created vertices");

        Ok(vertices
            .into_iter()
            .zip(ids)
            .map(|(vertex, id)| vertex.with_id(id))
            .collect())
    }

    pub async fn get_vertex(&self, id: impl Into<Id>) -> Result<Vertex, AppError> {
        self.vertices.get(&id.into()).await
    }

    /// Lists vertices, optionally filtered by label and property values.
    pub async fn list_vertices(
        &self,
        label: Option<&str>,
        properties: &Properties,
        limit: i64,
    ) -> Result<Vec<Vertex>, AppError> {
        check_argument(limit > 0, || {
            format!("The limit must be > 0, but got: {}", limit)
        })?;
        self.vertices.list(label, properties, limit).await
    }

    /// Adds the given vertex's properties to the stored vertex with the same id.
    pub async fn append_vertex_property(&self, vertex: &Vertex) -> Result<Vertex, AppError> {
        let id = vertex.require_id()?;
        self.vertices.update(id, vertex, UpdateAction::Append).await
    }

    /// Removes the given vertex's properties from the stored vertex with the same id.
    pub async fn eliminate_vertex_property(&self, vertex: &Vertex) -> Result<Vertex, AppError> {
        let id = vertex.require_id()?;
        self.vertices.update(id, vertex, UpdateAction::Eliminate).await
    }

    pub async fn remove_vertex(&self, id: impl Into<Id>) -> Result<(), AppError> {
        self.vertices.delete(&id.into()).await
    }

    // ========================================================================
    // Edges
    // ========================================================================

    pub async fn add_edge(&self, edge: &Edge) -> Result<Edge, AppError> {
        edge.check_endpoints()?;
        self.edges.create(edge).await
    }

    /// Creates up to [`BATCH_MAX`] edges in one request and returns them with
    /// the ids the server assigned. With `check_vertex` the server rejects
    /// edges whose endpoints don't exist.
    pub async fn add_edges(
        &self,
        edges: Vec<Edge>,
        check_vertex: bool,
    ) -> Result<Vec<Edge>, AppError> {
        check_batch("edge", edges.len())?;
        for edge in &edges {
            edge.check_endpoints()?;
        }
        let ids = self.edges.create_batch(&edges, check_vertex).await?;
        check_returned("edge", edges.len(), ids.len())?;
        tracing::debug!(count = ids.len(), "Created edges");

        Ok(edges
            .into_iter()
            .zip(ids)
            .map(|(edge, id)| edge.with_server_id(id))
            .collect())
    }

    pub async fn get_edge(&self, id: &str) -> Result<Edge, AppError> {
        self.edges.get(id).await
    }

    /// Lists edges, optionally only those touching `vertex_id` in `direction`.
    pub async fn list_edges(
        &self,
        vertex_id: Option<&Id>,
        direction: Direction,
        label: Option<&str>,
        properties: &Properties,
        limit: i64,
    ) -> Result<Vec<Edge>, AppError> {
        check_argument(limit > 0, || {
            format!("The limit must be > 0, but got: {}", limit)
        })?;
        self.edges
            .list(vertex_id, direction, label, properties, limit)
            .await
    }

    pub async fn append_edge_property(&self, edge: &Edge) -> Result<Edge, AppError> {
        let id = require_edge_id(edge)?;
        self.edges.update(id, edge, UpdateAction::Append).await
    }

    pub async fn eliminate_edge_property(&self, edge: &Edge) -> Result<Edge, AppError> {
        let id = require_edge_id(edge)?;
        self.edges.update(id, edge, UpdateAction::Eliminate).await
    }

    pub async fn remove_edge(&self, id: &str) -> Result<(), AppError> {
        self.edges.delete(id).await
    }
}
