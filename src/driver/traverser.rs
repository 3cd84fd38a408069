//! Traverser manager.

use crate::api::TraverserApi;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::structure::traverser::{
    FusiformSimilarity, FusiformSimilarityRequest, KneighborRequest, KoutRequest,
    ShortestPathRequest,
};
use crate::structure::Id;

/// Runs server-side traversals over one graph.
///
/// Requests are validated when built, so each call is a single round trip.
#[derive(FromContext, Clone)]
pub struct TraverserManager {
    traversers: TraverserApi,
}

impl TraverserManager {
    /// Finds vertices sharing enough neighbors with each source vertex.
    pub async fn fusiform_similarity(
        &self,
        request: &FusiformSimilarityRequest,
    ) -> Result<FusiformSimilarity, AppError> {
        tracing::debug!(%request, "Running fusiform similarity");
        let result = self.traversers.fusiform_similarity(request).await?;
        tracing::debug!(sources = result.size(), "Fusiform similarity done");
        Ok(result)
    }

    pub async fn kout(&self, request: &KoutRequest) -> Result<Vec<Id>, AppError> {
        self.traversers.kout(request).await
    }

    pub async fn kneighbor(&self, request: &KneighborRequest) -> Result<Vec<Id>, AppError> {
        self.traversers.kneighbor(request).await
    }

    /// Returns the vertex ids along one shortest path, or an empty list.
    pub async fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Vec<Id>, AppError> {
        self.traversers.shortest_path(request).await
    }
}
