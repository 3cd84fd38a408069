//! Traverser REST API.

use crate::context::{AppRest, Context, GraphName};
use crate::di::FromContext;
use crate::error::AppError;
use crate::rest::RestExt;
use crate::structure::traverser::{
    FusiformSimilarity, FusiformSimilarityRequest, KneighborRequest, KoutRequest,
    ShortestPathRequest,
};
use crate::structure::Id;

/// Calls on `graphs/{graph}/traversers/*`.
#[derive(FromContext, Clone)]
pub struct TraverserApi {
    rest: AppRest,
    graph: GraphName,
}

impl TraverserApi {
    fn path(&self, name: &str) -> Vec<String> {
        self.graph.path(&["traversers", name])
    }

    pub async fn fusiform_similarity(
        &self,
        request: &FusiformSimilarityRequest,
    ) -> Result<FusiformSimilarity, AppError> {
        self.rest
            .post(self.path("fusiformsimilarity"))
            .body(request)
            .fetch()
            .await
    }

    pub async fn kout(&self, request: &KoutRequest) -> Result<Vec<Id>, AppError> {
        request
            .apply(self.rest.get(self.path("kout")))
            .fetch_list("vertices")
            .await
    }

    pub async fn kneighbor(&self, request: &KneighborRequest) -> Result<Vec<Id>, AppError> {
        request
            .apply(self.rest.get(self.path("kneighbor")))
            .fetch_list("vertices")
            .await
    }

    pub async fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Vec<Id>, AppError> {
        request
            .apply(self.rest.get(self.path("shortestpath")))
            .fetch_list("path")
            .await
    }
}
