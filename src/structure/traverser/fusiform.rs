//! Fusiform similarity request and result.
//!
//! Finds, for each source vertex, other vertices of the same label that
//! share at least `alpha * neighbors` of its neighbours.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_argument, AppError};
use crate::structure::constant::Direction;
use crate::structure::graph::Vertex;
use crate::structure::traverser::checks::{
    check_alpha, check_capacity, check_degree, check_limit, check_positive,
};
use crate::structure::traverser::source_vertices::{SourceVertices, SourceVerticesBuilder};
use crate::structure::traverser::{DEFAULT_CAPACITY, DEFAULT_DEGREE, DEFAULT_PATHS_LIMIT};
use crate::structure::Id;

/// A validated fusiform similarity query.
///
/// Only obtainable through [`FusiformSimilarityRequest::builder`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusiformSimilarityRequest {
    sources: SourceVertices,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    min_neighbors: i32,
    alpha: f64,
    min_similars: i32,
    top: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    group_property: Option<String>,
    min_groups: i32,
    #[serde(rename = "max_degree")]
    degree: i64,
    capacity: i64,
    limit: i64,
    with_intermediary: bool,
    with_vertex: bool,
}

impl FusiformSimilarityRequest {
    pub fn builder() -> FusiformSimilarityRequestBuilder {
        FusiformSimilarityRequestBuilder::new()
    }

    pub fn sources(&self) -> &SourceVertices {
        &self.sources
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn min_neighbors(&self) -> i32 {
        self.min_neighbors
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn min_similars(&self) -> i32 {
        self.min_similars
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn group_property(&self) -> Option<&str> {
        self.group_property.as_deref()
    }

    pub fn min_groups(&self) -> i32 {
        self.min_groups
    }

    pub fn degree(&self) -> i64 {
        self.degree
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn with_intermediary(&self) -> bool {
        self.with_intermediary
    }

    pub fn with_vertex(&self) -> bool {
        self.with_vertex
    }
}

impl fmt::Display for FusiformSimilarityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FusiformSimilarityRequest{{sources={:?},label={:?},direction={:?},\
             minNeighbors={},alpha={},minSimilars={},top={},groupProperty={:?},\
             minGroups={},degree={},capacity={},limit={},withIntermediary={},withVertex={}}}",
            self.sources,
            self.label,
            self.direction,
            self.min_neighbors,
            self.alpha,
            self.min_similars,
            self.top,
            self.group_property,
            self.min_groups,
            self.degree,
            self.capacity,
            self.limit,
            self.with_intermediary,
            self.with_vertex
        )
    }
}

/// Builder for [`FusiformSimilarityRequest`].
///
/// Numeric setters validate immediately; [`build`](Self::build) re-checks
/// every field and requires source vertices and `min_neighbors`.
///
/// ```ignore
/// let request = FusiformSimilarityRequest::builder()
///     .sources(|s| s.label("person").property("name", "marko"))
///     .label("knows")
///     .direction(Direction::Out)
///     .min_neighbors(8)?
///     .alpha(0.75)?
///     .top(3)?
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct FusiformSimilarityRequestBuilder {
    sources: SourceVerticesBuilder,
    label: Option<String>,
    direction: Option<Direction>,
    min_neighbors: i32,
    alpha: f64,
    min_similars: i32,
    top: i32,
    group_property: Option<String>,
    min_groups: i32,
    degree: i64,
    capacity: i64,
    limit: i64,
    with_intermediary: bool,
    with_vertex: bool,
}

impl Default for FusiformSimilarityRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FusiformSimilarityRequestBuilder {
    pub fn new() -> Self {
        Self {
            sources: SourceVerticesBuilder::new(),
            label: None,
            direction: None,
            min_neighbors: 0,
            alpha: 1.0,
            min_similars: 1,
            top: 0,
            group_property: None,
            min_groups: 1,
            degree: DEFAULT_DEGREE,
            capacity: DEFAULT_CAPACITY,
            limit: DEFAULT_PATHS_LIMIT,
            with_intermediary: false,
            with_vertex: false,
        }
    }

    /// Configures the source vertices.
    pub fn sources(
        mut self,
        f: impl FnOnce(SourceVerticesBuilder) -> SourceVerticesBuilder,
    ) -> Self {
        self.sources = f(self.sources);
        self
    }

    /// Edge label to traverse; all labels when unset.
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn min_neighbors(mut self, min_neighbors: i32) -> Result<Self, AppError> {
        check_positive(min_neighbors.into(), "min neighbor count")?;
        self.min_neighbors = min_neighbors;
        Ok(self)
    }

    pub fn alpha(mut self, alpha: f64) -> Result<Self, AppError> {
        check_alpha(alpha)?;
        self.alpha = alpha;
        Ok(self)
    }

    pub fn min_similars(mut self, min_similars: i32) -> Result<Self, AppError> {
        check_positive(min_similars.into(), "min similar count")?;
        self.min_similars = min_similars;
        Ok(self)
    }

    /// Keep only the `top` most similar vertices per source. Unset keeps all.
    pub fn top(mut self, top: i32) -> Result<Self, AppError> {
        check_positive(top.into(), "top")?;
        self.top = top;
        Ok(self)
    }

    /// Property whose distinct values similar vertices are grouped by.
    pub fn group_property(mut self, group_property: &str) -> Result<Self, AppError> {
        check_argument(!group_property.is_empty(), || {
            "The group property can't be empty".to_string()
        })?;
        self.group_property = Some(group_property.to_string());
        Ok(self)
    }

    pub fn min_groups(mut self, min_groups: i32) -> Result<Self, AppError> {
        check_positive(min_groups.into(), "min group count")?;
        self.min_groups = min_groups;
        Ok(self)
    }

    pub fn degree(mut self, degree: i64) -> Result<Self, AppError> {
        check_degree(degree)?;
        self.degree = degree;
        Ok(self)
    }

    pub fn capacity(mut self, capacity: i64) -> Result<Self, AppError> {
        check_capacity(capacity)?;
        self.capacity = capacity;
        Ok(self)
    }

    pub fn limit(mut self, limit: i64) -> Result<Self, AppError> {
        check_limit(limit)?;
        self.limit = limit;
        Ok(self)
    }

    pub fn with_intermediary(mut self, with_intermediary: bool) -> Self {
        self.with_intermediary = with_intermediary;
        self
    }

    pub fn with_vertex(mut self, with_vertex: bool) -> Self {
        self.with_vertex = with_vertex;
        self
    }

    pub fn build(self) -> Result<FusiformSimilarityRequest, AppError> {
        let sources = self.sources.build()?;
        check_positive(self.min_neighbors.into(), "min neighbor count")?;
        check_positive(self.min_similars.into(), "min similar count")?;
        check_positive(self.min_groups.into(), "min group count")?;
        check_alpha(self.alpha)?;
        check_degree(self.degree)?;
        check_capacity(self.capacity)?;
        check_limit(self.limit)?;

        Ok(FusiformSimilarityRequest {
            sources,
            label: self.label,
            direction: self.direction,
            min_neighbors: self.min_neighbors,
            alpha: self.alpha,
            min_similars: self.min_similars,
            top: self.top,
            group_property: self.group_property,
            min_groups: self.min_groups,
            degree: self.degree,
            capacity: self.capacity,
            limit: self.limit,
            with_intermediary: self.with_intermediary,
            with_vertex: self.with_vertex,
        })
    }
}

/// One vertex found similar to a source vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Similar {
    pub id: Id,
    pub score: f64,
    /// Shared neighbours, present when `with_intermediary` was requested.
    #[serde(default)]
    pub intermediaries: Vec<Id>,
}

/// Response of a fusiform similarity query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FusiformSimilarity {
    /// Similar vertices keyed by source vertex id (JSON object keys are strings).
    #[serde(default)]
    pub similars: HashMap<String, Vec<Similar>>,
    /// Vertex bodies, present when `with_vertex` was requested.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

impl FusiformSimilarity {
    /// Number of source vertices that have at least one similar vertex.
    pub fn size(&self) -> usize {
        self.similars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.similars.is_empty()
    }

    /// Similar vertices of one source, if any.
    pub fn similars_of(&self, source: &Id) -> &[Similar] {
        self.similars
            .get(&source.to_string())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::traverser::NO_LIMIT;
    use serde_json::json;

    fn base() -> FusiformSimilarityRequestBuilder {
        FusiformSimilarityRequest::builder().sources(|s| s.ids(["1:marko"]))
    }

    #[test]
    fn test_defaults_serialized() {
        let request = base().min_neighbors(3).unwrap().build().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "sources": {"ids": ["1:marko"]},
                "min_neighbors": 3,
                "alpha": 1.0,
                "min_similars": 1,
                "top": 0,
                "min_groups": 1,
                "max_degree": 10_000,
                "capacity": 10_000_000,
                "limit": 10,
                "with_intermediary": false,
                "with_vertex": false
            })
        );
    }

    #[test]
    fn test_full_request() {
        let request = FusiformSimilarityRequest::builder()
            .sources(|s| s.label("person").property("name", "marko"))
            .label("knows")
            .direction(Direction::Out)
            .min_neighbors(8)
            .and_then(|b| b.alpha(0.75))
            .and_then(|b| b.min_similars(2))
            .and_then(|b| b.top(3))
            .and_then(|b| b.group_property("city"))
            .and_then(|b| b.min_groups(2))
            .and_then(|b| b.degree(NO_LIMIT))
            .and_then(|b| b.capacity(1000))
            .and_then(|b| b.limit(5))
            .map(|b| b.with_intermediary(true).with_vertex(true))
            .and_then(|b| b.build())
            .unwrap();

        assert_eq!(request.direction(), Some(Direction::Out));
        assert_eq!(request.degree(), NO_LIMIT);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["direction"], json!("OUT"));
        assert_eq!(body["group_property"], json!("city"));
        assert_eq!(body["max_degree"], json!(-1));
        assert_eq!(body["sources"], json!({"label": "person", "properties": {"name": "marko"}}));
    }

    #[test]
    fn test_alpha_outside_range_rejected() {
        assert!(base().alpha(0.0).is_err());
        assert!(base().alpha(1.5).is_err());
        assert!(base().alpha(-0.1).is_err());
        assert!(base().alpha(f64::NAN).is_err());
        assert!(base().alpha(0.5).is_ok());
    }

    #[test]
    fn test_negative_degree_rejected() {
        let err = base().degree(-5).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("Degree must be >= 0"));
        assert!(base().capacity(-2).is_err());
        assert!(base().limit(-10).is_err());
    }

    #[test]
    fn test_non_positive_counts_rejected() {
        assert!(base().min_neighbors(0).is_err());
        assert!(base().min_similars(-1).is_err());
        assert!(base().min_groups(0).is_err());
        assert!(base().top(0).is_err());
        assert!(base().group_property("").is_err());
    }

    #[test]
    fn test_build_without_sources_fails() {
        let err = FusiformSimilarityRequest::builder()
            .min_neighbors(3)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("No source vertices provided"));
    }

    #[test]
    fn test_build_without_min_neighbors_fails() {
        let err = base().build().unwrap_err();
        assert!(err.to_string().contains("min neighbor count must be > 0"));
    }

    #[test]
    fn test_result_parsing() {
        let result: FusiformSimilarity = serde_json::from_value(json!({
            "similars": {
                "1:marko": [
                    {"id": "1:josh", "score": 0.8, "intermediaries": ["2:lop"]},
                    {"id": "1:peter", "score": 0.6}
                ]
            },
            "vertices": []
        }))
        .unwrap();

        assert_eq!(result.size(), 1);
        let similars = result.similars_of(&Id::from("1:marko"));
        assert_eq!(similars.len(), 2);
        assert_eq!(similars[0].intermediaries, vec![Id::from("2:lop")]);
        assert!(similars[1].intermediaries.is_empty());
        assert!(result.similars_of(&Id::from("1:vadas")).is_empty());
    }
}
