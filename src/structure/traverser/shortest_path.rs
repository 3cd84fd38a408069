//! Shortest path request.

use crate::error::AppError;
use crate::rest::{Request, RestExecutor};
use crate::structure::constant::Direction;
use crate::structure::traverser::checks::{
    check_capacity, check_degree, check_non_negative_skip_degree, check_positive,
    check_skip_degree,
};
use crate::structure::traverser::{DEFAULT_CAPACITY, DEFAULT_DEGREE};
use crate::structure::Id;

/// A validated shortest path query between two vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathRequest {
    source: Id,
    target: Id,
    direction: Direction,
    label: Option<String>,
    max_depth: i32,
    degree: i64,
    skip_degree: i64,
    capacity: i64,
}

impl ShortestPathRequest {
    /// Starts a query between `source` and `target`; `max_depth` must be > 0.
    pub fn builder(
        source: impl Into<Id>,
        target: impl Into<Id>,
        max_depth: i32,
    ) -> Result<ShortestPathRequestBuilder, AppError> {
        check_positive(max_depth.into(), "max depth")?;
        Ok(ShortestPathRequestBuilder {
            request: ShortestPathRequest {
                source: source.into(),
                target: target.into(),
                direction: Direction::Both,
                label: None,
                max_depth,
                degree: DEFAULT_DEGREE,
                skip_degree: 0,
                capacity: DEFAULT_CAPACITY,
            },
        })
    }

    pub(crate) fn apply<'a, E: RestExecutor + ?Sized>(
        &self,
        request: Request<'a, E>,
    ) -> Request<'a, E> {
        request
            .param("source", self.source.to_json())
            .param("target", self.target.to_json())
            .param("direction", self.direction.as_str())
            .param_opt("label", self.label.as_deref())
            .param("max_depth", self.max_depth)
            .param("max_degree", self.degree)
            .param("skip_degree", self.skip_degree)
            .param("capacity", self.capacity)
    }
}

/// Builder for [`ShortestPathRequest`].
#[derive(Debug, Clone)]
pub struct ShortestPathRequestBuilder {
    request: ShortestPathRequest,
}

impl ShortestPathRequestBuilder {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.request.direction = direction;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.request.label = Some(label.to_string());
        self
    }

    pub fn degree(mut self, degree: i64) -> Result<Self, AppError> {
        check_degree(degree)?;
        self.request.degree = degree;
        Ok(self)
    }

    /// Vertices with more edges than this are skipped (super vertices); 0 disables.
    pub fn skip_degree(mut self, skip_degree: i64) -> Result<Self, AppError> {
        check_non_negative_skip_degree(skip_degree)?;
        self.request.skip_degree = skip_degree;
        Ok(self)
    }

    pub fn capacity(mut self, capacity: i64) -> Result<Self, AppError> {
        check_capacity(capacity)?;
        self.request.capacity = capacity;
        Ok(self)
    }

    /// Skip degree is checked against the final max degree here.
    pub fn build(self) -> Result<ShortestPathRequest, AppError> {
        let r = &self.request;
        check_positive(r.max_depth.into(), "max depth")?;
        check_degree(r.degree)?;
        check_capacity(r.capacity)?;
        check_skip_degree(r.skip_degree, r.degree)?;
        Ok(self.request)
    }
}
