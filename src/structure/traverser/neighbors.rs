//! K-out and k-neighbor requests.
//!
//! Both walk `max_depth` steps from one source vertex. K-out returns the
//! vertices reachable in exactly `max_depth` steps (or first reached there
//! with `nearest`); k-neighbor returns everything within `max_depth` steps.

use crate::error::AppError;
use crate::rest::{Request, RestExecutor};
use crate::structure::constant::Direction;
use crate::structure::traverser::checks::{
    check_capacity, check_degree, check_limit, check_positive,
};
use crate::structure::traverser::{DEFAULT_CAPACITY, DEFAULT_DEGREE, DEFAULT_ELEMENTS_LIMIT};
use crate::structure::Id;

/// A validated k-out query.
#[derive(Debug, Clone, PartialEq)]
pub struct KoutRequest {
    source: Id,
    direction: Direction,
    label: Option<String>,
    max_depth: i32,
    nearest: bool,
    degree: i64,
    capacity: i64,
    limit: i64,
}

impl KoutRequest {
    /// Starts a k-out query from `source` walking `max_depth` steps.
    pub fn builder(
        source: impl Into<Id>,
        max_depth: i32,
    ) -> Result<KoutRequestBuilder, AppError> {
        check_positive(max_depth.into(), "max depth")?;
        Ok(KoutRequestBuilder {
            request: KoutRequest {
                source: source.into(),
                direction: Direction::Both,
                label: None,
                max_depth,
                nearest: true,
                degree: DEFAULT_DEGREE,
                capacity: DEFAULT_CAPACITY,
                limit: DEFAULT_ELEMENTS_LIMIT,
            },
        })
    }

    pub(crate) fn apply<'a, E: RestExecutor + ?Sized>(
        &self,
        request: Request<'a, E>,
    ) -> Request<'a, E> {
        request
            .param("source", self.source.to_json())
            .param("direction", self.direction.as_str())
            .param_opt("label", self.label.as_deref())
            .param("max_depth", self.max_depth)
            .param("nearest", self.nearest)
            .param("max_degree", self.degree)
            .param("capacity", self.capacity)
            .param("limit", self.limit)
    }
}

/// Builder for [`KoutRequest`].
#[derive(Debug, Clone)]
pub struct KoutRequestBuilder {
    request: KoutRequest,
}

impl KoutRequestBuilder {
    pub fn direction(mut self, direction: Direction) -> Self {
        self.request.direction = direction;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.request.label = Some(label.to_string());
        self
    }

    /// Only keep vertices whose shortest distance is exactly `max_depth`.
    pub fn nearest(mut self, nearest: bool) -> Self {
        self.request.nearest = nearest;
        self
    }

    pub fn degree(mut self, degree: i64) -> Result<Self, AppError> {
        check_degree(degree)?;
        self.request.degree = degree;
        Ok(self)
    }

    pub fn capacity(mut self, capacity: i64) -> Result<Self, AppError> {
        check_capacity(capacity)?;
        self.request.capacity = capacity;
        Ok(self)
    }

    pub fn limit(mut self, limit: i64) -> Result<Self, AppError> {
        check_limit(limit)?;
        self.request.limit = limit;
        Ok(self)
    }

    pub fn build(self) -> Result<KoutRequest, AppError> {
        let r = &self.request;
        check_positive(r.max_depth.into(), "max depth")?;
        check_degree(r.degree)?;
        check_capacity(r.capacity)?;
        check_limit(r.limit)?;
        Ok(self.request)
    }
}

/// A validated k-neighbor query.
#[derive(Debug, Clone, PartialEq)]
pub struct KneighborRequest {
    source: Id,
    direction: Direction,
    label: Option<String>,
    max_depth: i32,
    degree: i64,
    limit: i64,
}

impl KneighborRequest {
    /// Starts a k-neighbor query from `source` up to `max_depth` steps.
    pub fn builder(
        source: impl Into<Id>,
        max_depth: i32,
    ) -> Result<KneighborRequestBuilder, AppError> {
        check_positive(max_depth.into(), "max depth")?;
        Ok(KneighborRequestBuilder {
            request: KneighborRequest {
                source: source.into(),
                direction: Direction::Both,
                label: None,
                max_depth,
                degree: DEFAULT_DEGREE,
                limit: DEFAULT_ELEMENTS_LIMIT,
            },
        })
    }

    pub(crate) fn apply<'a, E: RestExecutor + ?Sized>(
        &self,
        request: Request<'a, E>,
    ) -> Request<'a, E> {
        request
            .param("source", self.source.to_json())
            .param("direction", self.direction.as_str())
            .param_opt("label", self.label.as_deref())
            .param("max_depth", self.max_depth)
            .param("max_degree", self.degree)
            .param("limit", self.limit)
    }
}

/// Builder for [`KneighborRequest`].
#[derive(Debug, Clone)]
pub struct KneighborRequestBuilder {
    request: KneighborRequest,
}

impl KneighborRequestBuilder {
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

    pub fn limit(mut self, limit: i64) -> Result<Self, AppError> {
        check_limit(limit)?;
        self.request.limit = limit;
        Ok(self)
    }

    pub fn build(self) -> Result<KneighborRequest, AppError> {
        let r = &self.request;
        check_positive(r.max_depth.into(), "max depth")?;
        check_degree(r.degree)?;
        check_limit(r.limit)?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kout_requires_positive_depth() {
        let err = KoutRequest::builder("1:marko", 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(KoutRequest::builder("1:marko", 2).unwrap().build().is_ok());
    }

    #[test]
    fn test_kout_rejects_bad_limits() {
        let builder = KoutRequest::builder("1:marko", 2).unwrap();
        assert!(builder.clone().degree(-7).is_err());
        assert!(builder.clone().capacity(-2).is_err());
        assert!(builder.limit(-1).is_ok());
    }

    #[test]
    fn test_kneighbor_defaults() {
        let request = KneighborRequest::builder(1i64, 3)
            .unwrap()
            .direction(Direction::Out)
            .build()
            .unwrap();
        assert_eq!(request.max_depth, 3);
        assert_eq!(request.degree, DEFAULT_DEGREE);
        assert_eq!(request.limit, DEFAULT_ELEMENTS_LIMIT);
        assert!(KneighborRequest::builder(1i64, -1).is_err());
    }
}
