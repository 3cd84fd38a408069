//! Traversal request builders and results.
//!
//! Builders validate numeric arguments as they are set and again in
//! `build()`, so a request that reaches the wire is always well formed.

pub mod checks;
mod fusiform;
mod neighbors;
mod shortest_path;
mod source_vertices;

pub use fusiform::{
    FusiformSimilarity, FusiformSimilarityRequest, FusiformSimilarityRequestBuilder, Similar,
};
pub use neighbors::{KneighborRequest, KneighborRequestBuilder, KoutRequest, KoutRequestBuilder};
pub use shortest_path::{ShortestPathRequest, ShortestPathRequestBuilder};
pub use source_vertices::{SourceVertices, SourceVerticesBuilder};

/// Sentinel accepted by degree, capacity and limit meaning "unbounded".
pub const NO_LIMIT: i64 = -1;

pub const DEFAULT_DEGREE: i64 = 10_000;
pub const DEFAULT_CAPACITY: i64 = 10_000_000;
pub const DEFAULT_ELEMENTS_LIMIT: i64 = 10_000_000;
pub const DEFAULT_PATHS_LIMIT: i64 = 10;
