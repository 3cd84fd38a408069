//! Data structures exchanged with the server.
//!
//! - [`graph`] - Vertices and edges
//! - [`schema`] - Property keys, vertex/edge/index labels and their builders
//! - [`traverser`] - Validated traversal requests and their results
//! - [`constant`] - Wire enums

pub mod constant;
pub mod graph;
mod id;
pub mod schema;
pub mod traverser;

pub use constant::{
    BaseType, Cardinality, DataType, Direction, Frequency, IdStrategy, IndexType, UpdateAction,
};
pub use graph::{Edge, Properties, Vertex};
pub use id::Id;
