//! High-level managers over the REST API.
//!
//! - [`HugeClient`] - Entry point bound to one server and graph
//! - [`SchemaManager`] - Schema builders and schema CRUD
//! - [`GraphManager`] - Vertex and edge CRUD, batch creation
//! - [`TraverserManager`] - Server-side traversals

mod client;
mod graph;
mod schema;
mod traverser;

pub use client::HugeClient;
pub use graph::{GraphManager, BATCH_MAX, DEFAULT_LIST_LIMIT};
pub use schema::SchemaManager;
pub use traverser::TraverserManager;
