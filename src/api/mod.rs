//! REST resource layer.
//!
//! One type per server resource. Each resolves its transport and graph name
//! from the [`Context`](crate::context::Context) via `FromContext`, and maps
//! typed arguments to paths, parameters and bodies. Managers in
//! [`driver`](crate::driver) build on these.

mod edge;
mod schema;
mod traverser;
mod version;
mod vertex;

pub use edge::EdgeApi;
pub use schema::SchemaApi;
pub use traverser::TraverserApi;
pub use version::{ServerVersion, VersionApi};
pub use vertex::VertexApi;
