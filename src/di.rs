//! Dependency injection infrastructure.
//!
//! API types and managers are plain structs whose fields are resolved from
//! a [`Context`](crate::context::Context) through the `FromRef` trait and
//! the derive macros from `di-macros`.
//!
//! - `FromRef<T>`: Trait for extracting a value from a reference to `T`
//! - `#[derive(Context)]`: Makes each field of a struct extractable via `FromRef`
//! - `#[derive(FromContext)]`: Generates `FromRef` impl by resolving each field
//!
//! # Example
//!
//! ```ignore
//! use hugegraph_client::di::FromRef;
//!
//! #[derive(FromContext, Clone)]
//! pub struct VertexApi {
//!     rest: AppRest,      // resolved via FromRef<Context>
//!     graph: GraphName,
//! }
//!
//! let api = VertexApi::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

// Re-export derive macros
pub use di_macros::{Context, FromContext};
