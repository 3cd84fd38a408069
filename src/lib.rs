//! HugeGraph client
//!
//! An async client for the HugeGraph REST API: schema builders, vertex and
//! edge CRUD with batching, and validated traversal requests.
//!
//! ```ignore
//! use hugegraph_client::HugeClient;
//!
//! let client = HugeClient::connect("http://localhost:8080", "hugegraph").await?;
//! client.schema().property_key("name").as_text().if_not_exist().create().await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod driver;
pub mod error;
pub mod rest;
pub mod structure;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
pub use driver::HugeClient;
pub use error::AppError;
