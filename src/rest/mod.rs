//! HTTP transport layer.
//!
//! The API layer never talks to reqwest directly. It builds calls through
//! [`RestExt`] on top of a [`RestExecutor`], which keeps the wire
//! replaceable in tests.
//!
//! - [`RestExecutor`] - Sends a [`RestRequest`], returns a [`RestResult`]
//! - [`Request`] - Fluent builder for params and body
//! - [`RestClient`] - The reqwest-backed executor
//!
//! # Usage
//!
//! ```ignore
//! use hugegraph_client::rest::{RestClient, RestExt};
//!
//! let keys: Vec<PropertyKey> = client
//!     .get(["graphs", "hugegraph", "schema", "propertykeys"])
//!     .fetch_list("propertykeys")
//!     .await?;
//!
//! client
//!     .post(["graphs", "hugegraph", "schema", "propertykeys"])
//!     .body(&property_key)
//!     .run()
//!     .await?;
//! ```

mod client;
mod request;
mod response;
mod traits;

pub use client::RestClient;
pub use request::{Request, RestExt};
pub use response::RestResult;
pub use traits::{RestExecutor, RestRequest};
