//! Schema elements: property keys, vertex labels, edge labels, index labels.
//!
//! Each element has a plain serializable struct and a fluent builder bound
//! to a [`SchemaManager`](crate::driver::SchemaManager):
//!
//! ```ignore
//! schema.property_key("name").as_text().if_not_exist().create().await?;
//!
//! schema.vertex_label("person")
//!     .properties(["name", "age"])
//!     .primary_keys(["name"])
//!     .if_not_exist()
//!     .create()
//!     .await?;
//! ```
//!
//! Builders run local structural checks in `build()`; everything else
//! (duplicate names, unknown property keys) is decided by the server.

mod edge_label;
mod index_label;
mod property_key;
mod vertex_label;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{check_argument, AppError};
use crate::rest::RestResult;

pub use edge_label::{EdgeLabel, EdgeLabelBuilder};
pub use index_label::{IndexLabel, IndexLabelBuilder};
pub use property_key::{PropertyKey, PropertyKeyBuilder};
pub use vertex_label::{VertexLabel, VertexLabelBuilder};

/// Free-form metadata attached to a schema element.
pub type UserData = HashMap<String, JsonValue>;

/// Common behaviour of schema elements, used by the generic schema API.
pub trait SchemaElement: Serialize + DeserializeOwned + Send + Sync {
    /// Path segment under `graphs/{graph}/schema/`.
    const PATH: &'static str;
    /// Human-readable kind for error messages.
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// Key wrapping the list response, e.g. `{"propertykeys": [...]}`.
    fn list_key() -> &'static str {
        Self::PATH
    }

    /// Decodes the body returned by a create call.
    fn from_create_response(result: RestResult) -> Result<Self, AppError> {
        result.read()
    }
}

pub(crate) fn default_check_exist() -> bool {
    true
}

/// Fails unless `name` is a non-blank schema name.
pub(crate) fn check_name(kind: &str, name: &str) -> Result<(), AppError> {
    check_argument(!name.trim().is_empty(), || {
        format!("The name of {} can't be empty", kind)
    })
}

/// Fails unless every entry of `keys` appears in `properties`.
pub(crate) fn check_subset(
    what: &str,
    keys: &[String],
    properties: &[String],
) -> Result<(), AppError> {
    for key in keys {
        check_argument(properties.contains(key), || {
            format!(
                "The {} '{}' must be contained in properties {:?}",
                what, key, properties
            )
        })?;
    }
    Ok(())
}

/// Appends names to `target`, skipping duplicates and keeping order.
pub(crate) fn extend_unique<I, S>(target: &mut Vec<String>, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for name in names {
        let name = name.into();
        if !target.contains(&name) {
            target.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name() {
        assert!(check_name("property key", "name").is_ok());
        assert!(check_name("property key", "  ").is_err());
    }

    #[test]
    fn test_check_subset() {
        let props = vec!["name".to_string(), "age".to_string()];
        assert!(check_subset("primary key", &["name".to_string()], &props).is_ok());
        let err = check_subset("primary key", &["city".to_string()], &props).unwrap_err();
        assert!(err.to_string().contains("'city'"));
    }

    #[test]
    fn test_extend_unique() {
        let mut names = vec!["name".to_string()];
        extend_unique(&mut names, ["age", "name", "city"]);
        assert_eq!(names, vec!["name", "age", "city"]);
    }
}
