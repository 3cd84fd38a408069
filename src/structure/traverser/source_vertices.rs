//! Source vertex selection for traversal requests.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{check_argument, AppError};
use crate::structure::graph::Properties;
use crate::structure::Id;

/// Selects start vertices by id, or by label and property filter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceVertices {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<Id>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Properties::is_empty")]
    pub properties: Properties,
}

/// Builder for [`SourceVertices`].
#[derive(Debug, Clone, Default)]
pub struct SourceVerticesBuilder {
    sources: SourceVertices,
}

impl SourceVerticesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds vertex ids; duplicates are dropped.
    pub fn ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        for id in ids {
            let id = id.into();
            if !self.sources.ids.contains(&id) {
                self.sources.ids.push(id);
            }
        }
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.sources.label = Some(label.to_string());
        self
    }

    pub fn property(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.sources.properties.insert(key.to_string(), value.into());
        self
    }

    /// Fails when neither ids, a label nor properties were given.
    pub fn build(self) -> Result<SourceVertices, AppError> {
        let s = &self.sources;
        check_argument(
            !s.ids.is_empty() || s.label.is_some() || !s.properties.is_empty(),
            || "No source vertices provided".to_string(),
        )?;
        Ok(self.sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_sources_rejected() {
        let err = SourceVerticesBuilder::new().build().unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: No source vertices provided");
    }

    #[test]
    fn test_ids_are_deduplicated() {
        let sources = SourceVerticesBuilder::new()
            .ids(["1:marko", "1:josh", "1:marko"])
            .build()
            .unwrap();
        assert_eq!(sources.ids.len(), 2);
        assert_eq!(
            serde_json::to_value(&sources).unwrap(),
            json!({"ids": ["1:marko", "1:josh"]})
        );
    }

    #[test]
    fn test_label_and_properties() {
        let sources = SourceVerticesBuilder::new()
            .label("person")
            .property("city", "Beijing")
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_value(&sources).unwrap(),
            json!({"label": "person", "properties": {"city": "Beijing"}})
        );
    }
}
