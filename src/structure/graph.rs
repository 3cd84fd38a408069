//! Vertex and edge structures.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{check_argument, AppError};
use crate::structure::Id;

/// Property bag of a vertex or edge.
pub type Properties = HashMap<String, JsonValue>;

/// A vertex: a label plus properties, and an id once the server assigned one.
///
/// ```ignore
/// let marko = Vertex::new("person")
///     .property("name", "marko")
///     .property("age", 29);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    label: String,
    #[serde(default)]
    properties: Properties,
}

impl Vertex {
    /// Creates an unsaved vertex of the given label.
    pub fn new(label: &str) -> Self {
        Self {
            id: None,
            label: label.to_string(),
            properties: Properties::new(),
        }
    }

    /// Sets the id, for labels using a customize id strategy.
    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds or replaces a property.
    pub fn property(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Returns the vertex id or fails if it was never saved.
    pub(crate) fn require_id(&self) -> Result<&Id, AppError> {
        self.id.as_ref().ok_or_else(|| {
            AppError::InvalidArgument(format!(
                "Vertex with label '{}' has no id, add it to the graph first",
                self.label
            ))
        })
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}[{}]{}", self.label, id, JsonProps(&self.properties)),
            None => write!(f, "{}[?]{}", self.label, JsonProps(&self.properties)),
        }
    }
}

/// An edge between two vertices.
///
/// Endpoints are taken from saved vertices:
///
/// ```ignore
/// let knows = Edge::new("knows")
///     .source(&marko)
///     .target(&vadas)
///     .property("date", "20160110");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    label: String,
    #[serde(rename = "outV", default)]
    source_id: Option<Id>,
    #[serde(rename = "outVLabel", default)]
    source_label: Option<String>,
    #[serde(rename = "inV", default)]
    target_id: Option<Id>,
    #[serde(rename = "inVLabel", default)]
    target_label: Option<String>,
    #[serde(default)]
    properties: Properties,
}

impl Edge {
    /// Creates an unsaved edge of the given label.
    pub fn new(label: &str) -> Self {
        Self {
            id: None,
            label: label.to_string(),
            source_id: None,
            source_label: None,
            target_id: None,
            target_label: None,
            properties: Properties::new(),
        }
    }

    /// Uses `vertex` as the source (out) endpoint.
    pub fn source(mut self, vertex: &Vertex) -> Self {
        self.source_id = vertex.id().cloned();
        self.source_label = Some(vertex.label().to_string());
        self
    }

    /// Uses `vertex` as the target (in) endpoint.
    pub fn target(mut self, vertex: &Vertex) -> Self {
        self.target_id = vertex.id().cloned();
        self.target_label = Some(vertex.label().to_string());
        self
    }

    /// Sets the source endpoint from a known id and label.
    pub fn source_id(mut self, id: impl Into<Id>, label: &str) -> Self {
        self.source_id = Some(id.into());
        self.source_label = Some(label.to_string());
        self
    }

    /// Sets the target endpoint from a known id and label.
    pub fn target_id(mut self, id: impl Into<Id>, label: &str) -> Self {
        self.target_id = Some(id.into());
        self.target_label = Some(label.to_string());
        self
    }

    /// Adds or replaces a property.
    pub fn property(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source_vertex_id(&self) -> Option<&Id> {
        self.source_id.as_ref()
    }

    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    pub fn target_vertex_id(&self) -> Option<&Id> {
        self.target_id.as_ref()
    }

    pub fn target_label(&self) -> Option<&str> {
        self.target_label.as_deref()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub(crate) fn with_server_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    /// Checks that both endpoints carry vertex ids.
    pub(crate) fn check_endpoints(&self) -> Result<(), AppError> {
        check_argument(self.source_id.is_some(), || {
            format!("The source vertex id of edge '{}' can't be null", self.label)
        })?;
        check_argument(self.target_id.is_some(), || {
            format!("The target vertex id of edge '{}' can't be null", self.label)
        })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = |v: &Option<Id>| v.as_ref().map_or("?".to_string(), |id| id.to_string());
        write!(
            f,
            "{}[{}]--{}-->{}{}",
            id(&self.source_id),
            self.id.as_deref().unwrap_or("?"),
            self.label,
            id(&self.target_id),
            JsonProps(&self.properties)
        )
    }
}

/// Renders properties as a compact JSON object with sorted keys.
struct JsonProps<'a>(&'a Properties);

impl fmt::Display for JsonProps<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sorted: std::collections::BTreeMap<_, _> = self.0.iter().collect();
        match serde_json::to_string(&sorted) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vertex_serializes_without_id() {
        let marko = Vertex::new("person")
            .property("name", "marko")
            .property("age", 29);
        assert_eq!(
            serde_json::to_value(&marko).unwrap(),
            json!({"label": "person", "properties": {"name": "marko", "age": 29}})
        );
        assert!(marko.require_id().is_err());
    }

    #[test]
    fn test_vertex_from_server() {
        let vertex: Vertex = serde_json::from_value(json!({
            "id": "1:marko",
            "label": "person",
            "type": "vertex",
            "properties": {"name": "marko", "age": 29}
        }))
        .unwrap();
        assert_eq!(vertex.id(), Some(&Id::from("1:marko")));
        assert_eq!(vertex.to_string(), r#"person[1:marko]{"age":29,"name":"marko"}"#);
    }

    #[test]
    fn test_edge_takes_endpoints_from_vertices() {
        let marko = Vertex::new("person").with_id("1:marko");
        let lop = Vertex::new("software").with_id("2:lop");
        let created = Edge::new("created")
            .source(&marko)
            .target(&lop)
            .property("date", "20171210");

        assert!(created.check_endpoints().is_ok());
        assert_eq!(
            serde_json::to_value(&created).unwrap(),
            json!({
                "label": "created",
                "outV": "1:marko",
                "outVLabel": "person",
                "inV": "2:lop",
                "inVLabel": "software",
                "properties": {"date": "20171210"}
            })
        );
    }

    #[test]
    fn test_edge_with_unsaved_source_is_rejected() {
        let marko = Vertex::new("person");
        let vadas = Vertex::new("person").with_id("1:vadas");
        let knows = Edge::new("knows").source(&marko).target(&vadas);

        let err = knows.check_endpoints().unwrap_err();
        assert!(err.to_string().contains("source vertex id"));
    }
}
