//! Wire enums shared by schema and graph structures.
//!
//! All variants serialize in `SCREAMING_SNAKE_CASE`, matching the server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Edge direction relative to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Out,
    In,
    #[default]
    Both,
}

impl Direction {
    /// Returns the wire name (`OUT`, `IN`, `BOTH`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
            Direction::Both => "BOTH",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OUT" => Ok(Direction::Out),
            "IN" => Ok(Direction::In),
            "BOTH" => Ok(Direction::Both),
            _ => Err(format!(
                "Invalid direction '{}'. Valid values: OUT, IN, BOTH",
                s
            )),
        }
    }
}

/// Value type of a property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    #[default]
    Text,
    Boolean,
    Byte,
    Int,
    Long,
    Float,
    Double,
    Date,
    Uuid,
    Blob,
}

/// How many values a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    #[default]
    Single,
    List,
    Set,
}

/// How vertex ids are assigned for a vertex label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdStrategy {
    #[default]
    Default,
    Automatic,
    PrimaryKey,
    CustomizeString,
    CustomizeNumber,
}

/// Whether two vertices may be linked more than once by the same edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    #[default]
    Default,
    Single,
    Multiple,
}

/// Index strategy of an index label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    #[default]
    Secondary,
    Range,
    Search,
}

/// What an index label is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseType {
    VertexLabel,
    EdgeLabel,
}

/// The `action` query parameter of schema and element updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    Append,
    Eliminate,
}

impl UpdateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateAction::Append => "append",
            UpdateAction::Eliminate => "eliminate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_value(IdStrategy::PrimaryKey).unwrap(), json!("PRIMARY_KEY"));
        assert_eq!(serde_json::to_value(DataType::Uuid).unwrap(), json!("UUID"));
        assert_eq!(serde_json::to_value(BaseType::EdgeLabel).unwrap(), json!("EDGE_LABEL"));
        let freq: Frequency = serde_json::from_value(json!("MULTIPLE")).unwrap();
        assert_eq!(freq, Frequency::Multiple);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("out".parse::<Direction>().unwrap(), Direction::Out);
        assert_eq!("BOTH".parse::<Direction>().unwrap(), Direction::Both);
        assert!("sideways".parse::<Direction>().is_err());
        assert_eq!(Direction::In.to_string(), "IN");
    }
}
