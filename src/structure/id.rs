//! Element identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A vertex id: numeric for automatic/customize-number labels, string otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    String(String),
}

impl Id {
    /// JSON text of the id, as the server expects it in URLs and query strings.
    ///
    /// `"1:marko"` keeps its quotes; numbers are bare.
    pub fn to_json(&self) -> String {
        match self {
            Id::Number(n) => n.to_string(),
            Id::String(s) => serde_json::Value::String(s.clone()).to_string(),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&Id> for Id {
    fn from(id: &Id) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untagged_roundtrip_shapes() {
        let ids: Vec<Id> = serde_json::from_value(json!(["1:marko", 42])).unwrap();
        assert_eq!(ids, vec![Id::from("1:marko"), Id::from(42i64)]);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Id::from("1:marko").to_json(), "\"1:marko\"");
        assert_eq!(Id::from(7i64).to_json(), "7");
        assert_eq!(Id::from("a\"b").to_json(), r#""a\"b""#);
    }
}
