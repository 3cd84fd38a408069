//! Vertex label schema element.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::driver::SchemaManager;
use crate::error::{check_argument, AppError};
use crate::structure::constant::IdStrategy;
use crate::structure::schema::{
    check_name, check_subset, default_check_exist, extend_unique, SchemaElement, UserData,
};

/// A vertex type: its properties and how its ids are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub id_strategy: IdStrategy,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub primary_keys: Vec<String>,
    #[serde(default)]
    pub nullable_keys: Vec<String>,
    /// Index labels built on this label; filled in by the server.
    #[serde(default)]
    pub index_labels: Vec<String>,
    #[serde(default = "default_enable_label_index")]
    pub enable_label_index: bool,
    #[serde(default)]
    pub user_data: UserData,
    #[serde(default = "default_check_exist")]
    pub check_exist: bool,
}

fn default_enable_label_index() -> bool {
    true
}

impl VertexLabel {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            id_strategy: IdStrategy::default(),
            properties: Vec::new(),
            primary_keys: Vec::new(),
            nullable_keys: Vec::new(),
            index_labels: Vec::new(),
            enable_label_index: true,
            user_data: UserData::new(),
            check_exist: true,
        }
    }
}

impl SchemaElement for VertexLabel {
    const PATH: &'static str = "vertexlabels";
    const KIND: &'static str = "vertex label";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fluent builder for [`VertexLabel`].
pub struct VertexLabelBuilder<'a> {
    manager: &'a SchemaManager,
    label: VertexLabel,
}

impl<'a> VertexLabelBuilder<'a> {
    pub(crate) fn new(manager: &'a SchemaManager, name: &str) -> Self {
        Self {
            manager,
            label: VertexLabel::new(name),
        }
    }

    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.label.id_strategy = strategy;
        self
    }

    pub fn use_automatic_id(self) -> Self {
        self.id_strategy(IdStrategy::Automatic)
    }

    pub fn use_primary_key_id(self) -> Self {
        self.id_strategy(IdStrategy::PrimaryKey)
    }

    pub fn use_customize_string_id(self) -> Self {
        self.id_strategy(IdStrategy::CustomizeString)
    }

    pub fn use_customize_number_id(self) -> Self {
        self.id_strategy(IdStrategy::CustomizeNumber)
    }

    pub fn properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.label.properties, names);
        self
    }

    pub fn primary_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.label.primary_keys, names);
        self
    }

    pub fn nullable_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.label.nullable_keys, names);
        self
    }

    pub fn enable_label_index(mut self, enable: bool) -> Self {
        self.label.enable_label_index = enable;
        self
    }

    pub fn user_data(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.label.user_data.insert(key.to_string(), value.into());
        self
    }

    pub fn if_not_exist(mut self) -> Self {
        self.label.check_exist = false;
        self
    }

    /// Validates the label for creation and returns it without sending.
    ///
    /// Non-empty primary keys imply the PRIMARY_KEY id strategy.
    pub fn build(mut self) -> Result<VertexLabel, AppError> {
        let label = &mut self.label;
        check_name(VertexLabel::KIND, &label.name)?;

        if !label.primary_keys.is_empty() && label.id_strategy == IdStrategy::Default {
            label.id_strategy = IdStrategy::PrimaryKey;
        }
        if label.id_strategy == IdStrategy::PrimaryKey {
            check_argument(!label.primary_keys.is_empty(), || {
                format!(
                    "The primary keys of vertex label '{}' can't be empty with PRIMARY_KEY id strategy",
                    label.name
                )
            })?;
        } else {
            check_argument(label.primary_keys.is_empty(), || {
                format!(
                    "Vertex label '{}' with {:?} id strategy can't have primary keys",
                    label.name, label.id_strategy
                )
            })?;
        }

        check_subset("primary key", &label.primary_keys, &label.properties)?;
        check_subset("nullable key", &label.nullable_keys, &label.properties)?;
        for key in &label.nullable_keys {
            check_argument(!label.primary_keys.contains(key), || {
                format!("The primary key '{}' can't be nullable", key)
            })?;
        }
        Ok(self.label)
    }

    /// Validates the label for append/eliminate, where only properties,
    /// nullable keys and user data may change.
    fn build_update(self) -> Result<VertexLabel, AppError> {
        check_name(VertexLabel::KIND, &self.label.name)?;
        check_argument(self.label.primary_keys.is_empty(), || {
            format!(
                "The primary keys of vertex label '{}' can't be updated",
                self.label.name
            )
        })?;
        check_argument(self.label.id_strategy == IdStrategy::Default, || {
            format!(
                "The id strategy of vertex label '{}' can't be updated",
                self.label.name
            )
        })?;
        Ok(self.label)
    }

    pub async fn create(self) -> Result<VertexLabel, AppError> {
        let manager = self.manager;
        manager.add_vertex_label(&self.build()?).await
    }

    pub async fn append(self) -> Result<VertexLabel, AppError> {
        let manager = self.manager;
        manager.append_vertex_label(&self.build_update()?).await
    }

    pub async fn eliminate(self) -> Result<VertexLabel, AppError> {
        let manager = self.manager;
        manager.eliminate_vertex_label(&self.build_update()?).await
    }

    /// Removes the label. Returns the id of the server-side removal task, if any.
    pub async fn remove(self) -> Result<Option<i64>, AppError> {
        check_name(VertexLabel::KIND, &self.label.name)?;
        self.manager.remove_vertex_label(&self.label.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::FromRef;
    use crate::driver::testing::ScriptedExecutor;

    fn schema() -> SchemaManager {
        SchemaManager::from_ref(&ScriptedExecutor::default().context())
    }

    #[test]
    fn test_primary_keys_imply_strategy() {
        let schema = schema();
        let label = schema
            .vertex_label("person")
            .properties(["name", "age"])
            .primary_keys(["name"])
            .build()
            .unwrap();
        assert_eq!(label.id_strategy, IdStrategy::PrimaryKey);
        assert_eq!(label.primary_keys, vec!["name"]);
    }

    #[test]
    fn test_primary_key_strategy_needs_keys() {
        let schema = schema();
        let err = schema
            .vertex_label("person")
            .properties(["name"])
            .use_primary_key_id()
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_other_strategies_forbid_primary_keys() {
        let schema = schema();
        assert!(schema
            .vertex_label("person")
            .properties(["name"])
            .primary_keys(["name"])
            .use_automatic_id()
            .build()
            .is_err());
    }

    #[test]
    fn test_keys_must_be_properties() {
        let schema = schema();
        assert!(schema
            .vertex_label("person")
            .properties(["name"])
            .primary_keys(["id"])
            .build()
            .is_err());
        assert!(schema
            .vertex_label("person")
            .properties(["name", "city"])
            .primary_keys(["name"])
            .nullable_keys(["name"])
            .build()
            .is_err());
    }

    #[test]
    fn test_update_rejects_primary_keys() {
        let schema = schema();
        assert!(schema
            .vertex_label("person")
            .primary_keys(["name"])
            .build_update()
            .is_err());
        let label = schema
            .vertex_label("person")
            .properties(["city"])
            .nullable_keys(["city"])
            .build_update()
            .unwrap();
        assert_eq!(label.nullable_keys, vec!["city"]);
    }
}
