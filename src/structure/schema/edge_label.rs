//! Edge label schema element.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::driver::SchemaManager;
use crate::error::{check_argument, AppError};
use crate::structure::constant::Frequency;
use crate::structure::schema::{
    check_name, check_subset, default_check_exist, extend_unique, SchemaElement, UserData,
};

/// An edge type linking a source vertex label to a target vertex label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub source_label: Option<String>,
    #[serde(default)]
    pub target_label: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub sort_keys: Vec<String>,
    #[serde(default)]
    pub nullable_keys: Vec<String>,
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

impl EdgeLabel {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            source_label: None,
            target_label: None,
            frequency: Frequency::default(),
            properties: Vec::new(),
            sort_keys: Vec::new(),
            nullable_keys: Vec::new(),
            index_labels: Vec::new(),
            enable_label_index: true,
            user_data: UserData::new(),
            check_exist: true,
        }
    }
}

impl SchemaElement for EdgeLabel {
    const PATH: &'static str = "edgelabels";
    const KIND: &'static str = "edge label";

    fn name(&self) -> &str {
        &self.name
    }
}

/// Fluent builder for [`EdgeLabel`].
pub struct EdgeLabelBuilder<'a> {
    manager: &'a SchemaManager,
    label: EdgeLabel,
}

impl<'a> EdgeLabelBuilder<'a> {
    pub(crate) fn new(manager: &'a SchemaManager, name: &str) -> Self {
        Self {
            manager,
            label: EdgeLabel::new(name),
        }
    }

    /// Sets both endpoint labels.
    pub fn link(self, source_label: &str, target_label: &str) -> Self {
        self.source_label(source_label).target_label(target_label)
    }

    pub fn source_label(mut self, label: &str) -> Self {
        self.label.source_label = Some(label.to_string());
        self
    }

    pub fn target_label(mut self, label: &str) -> Self {
        self.label.target_label = Some(label.to_string());
        self
    }

    /// At most one edge of this label between two vertices.
    pub fn single_time(mut self) -> Self {
        self.label.frequency = Frequency::Single;
        self
    }

    /// Several edges of this label between two vertices, told apart by sort keys.
    pub fn multi_times(mut self) -> Self {
        self.label.frequency = Frequency::Multiple;
        self
    }

    pub fn properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.label.properties, names);
        self
    }

    pub fn sort_keys<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.label.sort_keys, names);
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
    pub fn build(self) -> Result<EdgeLabel, AppError> {
        let label = &self.label;
        check_name(EdgeLabel::KIND, &label.name)?;
        check_argument(
            label.source_label.is_some() && label.target_label.is_some(),
            || {
                format!(
                    "Edge label '{}' must link a source and a target vertex label",
                    label.name
                )
            },
        )?;

        if label.frequency == Frequency::Multiple {
            check_argument(!label.sort_keys.is_empty(), || {
                format!(
                    "The sort keys of multi-times edge label '{}' can't be empty",
                    label.name
                )
            })?;
        } else {
            check_argument(label.sort_keys.is_empty(), || {
                format!(
                    "Sort keys can only be set on multi-times edge labels, but '{}' is not",
                    label.name
                )
            })?;
        }

        check_subset("sort key", &label.sort_keys, &label.properties)?;
        check_subset("nullable key", &label.nullable_keys, &label.properties)?;
        Ok(self.label)
    }

    /// Validates the label for append/eliminate.
    fn build_update(self) -> Result<EdgeLabel, AppError> {
        let label = &self.label;
        check_name(EdgeLabel::KIND, &label.name)?;
        check_argument(
            label.source_label.is_none()
                && label.target_label.is_none()
                && label.sort_keys.is_empty()
                && label.frequency == Frequency::Default,
            || {
                format!(
                    "Only properties, nullable keys and user data of edge label '{}' can be updated",
                    label.name
                )
            },
        )?;
        Ok(self.label)
    }

    pub async fn create(self) -> Result<EdgeLabel, AppError> {
        let manager = self.manager;
        manager.add_edge_label(&self.build()?).await
    }

    pub async fn append(self) -> Result<EdgeLabel, AppError> {
        let manager = self.manager;
        manager.append_edge_label(&self.build_update()?).await
    }

    pub async fn eliminate(self) -> Result<EdgeLabel, AppError> {
        let manager = self.manager;
        manager.eliminate_edge_label(&self.build_update()?).await
    }

    /// Removes the label. Returns the id of the server-side removal task, if any.
    pub async fn remove(self) -> Result<Option<i64>, AppError> {
        check_name(EdgeLabel::KIND, &self.label.name)?;
        self.manager.remove_edge_label(&self.label.name).await
    }
}
