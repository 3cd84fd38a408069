//! Index label schema element.

use serde::{Deserialize, Serialize};

use crate::driver::SchemaManager;
use crate::error::{check_argument, AppError};
use crate::rest::RestResult;
use crate::structure::constant::{BaseType, IndexType};
use crate::structure::schema::{check_name, default_check_exist, extend_unique, SchemaElement};

/// An index over one or more properties of a vertex or edge label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub base_type: Option<BaseType>,
    #[serde(default)]
    pub base_value: Option<String>,
    #[serde(default)]
    pub index_type: IndexType,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default = "default_check_exist")]
    pub check_exist: bool,
}

impl IndexLabel {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            base_type: None,
            base_value: None,
            index_type: IndexType::default(),
            fields: Vec::new(),
            check_exist: true,
        }
    }
}

impl SchemaElement for IndexLabel {
    const PATH: &'static str = "indexlabels";
    const KIND: &'static str = "index label";

    fn name(&self) -> &str {
        &self.name
    }

    /// Newer servers wrap the label with its rebuild task:
    /// `{"index_label": {...}, "task_id": 3}`.
    fn from_create_response(result: RestResult) -> Result<Self, AppError> {
        match result.get_opt::<IndexLabel>("index_label")? {
            Some(label) => Ok(label),
            None => result.read(),
        }
    }
}

/// Fluent builder for [`IndexLabel`].
pub struct IndexLabelBuilder<'a> {
    manager: &'a SchemaManager,
    label: IndexLabel,
}

impl<'a> IndexLabelBuilder<'a> {
    pub(crate) fn new(manager: &'a SchemaManager, name: &str) -> Self {
        Self {
            manager,
            label: IndexLabel::new(name),
        }
    }

    /// Builds the index on a vertex label.
    pub fn on_v(mut self, vertex_label: &str) -> Self {
        self.label.base_type = Some(BaseType::VertexLabel);
        self.label.base_value = Some(vertex_label.to_string());
        self
    }

    /// Builds the index on an edge label.
    pub fn on_e(mut self, edge_label: &str) -> Self {
        self.label.base_type = Some(BaseType::EdgeLabel);
        self.label.base_value = Some(edge_label.to_string());
        self
    }

    /// Indexed properties, in order.
    pub fn by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(&mut self.label.fields, fields);
        self
    }

    pub fn index_type(mut self, index_type: IndexType) -> Self {
        self.label.index_type = index_type;
        self
    }

    pub fn secondary(self) -> Self {
        self.index_type(IndexType::Secondary)
    }

    pub fn range(self) -> Self {
        self.index_type(IndexType::Range)
    }

    pub fn search(self) -> Self {
        self.index_type(IndexType::Search)
    }

    pub fn if_not_exist(mut self) -> Self {
        self.label.check_exist = false;
        self
    }

    /// Validates the label for creation and returns it without sending.
    pub fn build(self) -> Result<IndexLabel, AppError> {
        let label = &self.label;
        check_name(IndexLabel::KIND, &label.name)?;
        check_argument(label.base_type.is_some() && label.base_value.is_some(), || {
            format!(
                "Index label '{}' must be built on a vertex label or an edge label",
                label.name
            )
        })?;
        check_argument(!label.fields.is_empty(), || {
            format!("The fields of index label '{}' can't be empty", label.name)
        })?;
        if matches!(label.index_type, IndexType::Range | IndexType::Search) {
            check_argument(label.fields.len() == 1, || {
                format!(
                    "{:?} index label '{}' can only be built on one field, but got {:?}",
                    label.index_type, label.name, label.fields
                )
            })?;
        }
        Ok(self.label)
    }

    pub async fn create(self) -> Result<IndexLabel, AppError> {
        let manager = self.manager;
        manager.add_index_label(&self.build()?).await
    }

    /// Removes the label. Returns the id of the server-side removal task, if any.
    pub async fn remove(self) -> Result<Option<i64>, AppError> {
        check_name(IndexLabel::KIND, &self.label.name)?;
        self.manager.remove_index_label(&self.label.name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::FromRef;
    use crate::driver::testing::ScriptedExecutor;
    use serde_json::json;

    #[test]
    fn test_create_response_wrapped_and_bare() {
        let body = json!({
            "name": "personByName",
            "base_type": "VERTEX_LABEL",
            "base_value": "person",
            "index_type": "SECONDARY",
            "fields": ["name"]
        });

        let bare = IndexLabel::from_create_response(RestResult::new(201, body.clone())).unwrap();
        let wrapped = IndexLabel::from_create_response(RestResult::new(
            202,
            json!({"index_label": body, "task_id": 3}),
        ))
        .unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.base_type, Some(BaseType::VertexLabel));
    }

    fn schema() -> SchemaManager {
        SchemaManager::from_ref(&ScriptedExecutor::default().context())
    }

    #[test]
    fn test_base_and_fields_required() {
        let schema = schema();
        assert!(schema.index_label("byName").by(["name"]).build().is_err());
        assert!(schema.index_label("byName").on_v("person").build().is_err());
    }

    #[test]
    fn test_range_index_takes_one_field() {
        let schema = schema();
        assert!(schema
            .index_label("byAgeCity")
            .on_v("person")
            .by(["age", "city"])
            .range()
            .build()
            .is_err());
        let label = schema
            .index_label("createdByDate")
            .on_e("created")
            .by(["date"])
            .range()
            .build()
            .unwrap();
        assert_eq!(label.base_type, Some(BaseType::EdgeLabel));
        assert_eq!(label.index_type, IndexType::Range);
    }
}
