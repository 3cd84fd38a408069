//! Schema manager: entry points for schema builders and schema CRUD.

use crate::api::SchemaApi;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::structure::schema::{
    EdgeLabel, EdgeLabelBuilder, IndexLabel, IndexLabelBuilder, PropertyKey, PropertyKeyBuilder,
    VertexLabel, VertexLabelBuilder,
};
use crate::structure::UpdateAction;

/// Manages property keys and vertex, edge and index labels of one graph.
///
/// Builders returned by [`property_key`](Self::property_key) and friends
/// borrow the manager and submit through it:
///
/// ```ignore
/// let schema = client.schema();
/// schema.property_key("name").as_text().if_not_exist().create().await?;
/// schema
///     .vertex_label("person")
///     .properties(["name", "age"])
///     .primary_keys(["name"])
///     .create()
///     .await?;
/// ```
#[derive(FromContext, Clone)]
pub struct SchemaManager {
    property_keys: SchemaApi<PropertyKey>,
    vertex_labels: SchemaApi<VertexLabel>,
    edge_labels: SchemaApi<EdgeLabel>,
    index_labels: SchemaApi<IndexLabel>,
}

impl SchemaManager {
    // ========================================================================
    // Builders
    // ========================================================================

    pub fn property_key(&self, name: &str) -> PropertyKeyBuilder<'_> {
        PropertyKeyBuilder::new(self, name)
    }

    pub fn vertex_label(&self, name: &str) -> VertexLabelBuilder<'_> {
        VertexLabelBuilder::new(self, name)
    }

    pub fn edge_label(&self, name: &str) -> EdgeLabelBuilder<'_> {
        EdgeLabelBuilder::new(self, name)
    }

    pub fn index_label(&self, name: &str) -> IndexLabelBuilder<'_> {
        IndexLabelBuilder::new(self, name)
    }

    // ========================================================================
    // Property keys
    // ========================================================================

    pub async fn add_property_key(&self, key: &PropertyKey) -> Result<PropertyKey, AppError> {
        tracing::debug!(name = %key.name, "Creating property key");
        self.property_keys.create(key).await
    }

    pub async fn append_property_key(&self, key: &PropertyKey) -> Result<PropertyKey, AppError> {
        self.property_keys.update(key, UpdateAction::Append).await
    }

    pub async fn eliminate_property_key(&self, key: &PropertyKey) -> Result<PropertyKey, AppError> {
        self.property_keys.update(key, UpdateAction::Eliminate).await
    }

    pub async fn remove_property_key(&self, name: &str) -> Result<(), AppError> {
        self.property_keys.delete(name).await.map(|_| ())
    }

    pub async fn get_property_key(&self, name: &str) -> Result<PropertyKey, AppError> {
        self.property_keys.get(name).await
    }

    pub async fn get_property_keys(&self) -> Result<Vec<PropertyKey>, AppError> {
        self.property_keys.list().await
    }

    // ========================================================================
    // Vertex labels
    // ========================================================================

    pub async fn add_vertex_label(&self, label: &VertexLabel) -> Result<VertexLabel, AppError> {
        tracing::debug!(name = %label.name, "Creating vertex label");
        self.vertex_labels.create(label).await
    }

    pub async fn append_vertex_label(&self, label: &VertexLabel) -> Result<VertexLabel, AppError> {
        self.vertex_labels.update(label, UpdateAction::Append).await
    }

    pub async fn eliminate_vertex_label(
        &self,
        label: &VertexLabel,
    ) -> Result<VertexLabel, AppError> {
        self.vertex_labels
            .update(label, UpdateAction::Eliminate)
            .await
    }

    /// Removes a vertex label with its vertices and indexes.
    pub async fn remove_vertex_label(&self, name: &str) -> Result<Option<i64>, AppError> {
        self.vertex_labels.delete(name).await
    }

    pub async fn get_vertex_label(&self, name: &str) -> Result<VertexLabel, AppError> {
        self.vertex_labels.get(name).await
    }

    pub async fn get_vertex_labels(&self) -> Result<Vec<VertexLabel>, AppError> {
        self.vertex_labels.list().await
    }

    // ========================================================================
    // Edge labels
    // ========================================================================

    pub async fn add_edge_label(&self, label: &EdgeLabel) -> Result<EdgeLabel, AppError> {
        tracing::debug!(name = %label.name, "Creating edge label");
        self.edge_labels.create(label).await
    }

    pub async fn append_edge_label(&self, label: &EdgeLabel) -> Result<EdgeLabel, AppError> {
        self.edge_labels.update(label, UpdateAction::Append).await
    }

    pub async fn eliminate_edge_label(&self, label: &EdgeLabel) -> Result<EdgeLabel, AppError> {
        self.edge_labels.update(label, UpdateAction::Eliminate).await
    }

    pub async fn remove_edge_label(&self, name: &str) -> Result<Option<i64>, AppError> {
        self.edge_labels.delete(name).await
    }

    pub async fn get_edge_label(&self, name: &str) -> Result<EdgeLabel, AppError> {
        self.edge_labels.get(name).await
    }

    pub async fn get_edge_labels(&self) -> Result<Vec<EdgeLabel>, AppError> {
        self.edge_labels.list().await
    }

    // ========================================================================
    // Index labels
    // ========================================================================

    /// Creates an index label. The server rebuilds the index asynchronously.
    pub async fn add_index_label(&self, label: &IndexLabel) -> Result<IndexLabel, AppError> {
        tracing::debug!(name = %label.name, "Creating index label");
        self.index_labels.create(label).await
    }

    pub async fn remove_index_label(&self, name: &str) -> Result<Option<i64>, AppError> {
        self.index_labels.delete(name).await
    }

    pub async fn get_index_label(&self, name: &str) -> Result<IndexLabel, AppError> {
        self.index_labels.get(name).await
    }

    pub async fn get_index_labels(&self) -> Result<Vec<IndexLabel>, AppError> {
        self.index_labels.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::di::FromRef;
    use crate::driver::testing::ScriptedExecutor;
    use crate::structure::{DataType, IdStrategy, IndexType};
    use reqwest::Method;
    use serde_json::json;

    fn manager(executor: &ScriptedExecutor) -> SchemaManager {
        SchemaManager::from_ref(&executor.context())
    }

    #[tokio::test]
    async fn test_create_property_key() {
        let executor = ScriptedExecutor::new(vec![json!({
            "id": 1,
            "name": "age",
            "data_type": "INT",
            "cardinality": "SINGLE",
            "properties": [],
            "user_data": {}
        })]);
        let schema = manager(&executor);

        let key = schema
            .property_key("age")
            .as_int()
            .if_not_exist()
            .create()
            .await
            .unwrap();

        assert_eq!(key.id, Some(1));
        assert_eq!(key.data_type, DataType::Int);

        let request = executor.request(0);
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path_str(), "graphs/hugegraph/schema/propertykeys");
        let body = request.body.unwrap();
        assert_eq!(body["name"], "age");
        assert_eq!(body["data_type"], "INT");
        assert_eq!(body["check_exist"], false);
    }

    #[tokio::test]
    async fn test_append_vertex_label_sends_action() {
        let executor = ScriptedExecutor::new(vec![json!({
            "id": 3,
            "name": "person",
            "id_strategy": "PRIMARY_KEY",
            "primary_keys": ["name"],
            "properties": ["name", "age", "city"],
            "nullable_keys": ["city"]
        })]);
        let schema = manager(&executor);

        let label = schema
            .vertex_label("person")
            .properties(["city"])
            .nullable_keys(["city"])
            .append()
            .await
            .unwrap();

        assert_eq!(label.id_strategy, IdStrategy::PrimaryKey);
        let request = executor.request(0);
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path_str(), "graphs/hugegraph/schema/vertexlabels/person");
        assert_eq!(request.query_param("action"), Some("append"));
    }

    #[tokio::test]
    async fn test_remove_vertex_label_returns_task() {
        let executor = ScriptedExecutor::new(vec![json!({"task_id": 17})]);
        let schema = manager(&executor);

        let task = schema.vertex_label("person").remove().await.unwrap();
        assert_eq!(task, Some(17));
        assert_eq!(executor.request(0).method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_list_index_labels() {
        let executor = ScriptedExecutor::new(vec![json!({
            "indexlabels": [{
                "id": 1,
                "name": "personByCity",
                "base_type": "VERTEX_LABEL",
                "base_value": "person",
                "index_type": "SECONDARY",
                "fields": ["city"]
            }]
        })]);
        let schema = manager(&executor);

        let labels = schema.get_index_labels().await.unwrap();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].index_type, IndexType::Secondary);
        assert_eq!(executor.request(0).method, Method::GET);
    }

    #[tokio::test]
    async fn test_invalid_builder_sends_nothing() {
        let executor = ScriptedExecutor::new(vec![]);
        let schema = manager(&executor);

        let err = schema
            .edge_label("knows")
            .properties(["date"])
            .create()
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(executor.request_count(), 0);
    }
}
