//! Schema command handler.

use color_eyre::Result;
use serde_json::json;

use super::App;

impl App {
    /// Print every schema element of the graph as one JSON document.
    pub async fn run_schema(&self) -> Result<()> {
        let schema = self.client()?.schema();

        let (property_keys, vertex_labels, edge_labels, index_labels) = tokio::try_join!(
            schema.get_property_keys(),
            schema.get_vertex_labels(),
            schema.get_edge_labels(),
            schema.get_index_labels(),
        )?;
        tracing::info!(
            property_keys = property_keys.len(),
            vertex_labels = vertex_labels.len(),
            edge_labels = edge_labels.len(),
            index_labels = index_labels.len(),
            "Fetched schema"
        );

        let document = json!({
            "propertykeys": property_keys,
            "vertexlabels": vertex_labels,
            "edgelabels": edge_labels,
            "indexlabels": index_labels,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        Ok(())
    }
}
