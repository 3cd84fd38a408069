//! Init command handler: demo schema and sample data.

use color_eyre::Result;

use crate::driver::{GraphManager, SchemaManager};
use crate::error::AppError;
use crate::structure::{Edge, Vertex};

use super::App;

impl App {
    /// Run the init command to create the demo schema and load sample data.
    pub async fn run_init(&self) -> Result<()> {
        let client = self.client()?;
        tracing::info!(graph = client.graph_name(), "Creating demo schema");
        create_demo_schema(&client.schema()).await?;

        tracing::info!("Loading sample data");
        let (vertices, edges) = load_demo_data(&client.graph()).await?;
        for vertex in &vertices {
            tracing::debug!(%vertex, "Created vertex");
        }
        for edge in &edges {
            tracing::debug!(%edge, "Created edge");
        }
        tracing::info!(
            vertices = vertices.len(),
            edges = edges.len(),
            "Init complete"
        );
        Ok(())
    }
}

/// Creates the people/software schema. Safe to rerun: every element is
/// created with `if_not_exist`.
pub async fn create_demo_schema(schema: &SchemaManager) -> Result<(), AppError> {
    schema.property_key("name").as_text().if_not_exist().create().await?;
    schema.property_key("age").as_int().if_not_exist().create().await?;
    schema.property_key("lang").as_text().if_not_exist().create().await?;
    schema.property_key("date").as_text().if_not_exist().create().await?;
    schema.property_key("price").as_int().if_not_exist().create().await?;

    schema
        .vertex_label("person")
        .properties(["name", "age"])
        .primary_keys(["name"])
        .if_not_exist()
        .create()
        .await?;
    schema
        .vertex_label("person")
        .properties(["price"])
        .nullable_keys(["price"])
        .append()
        .await?;
    schema
        .vertex_label("software")
        .properties(["name", "lang", "price"])
        .primary_keys(["name"])
        .if_not_exist()
        .create()
        .await?;

    schema
        .index_label("personByName")
        .on_v("person")
        .by(["name"])
        .secondary()
        .if_not_exist()
        .create()
        .await?;
    schema
        .index_label("softwareByPrice")
        .on_v("software")
        .by(["price"])
        .search()
        .if_not_exist()
        .create()
        .await?;

    schema
        .edge_label("knows")
        .link("person", "person")
        .properties(["date"])
        .if_not_exist()
        .create()
        .await?;
    schema
        .edge_label("created")
        .link("person", "software")
        .properties(["date"])
        .if_not_exist()
        .create()
        .await?;

    schema
        .index_label("createdByDate")
        .on_e("created")
        .by(["date"])
        .secondary()
        .if_not_exist()
        .create()
        .await?;
    Ok(())
}

/// Loads six vertices and six edges in two batches.
pub async fn load_demo_data(graph: &GraphManager) -> Result<(Vec<Vertex>, Vec<Edge>), AppError> {
    let person = |name: &str, age: i64| {
        Vertex::new("person")
            .property("name", name)
            .property("age", age)
    };
    let software = |name: &str, price: i64| {
        Vertex::new("software")
            .property("name", name)
            .property("lang", "java")
            .property("price", price)
    };

    let vertices = graph
        .add_vertices(vec![
            person("marko", 29),
            person("vadas", 27),
            software("lop", 328),
            person("josh", 32),
            software("ripple", 199),
            person("peter", 35),
        ])
        .await?;

    let [marko, vadas, lop, josh, ripple, peter] = vertices.as_slice() else {
        return Err(AppError::Internal(format!(
            "expected 6 demo vertices, got {}",
            vertices.len()
        )));
    };
    let link = |label: &str, source: &Vertex, target: &Vertex, date: &str| {
        Edge::new(label)
            .source(source)
            .target(target)
            .property("date", date)
    };

    let edges = graph
        .add_edges(
            vec![
                link("knows", marko, vadas, "20160110"),
                link("knows", marko, josh, "20130220"),
                link("created", marko, lop, "20171210"),
                link("created", josh, ripple, "20171210"),
                link("created", josh, lop, "20091111"),
                link("created", peter, lop, "20170324"),
            ],
            false,
        )
        .await?;

    Ok((vertices, edges))
}
