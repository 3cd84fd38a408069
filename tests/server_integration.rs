//! Integration tests against a live HugeGraph server.
//!
//! These tests require a server with a `hugegraph` graph on localhost:8080.
//! Run with: `cargo test --features integration --test server_integration`

#![cfg(feature = "integration")]

use hugegraph_client::cli::init::{create_demo_schema, load_demo_data};
use hugegraph_client::structure::traverser::{
    FusiformSimilarityRequest, KoutRequest, ShortestPathRequest,
};
use hugegraph_client::structure::{Direction, Id, Properties};
use hugegraph_client::HugeClient;
use serial_test::serial;

const TEST_URL: &str = "http://localhost:8080";
const TEST_GRAPH: &str = "hugegraph";

async fn create_client() -> HugeClient {
    HugeClient::connect(TEST_URL, TEST_GRAPH)
        .await
        .expect("Failed to connect to test server")
}

/// Loads the demo graph, returning the server id of the vertex named `name`.
async fn seed(client: &HugeClient, name: &str) -> Id {
    create_demo_schema(&client.schema())
        .await
        .expect("Schema creation failed");
    let (vertices, _) = load_demo_data(&client.graph())
        .await
        .expect("Data load failed");
    vertices
        .iter()
        .find(|v| v.properties().get("name").and_then(|n| n.as_str()) == Some(name))
        .and_then(|v| v.id().cloned())
        .expect("demo vertex missing")
}

// All tests run serially since they share the demo graph
#[serial]
mod server_tests {
    use super::*;

    #[tokio::test]
    async fn test_version() {
        let client = create_client().await;
        let version = client.version().await.expect("Version failed");
        assert_eq!(version.version, "v1");
    }

    #[tokio::test]
    async fn test_demo_schema_is_idempotent() {
        let client = create_client().await;
        create_demo_schema(&client.schema()).await.expect("First run failed");
        create_demo_schema(&client.schema()).await.expect("Second run failed");

        let person = client
            .schema()
            .get_vertex_label("person")
            .await
            .expect("Get failed");
        assert_eq!(person.primary_keys, vec!["name"]);
        assert!(person.properties.contains(&"price".to_string()));
    }

    #[tokio::test]
    async fn test_batch_and_lookup() {
        let client = create_client().await;
        let marko = seed(&client, "marko").await;

        let vertex = client.graph().get_vertex(marko.clone()).await.expect("Get failed");
        assert_eq!(vertex.label(), "person");

        let created = client
            .graph()
            .list_edges(Some(&marko), Direction::Out, Some("created"), &Properties::new(), 100)
            .await
            .expect("List failed");
        assert!(!created.is_empty());
    }

    #[tokio::test]
    async fn test_traversals() {
        let client = create_client().await;
        let marko = seed(&client, "marko").await;
        let peter = seed(&client, "peter").await;

        let kout = KoutRequest::builder(marko.clone(), 1)
            .unwrap()
            .direction(Direction::Out)
            .build()
            .unwrap();
        let neighbors = client.traverser().kout(&kout).await.expect("Kout failed");
        assert!(!neighbors.is_empty());

        let shortest = ShortestPathRequest::builder(marko.clone(), peter, 3)
            .unwrap()
            .build()
            .unwrap();
        let path = client
            .traverser()
            .shortest_path(&shortest)
            .await
            .expect("Shortest path failed");
        assert_eq!(path.first(), Some(&marko));

        let fusiform = FusiformSimilarityRequest::builder()
            .sources(|s| s.label("person"))
            .label("created")
            .direction(Direction::Out)
            .min_neighbors(1)
            .unwrap()
            .alpha(0.5)
            .unwrap()
            .build()
            .unwrap();
        client
            .traverser()
            .fusiform_similarity(&fusiform)
            .await
            .expect("Fusiform similarity failed");
    }
}
