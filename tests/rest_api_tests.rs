//! HTTP round trips through the full router
//!
//! JSON → HTTP request → handler → resource → in-memory graph → HTTP response → JSON

use axum::http::StatusCode;
use axum_test::TestServer;
use graph_rest::prelude::*;
use serde_json::{Value, json};

fn sample_graph(edges: usize) -> InMemoryGraph {
    let graph = InMemoryGraph::with_description("sample");
    graph.add_vertex(Vertex::new(1_i64).with_property("name", "marko"));
    graph.add_vertex(Vertex::new("v2").with_property("name", "vadas"));
    for ix in 0..edges {
        graph.add_edge(
            Edge::new(ix, format!("label-{}", ix), 1_i64, "v2").with_property("weight", 0.5),
        );
    }
    graph
}

fn make_server(edges: usize) -> TestServer {
    let provider = InMemoryGraphProvider::new();
    provider.register("graph", sample_graph(edges));
    provider.register("empty", InMemoryGraph::new());

    let router = ServerBuilder::new()
        .with_graph_provider(provider)
        .build()
        .unwrap();
    TestServer::new(router).unwrap()
}

fn assert_list_body(body: &Value, returned: usize) {
    assert_eq!(body["total_size"], returned);
    assert!(body["query_time"].as_f64().unwrap() > 0.0);
    assert_eq!(body["results"].as_array().unwrap().len(), returned);
}

// =============================================================================
// Edge listing
// =============================================================================

#[tokio::test]
async fn test_rest_list_edges() {
    let server = make_server(100);

    let response = server.get("/graphs/graph/edges").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_list_body(&body, 100);
    assert_eq!(body["results"][0]["_type"], "edge");
    assert_eq!(body["results"][0]["_outV"], 1);
    assert_eq!(body["results"][0]["_inV"], "v2");
}

#[tokio::test]
async fn test_rest_list_edges_window() {
    let server = make_server(100);

    let response = server
        .get("/graphs/graph/edges")
        .add_query_param(OFFSET_START, 10)
        .add_query_param(OFFSET_END, 20)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_list_body(&body, 10);
    for (ix, edge) in body["results"].as_array().unwrap().iter().enumerate() {
        assert_eq!(edge["_id"], ix + 10);
        assert_eq!(edge["_label"], format!("label-{}", ix + 10));
    }
}

#[tokio::test]
async fn test_rest_list_edges_window_beyond_range() {
    let server = make_server(5);

    let response = server
        .get("/graphs/graph/edges?rexster.offset.start=10&rexster.offset.end=20")
        .await;
    response.assert_status_ok();
    assert_list_body(&response.json(), 0);
}

#[tokio::test]
async fn test_rest_list_edges_inverted_window() {
    let server = make_server(5);

    let response = server
        .get("/graphs/graph/edges?rexster.offset.start=100&rexster.offset.end=20")
        .await;
    response.assert_status_ok();
    assert_list_body(&response.json(), 0);
}

#[tokio::test]
async fn test_rest_list_edges_malformed_window_is_ignored() {
    let server = make_server(8);

    let response = server
        .get("/graphs/graph/edges?rexster.offset.start=abc&rexster.offset.end=-1")
        .await;
    response.assert_status_ok();
    assert_list_body(&response.json(), 8);
}

#[tokio::test]
async fn test_rest_list_edges_repeated_param_first_wins() {
    let server = make_server(50);

    let response = server
        .get("/graphs/graph/edges?rexster.offset.end=3&rexster.offset.end=40")
        .await;
    response.assert_status_ok();
    assert_list_body(&response.json(), 3);
}

#[tokio::test]
async fn test_rest_list_edges_empty_graph() {
    let server = make_server(0);

    let response = server.get("/graphs/empty/edges").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_list_body(&body, 0);
    assert_eq!(body["results"], json!([]));
}

#[tokio::test]
async fn test_rest_list_edges_unknown_graph() {
    let server = make_server(1);

    let response = server.get("/graphs/nope/edges").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "GRAPH_NOT_FOUND");
    assert_eq!(body["details"]["graph"], "nope");
}

// =============================================================================
// Single edge
// =============================================================================

#[tokio::test]
async fn test_rest_get_edge() {
    let server = make_server(3);

    let response = server.get("/graphs/graph/edges/2").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body.get("total_size").is_none());
    assert!(body["query_time"].as_f64().unwrap() > 0.0);
    assert_eq!(
        body["results"],
        json!({
            "_id": 2,
            "_type": "edge",
            "_label": "label-2",
            "_outV": 1,
            "_inV": "v2",
            "weight": 0.5
        })
    );
}

#[tokio::test]
async fn test_rest_get_edge_not_found() {
    let server = make_server(3);

    let response = server.get("/graphs/graph/edges/id-does-not-match-any").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "ELEMENT_NOT_FOUND");
    assert_eq!(body["details"]["kind"], "edge");
}

// =============================================================================
// Vertices
// =============================================================================

#[tokio::test]
async fn test_rest_list_vertices_window() {
    let server = make_server(3);

    let response = server
        .get("/graphs/graph/vertices")
        .add_query_param(OFFSET_START, 1)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_list_body(&body, 1);
    assert_eq!(body["results"][0]["_id"], "v2");
    assert_eq!(body["results"][0]["name"], "vadas");
}

#[tokio::test]
async fn test_rest_get_vertex() {
    let server = make_server(0);

    let response = server.get("/graphs/graph/vertices/v2").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["results"]["_type"], "vertex");
    assert_eq!(body["results"]["name"], "vadas");

    // Edge ids and vertex ids live in separate namespaces
    server
        .get("/graphs/graph/edges/v2")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// =============================================================================
// Graph discovery
// =============================================================================

#[tokio::test]
async fn test_rest_list_graphs() {
    let server = make_server(0);

    let response = server.get("/graphs").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["graphs"], json!(["empty", "graph"]));
    assert!(body["query_time"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_rest_get_graph() {
    let server = make_server(4);

    let response = server.get("/graphs/graph").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["name"], "graph");
    assert_eq!(body["graph"], "sample[vertices:2 edges:4]");
    assert!(body["up_time"].as_str().unwrap().ends_with("[s]"));

    server
        .get("/graphs/nope")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_health() {
    let server = make_server(0);

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

// =============================================================================
// Custom serializer
// =============================================================================

struct LabelOnlySerializer;

impl ElementSerializer for LabelOnlySerializer {
    fn serialize(&self, element: &Element) -> anyhow::Result<Value> {
        match element {
            Element::Edge(edge) => Ok(json!({ "label": edge.label })),
            Element::Vertex(_) => Err(anyhow::anyhow!("vertices are not exported")),
        }
    }
}

fn make_server_with_serializer(edges: usize) -> TestServer {
    let provider = InMemoryGraphProvider::new();
    provider.register("graph", sample_graph(edges));

    let router = ServerBuilder::new()
        .with_graph_provider(provider)
        .with_serializer(LabelOnlySerializer)
        .build()
        .unwrap();
    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn test_rest_custom_serializer_shapes_results() {
    let server = make_server_with_serializer(3);

    let response = server
        .get("/graphs/graph/edges?rexster.offset.start=1&rexster.offset.end=3")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_list_body(&body, 2);
    assert_eq!(
        body["results"],
        json!([{ "label": "label-1" }, { "label": "label-2" }])
    );
}

#[tokio::test]
async fn test_rest_custom_serializer_failure_is_500() {
    let server = make_server_with_serializer(1);

    let response = server.get("/graphs/graph/vertices/v2").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["code"], "SERIALIZATION_ERROR");
}
