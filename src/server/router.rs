//! Route table for the graph read API

use crate::resources::handlers::{
    AppState, get_edge, get_graph, get_vertex, list_edges, list_graphs, list_vertices,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the graph routes
///
/// - GET /graphs - List registered graphs
/// - GET /graphs/{graph_name} - Describe one graph
/// - GET /graphs/{graph_name}/edges - List edges (windowed)
/// - GET /graphs/{graph_name}/edges/{id} - Get one edge
/// - GET /graphs/{graph_name}/vertices - List vertices (windowed)
/// - GET /graphs/{graph_name}/vertices/{id} - Get one vertex
pub fn build_graph_routes(state: AppState) -> Router {
    Router::new()
        .route("/graphs", get(list_graphs))
        .route("/graphs/{graph_name}", get(get_graph))
        .route("/graphs/{graph_name}/edges", get(list_edges))
        .route("/graphs/{graph_name}/edges/{id}", get(get_edge))
        .route("/graphs/{graph_name}/vertices", get(list_vertices))
        .route("/graphs/{graph_name}/vertices/{id}", get(get_vertex))
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "graph-rest"
    }))
}
