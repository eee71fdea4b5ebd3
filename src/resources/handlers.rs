//! HTTP handlers for graph and element resources
//!
//! Handlers are thin: they decode the path and query string, build the
//! resource for the requested element kind and hand back its envelope.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::{
    ApiResult, ElementKind, ElementSerializer, GraphProvider, ListEnvelope, RequestParams,
    SingleEnvelope,
};
use crate::resources::elements::ElementResource;
use crate::resources::graphs::{self, GraphInfo, GraphList};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn GraphProvider>,
    pub serializer: Arc<dyn ElementSerializer>,
    /// When the server was built, for uptime reporting
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(provider: Arc<dyn GraphProvider>, serializer: Arc<dyn ElementSerializer>) -> Self {
        Self {
            provider,
            serializer,
            started_at: Utc::now(),
        }
    }

    /// Resource over the given element kind, sharing this state's collaborators
    pub fn resource(&self, kind: ElementKind) -> ElementResource {
        ElementResource::new(kind, self.provider.clone(), self.serializer.clone())
    }
}

/// GET /graphs
pub async fn list_graphs(State(state): State<AppState>) -> Json<GraphList> {
    Json(graphs::list_graphs(state.provider.as_ref()))
}

/// GET /graphs/{graph_name}
pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_name): Path<String>,
) -> ApiResult<Json<GraphInfo>> {
    graphs::describe_graph(state.provider.as_ref(), &graph_name, state.started_at).map(Json)
}

/// GET /graphs/{graph_name}/edges
///
/// Recognizes `rexster.offset.start` and `rexster.offset.end`.
pub async fn list_edges(
    state: State<AppState>,
    graph_name: Path<String>,
    query: Query<Vec<(String, String)>>,
) -> ApiResult<Json<ListEnvelope>> {
    list_elements(ElementKind::Edge, state, graph_name, query)
}

/// GET /graphs/{graph_name}/edges/{id}
pub async fn get_edge(
    state: State<AppState>,
    path: Path<(String, String)>,
) -> ApiResult<Json<SingleEnvelope>> {
    get_element(ElementKind::Edge, state, path)
}

/// GET /graphs/{graph_name}/vertices
pub async fn list_vertices(
    state: State<AppState>,
    graph_name: Path<String>,
    query: Query<Vec<(String, String)>>,
) -> ApiResult<Json<ListEnvelope>> {
    list_elements(ElementKind::Vertex, state, graph_name, query)
}

/// GET /graphs/{graph_name}/vertices/{id}
pub async fn get_vertex(
    state: State<AppState>,
    path: Path<(String, String)>,
) -> ApiResult<Json<SingleEnvelope>> {
    get_element(ElementKind::Vertex, state, path)
}

fn list_elements(
    kind: ElementKind,
    State(state): State<AppState>,
    Path(graph_name): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<ListEnvelope>> {
    let params = RequestParams::from_pairs(pairs);
    state.resource(kind).list_all(&graph_name, &params).map(Json)
}

fn get_element(
    kind: ElementKind,
    State(state): State<AppState>,
    Path((graph_name, id)): Path<(String, String)>,
) -> ApiResult<Json<SingleEnvelope>> {
    state.resource(kind).get_by_id(&graph_name, &id).map(Json)
}
