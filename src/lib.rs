//! # graph-rest
//!
//! A paginated JSON-over-HTTP read API for the vertices and edges of
//! pluggable graph backends.
//!
//! ## Features
//!
//! - **Uniform Envelopes**: every response carries `query_time`; lists also carry `total_size`
//! - **Offset Windows**: `rexster.offset.start` / `rexster.offset.end` select a slice of the backend's iteration order
//! - **Lenient Pagination**: malformed or inverted offsets yield empty or truncated results, never errors
//! - **Pluggable Backends**: implement `GraphProvider` and `Graph` for any storage engine
//! - **In-Memory Storage**: seed graphs from YAML configuration for tests and demos
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graph_rest::prelude::*;
//!
//! let graph = InMemoryGraph::new();
//! graph.add_vertex(Vertex::new(1_i64).with_property("name", "marko"));
//! graph.add_vertex(Vertex::new(2_i64).with_property("name", "vadas"));
//! graph.add_edge(Edge::new(7_i64, "knows", 1_i64, 2_i64));
//!
//! let provider = InMemoryGraphProvider::new();
//! provider.register("tinkergraph", graph);
//!
//! ServerBuilder::new()
//!     .with_graph_provider(provider)
//!     .serve("127.0.0.1:8182")
//!     .await?;
//!
//! // GET /graphs/tinkergraph/edges?rexster.offset.start=0&rexster.offset.end=10
//! ```

pub mod config;
pub mod core;
pub mod resources;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, Edge, Element, ElementError, ElementId, ElementKind,
        ElementSerializer, Graph, GraphError, GraphHandle, GraphProvider, JsonElementSerializer,
        ListEnvelope, OffsetWindow, QueryTimer, RequestParams, SingleEnvelope, StorageError,
        Vertex,
    };
    pub use crate::core::query::{OFFSET_END, OFFSET_START};

    // === Resources ===
    pub use crate::resources::{AppState, ElementResource};

    // === Storage ===
    pub use crate::storage::{InMemoryGraph, InMemoryGraphProvider};

    // === Config ===
    pub use crate::config::{GraphConfig, ServerConfig};

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};
}
