//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - Health check routes
//! - Graph discovery routes
//! - Windowed element listing and lookup routes for vertices and edges

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::build_graph_routes;
