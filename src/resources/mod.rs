//! Read resources exposed over HTTP
//!
//! - `elements`: windowed listing and lookup by id for vertices and edges
//! - `graphs`: discovery of registered graphs
//! - `handlers`: axum handlers wiring both to the router

pub mod elements;
pub mod graphs;
pub mod handlers;

pub use elements::ElementResource;
pub use handlers::AppState;
