//! Storage implementations for graph backends

pub mod in_memory;

pub use in_memory::{InMemoryGraph, InMemoryGraphProvider};
