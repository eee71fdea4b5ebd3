//! In-memory graph storage for testing, demos and config-seeded servers

use crate::core::element::{Edge, Element, ElementKind, Vertex};
use crate::core::graph::{ElementIter, Graph, GraphProvider};
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type Snapshot = Arc<Vec<Element>>;

/// In-memory graph
///
/// Elements are kept in insertion order. Each kind is stored as a
/// copy-on-write snapshot so iteration never holds the lock.
pub struct InMemoryGraph {
    description: String,
    vertices: RwLock<Snapshot>,
    edges: RwLock<Snapshot>,
}

impl InMemoryGraph {
    pub fn new() -> Self {
        Self::with_description("in-memory graph")
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vertices: RwLock::new(Arc::new(Vec::new())),
            edges: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn add_vertex(&self, vertex: Vertex) {
        Self::push(&self.vertices, vertex.into());
    }

    pub fn add_edge(&self, edge: Edge) {
        Self::push(&self.edges, edge.into());
    }

    pub fn vertex_count(&self) -> usize {
        Self::read(&self.vertices).map_or(0, |s| s.len())
    }

    pub fn edge_count(&self) -> usize {
        Self::read(&self.edges).map_or(0, |s| s.len())
    }

    fn store(&self, kind: ElementKind) -> &RwLock<Snapshot> {
        match kind {
            ElementKind::Vertex => &self.vertices,
            ElementKind::Edge => &self.edges,
        }
    }

    fn push(store: &RwLock<Snapshot>, element: Element) {
        // A poisoned lock still holds a consistent snapshot
        let mut guard = store.write().unwrap_or_else(|e| e.into_inner());
        Arc::make_mut(&mut guard).push(element);
    }

    fn read(store: &RwLock<Snapshot>) -> Result<Snapshot> {
        let guard = store
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        Ok(Arc::clone(&guard))
    }
}

impl Default for InMemoryGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph for InMemoryGraph {
    fn elements(&self, kind: ElementKind) -> Result<ElementIter<'_>> {
        let snapshot = Self::read(self.store(kind))?;
        Ok(Box::new(
            (0..snapshot.len()).map(move |ix| snapshot[ix].clone()),
        ))
    }

    fn element(&self, kind: ElementKind, id: &str) -> Result<Option<Element>> {
        let snapshot = Self::read(self.store(kind))?;
        Ok(snapshot.iter().find(|e| e.id().matches(id)).cloned())
    }

    fn description(&self) -> String {
        format!(
            "{}[vertices:{} edges:{}]",
            self.description,
            self.vertex_count(),
            self.edge_count()
        )
    }
}

/// In-memory registry of named graphs
///
/// Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryGraphProvider {
    graphs: Arc<RwLock<HashMap<String, Arc<dyn Graph>>>>,
}

impl InMemoryGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a graph under `name`, replacing any previous one
    pub fn register(&self, name: impl Into<String>, graph: impl Graph + 'static) {
        self.register_arc(name, Arc::new(graph));
    }

    pub fn register_arc(&self, name: impl Into<String>, graph: Arc<dyn Graph>) {
        let mut graphs = self.graphs.write().unwrap_or_else(|e| e.into_inner());
        graphs.insert(name.into(), graph);
    }
}

impl GraphProvider for InMemoryGraphProvider {
    fn graph(&self, name: &str) -> Option<Arc<dyn Graph>> {
        let graphs = self.graphs.read().unwrap_or_else(|e| e.into_inner());
        graphs.get(name).cloned()
    }

    fn graph_names(&self) -> Vec<String> {
        let graphs = self.graphs.read().unwrap_or_else(|e| e.into_inner());
        graphs.keys().cloned().collect()
    }
}
