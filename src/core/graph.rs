//! Capability traits for the graph storage collaborator
//!
//! The API never talks to a storage engine directly. A [`GraphProvider`]
//! resolves graph names, and each resolved [`Graph`] hands out elements.
//! Both are injected at construction, so tests can substitute in-memory fakes.

use crate::core::element::{Element, ElementKind};
use crate::core::error::{ApiResult, GraphError};
use anyhow::Result;
use std::sync::Arc;

/// Lazy sequence of elements in backend iteration order
pub type ElementIter<'a> = Box<dyn Iterator<Item = Element> + Send + 'a>;

/// Read access to the elements of one graph
///
/// Iteration order is whatever the backend produces; it is not required to be
/// stable across calls. Implementations must be safe for concurrent readers.
pub trait Graph: Send + Sync {
    /// Iterate over every element of the given kind
    fn elements(&self, kind: ElementKind) -> Result<ElementIter<'_>>;

    /// Look up a single element by its raw identifier
    fn element(&self, kind: ElementKind, id: &str) -> Result<Option<Element>>;

    /// Human-readable description of the backend
    fn description(&self) -> String {
        "graph".to_string()
    }
}

/// Registry of named graphs
pub trait GraphProvider: Send + Sync {
    /// Resolve a graph by its registered name
    fn graph(&self, name: &str) -> Option<Arc<dyn Graph>>;

    /// Names of all registered graphs
    fn graph_names(&self) -> Vec<String>;
}

/// A graph resolved for the duration of one request
#[derive(Clone)]
pub struct GraphHandle {
    pub name: String,
    pub graph: Arc<dyn Graph>,
}

impl GraphHandle {
    /// Resolve `name` against the provider, failing with `GraphError::NotFound`
    pub fn resolve(provider: &dyn GraphProvider, name: &str) -> ApiResult<Self> {
        let graph = provider.graph(name).ok_or_else(|| GraphError::NotFound {
            name: name.to_string(),
        })?;

        Ok(Self {
            name: name.to_string(),
            graph,
        })
    }
}

impl std::fmt::Debug for GraphHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;

    struct EmptyGraph;

    impl Graph for EmptyGraph {
        fn elements(&self, _kind: ElementKind) -> Result<ElementIter<'_>> {
            Ok(Box::new(std::iter::empty()))
        }

        fn element(&self, _kind: ElementKind, _id: &str) -> Result<Option<Element>> {
            Ok(None)
        }
    }

    struct SingleGraphProvider;

    impl GraphProvider for SingleGraphProvider {
        fn graph(&self, name: &str) -> Option<Arc<dyn Graph>> {
            (name == "only").then(|| Arc::new(EmptyGraph) as Arc<dyn Graph>)
        }

        fn graph_names(&self) -> Vec<String> {
            vec!["only".to_string()]
        }
    }

    #[test]
    fn test_resolve_registered_graph() {
        let handle = GraphHandle::resolve(&SingleGraphProvider, "only").unwrap();
        assert_eq!(handle.name, "only");
        assert_eq!(handle.graph.description(), "graph");
    }

    #[test]
    fn test_resolve_unknown_graph() {
        let err = GraphHandle::resolve(&SingleGraphProvider, "missing").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Graph(GraphError::NotFound { ref name }) if name == "missing"
        ));
    }
}
