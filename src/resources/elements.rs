//! List and single-element retrieval for one element kind

use crate::core::element::{Element, ElementKind};
use crate::core::envelope::{ListEnvelope, QueryTimer, SingleEnvelope};
use crate::core::error::{ApiResult, ElementError, StorageError};
use crate::core::graph::{GraphHandle, GraphProvider};
use crate::core::query::{OffsetWindow, RequestParams};
use crate::core::serializer::ElementSerializer;
use serde_json::Value;
use std::sync::Arc;

/// Read-only resource over the vertices or edges of any registered graph
///
/// Constructed per request from shared collaborators; holds no state of its
/// own.
#[derive(Clone)]
pub struct ElementResource {
    kind: ElementKind,
    provider: Arc<dyn GraphProvider>,
    serializer: Arc<dyn ElementSerializer>,
}

impl ElementResource {
    pub fn new(
        kind: ElementKind,
        provider: Arc<dyn GraphProvider>,
        serializer: Arc<dyn ElementSerializer>,
    ) -> Self {
        Self {
            kind,
            provider,
            serializer,
        }
    }

    /// List the elements of `graph_name`, restricted to the requested window
    ///
    /// Only an unknown graph or a backend failure is an error. Malformed,
    /// inverted or out-of-range windows yield an empty or truncated list.
    pub fn list_all(&self, graph_name: &str, params: &RequestParams) -> ApiResult<ListEnvelope> {
        let timer = QueryTimer::start();
        let handle = GraphHandle::resolve(self.provider.as_ref(), graph_name)?;

        let elements = handle
            .graph
            .elements(self.kind)
            .map_err(|e| backend_error(&handle, e))?;

        let window = OffsetWindow::from_params(params);
        tracing::debug!(
            graph = %handle.name,
            kind = %self.kind,
            ?window,
            "listing elements"
        );

        let results = match window {
            None => self.serialize_all(elements)?,
            Some(window) if window.is_empty() => Vec::new(),
            Some(window) => self.serialize_all(window.apply(elements))?,
        };

        tracing::debug!(graph = %handle.name, selected = results.len(), "elements selected");
        Ok(timer.finish_list(results))
    }

    /// Fetch one element by its raw identifier
    pub fn get_by_id(&self, graph_name: &str, element_id: &str) -> ApiResult<SingleEnvelope> {
        let timer = QueryTimer::start();
        let handle = GraphHandle::resolve(self.provider.as_ref(), graph_name)?;

        let element = handle
            .graph
            .element(self.kind, element_id)
            .map_err(|e| backend_error(&handle, e))?
            .ok_or_else(|| ElementError::NotFound {
                kind: self.kind,
                id: element_id.to_string(),
            })?;

        Ok(timer.finish_single(self.serialize(&element)?))
    }

    fn serialize_all(&self, elements: impl Iterator<Item = Element>) -> ApiResult<Vec<Value>> {
        elements.map(|element| self.serialize(&element)).collect()
    }

    fn serialize(&self, element: &Element) -> ApiResult<Value> {
        self.serializer.serialize(element).map_err(|e| {
            StorageError::Serialization {
                kind: element.kind(),
                id: element.id().to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

fn backend_error(handle: &GraphHandle, err: anyhow::Error) -> StorageError {
    StorageError::Backend {
        graph: handle.name.clone(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::{Edge, Vertex};
    use crate::core::error::{ApiError, GraphError};
    use crate::core::query::{OFFSET_END, OFFSET_START};
    use crate::core::serializer::JsonElementSerializer;
    use crate::storage::{InMemoryGraph, InMemoryGraphProvider};

    fn resource(kind: ElementKind, edges: usize) -> ElementResource {
        let graph = InMemoryGraph::new();
        graph.add_vertex(Vertex::new(0_i64));
        for ix in 0..edges {
            graph.add_edge(Edge::new(ix, format!("label-{}", ix), 0_i64, 0_i64));
        }
        let provider = InMemoryGraphProvider::new();
        provider.register("graph", graph);

        ElementResource::new(kind, Arc::new(provider), Arc::new(JsonElementSerializer))
    }

    #[test]
    fn test_list_without_window() {
        let envelope = resource(ElementKind::Edge, 12)
            .list_all("graph", &RequestParams::new())
            .unwrap();
        assert_eq!(envelope.total_size, 12);
        assert_eq!(envelope.results.len(), 12);
    }

    #[test]
    fn test_list_vertices_uses_kind() {
        let envelope = resource(ElementKind::Vertex, 12)
            .list_all("graph", &RequestParams::new())
            .unwrap();
        assert_eq!(envelope.total_size, 1);
        assert_eq!(envelope.results[0]["_type"], "vertex");
    }

    #[test]
    fn test_list_start_only() {
        let params = RequestParams::from_pairs([(OFFSET_START, "8")]);
        let envelope = resource(ElementKind::Edge, 12)
            .list_all("graph", &params)
            .unwrap();
        assert_eq!(envelope.total_size, 4);
        assert_eq!(envelope.results[0]["_id"], 8);
    }

    #[test]
    fn test_list_end_only() {
        let params = RequestParams::from_pairs([(OFFSET_END, "3")]);
        let envelope = resource(ElementKind::Edge, 12)
            .list_all("graph", &params)
            .unwrap();
        assert_eq!(envelope.total_size, 3);
        assert_eq!(envelope.results[2]["_id"], 2);
    }

    #[test]
    fn test_list_unknown_graph() {
        let err = resource(ElementKind::Edge, 1)
            .list_all("nope", &RequestParams::new())
            .unwrap_err();
        assert!(matches!(err, ApiError::Graph(GraphError::NotFound { .. })));
    }

    #[test]
    fn test_get_by_id() {
        let resource = resource(ElementKind::Edge, 3);

        let envelope = resource.get_by_id("graph", "2").unwrap();
        assert_eq!(envelope.results["_label"], "label-2");

        let err = resource.get_by_id("graph", "99").unwrap_err();
        assert!(matches!(
            err,
            ApiError::Element(ElementError::NotFound { kind: ElementKind::Edge, .. })
        ));
    }
}
