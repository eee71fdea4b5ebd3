//! Graph elements as seen by the read API
//!
//! Elements are opaque to the API layer apart from their identifier, their
//! properties and, for edges, the label and the two incident vertex ids.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Insertion-ordered property bag
pub type Properties = IndexMap<String, Value>;

/// Backend-defined element identifier
///
/// Serialized untagged: integer ids become JSON numbers, everything else a
/// JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementId {
    Int(i64),
    Str(String),
}

impl ElementId {
    /// Whether this id matches the raw identifier taken from a request path
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ElementId::Int(n) => raw == n.to_string(),
            ElementId::Str(s) => s == raw,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Int(n) => write!(f, "{}", n),
            ElementId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ElementId {
    fn from(value: i64) -> Self {
        ElementId::Int(value)
    }
}

impl From<usize> for ElementId {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(ElementId::Int)
            .unwrap_or_else(|_| ElementId::Str(value.to_string()))
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        ElementId::Str(value.to_string())
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        ElementId::Str(value)
    }
}

/// The two kinds of element a graph exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl ElementKind {
    /// Singular name, also used as the `_type` value in serialized elements
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Vertex => "vertex",
            ElementKind::Edge => "edge",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A graph vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: ElementId,

    #[serde(default)]
    pub properties: Properties,
}

impl Vertex {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            properties: Properties::new(),
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A directed, labelled graph edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: ElementId,

    pub label: String,

    /// Tail vertex (the edge goes out of it)
    pub out_vertex: ElementId,

    /// Head vertex (the edge goes into it)
    pub in_vertex: ElementId,

    #[serde(default)]
    pub properties: Properties,
}

impl Edge {
    pub fn new(
        id: impl Into<ElementId>,
        label: impl Into<String>,
        out_vertex: impl Into<ElementId>,
        in_vertex: impl Into<ElementId>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            out_vertex: out_vertex.into(),
            in_vertex: in_vertex.into(),
            properties: Properties::new(),
        }
    }

    /// Builder-style property setter
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A vertex or an edge
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Vertex(Vertex),
    Edge(Edge),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Vertex(_) => ElementKind::Vertex,
            Element::Edge(_) => ElementKind::Edge,
        }
    }

    pub fn id(&self) -> &ElementId {
        match self {
            Element::Vertex(v) => &v.id,
            Element::Edge(e) => &e.id,
        }
    }

    pub fn properties(&self) -> &Properties {
        match self {
            Element::Vertex(v) => &v.properties,
            Element::Edge(e) => &e.properties,
        }
    }
}

impl From<Vertex> for Element {
    fn from(vertex: Vertex) -> Self {
        Element::Vertex(vertex)
    }
}

impl From<Edge> for Element {
    fn from(edge: Edge) -> Self {
        Element::Edge(edge)
    }
}
