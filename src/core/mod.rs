//! Core module containing the element model, capability traits and the
//! building blocks shared by every resource

pub mod element;
pub mod envelope;
pub mod error;
pub mod graph;
pub mod query;
pub mod serializer;

pub use element::{Edge, Element, ElementId, ElementKind, Properties, Vertex};
pub use envelope::{ListEnvelope, QueryTimer, SingleEnvelope};
pub use error::{ApiError, ApiResult, ConfigError, ElementError, GraphError, StorageError};
pub use graph::{ElementIter, Graph, GraphHandle, GraphProvider};
pub use query::{OffsetWindow, RequestParams};
pub use serializer::{ElementSerializer, JsonElementSerializer};
