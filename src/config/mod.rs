//! Configuration loading and management

use crate::core::element::{Edge, Vertex};
use crate::core::error::{ApiResult, ConfigError};
use crate::storage::{InMemoryGraph, InMemoryGraphProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Address used when the configuration does not name one
pub const DEFAULT_BIND: &str = "127.0.0.1:8182";

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// A graph seeded into the in-memory backend at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Name used in `/graphs/{name}` routes
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub vertices: Vec<Vertex>,

    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphConfig {
    /// Build the in-memory graph described by this entry
    pub fn build_graph(&self) -> InMemoryGraph {
        let graph = match &self.description {
            Some(description) => InMemoryGraph::with_description(description.clone()),
            None => InMemoryGraph::new(),
        };
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            graph.add_edge(edge.clone());
        }
        graph
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default)]
    pub graphs: Vec<GraphConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            graphs: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ApiResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Graph names must be non-empty and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for graph in &self.graphs {
            if graph.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "graphs.name".to_string(),
                    value: graph.name.clone(),
                    message: "graph name must not be empty".to_string(),
                });
            }
            if !seen.insert(graph.name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "graphs.name".to_string(),
                    value: graph.name.clone(),
                    message: "graph name is declared more than once".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Build a provider holding every configured graph
    pub fn into_provider(self) -> InMemoryGraphProvider {
        let provider = InMemoryGraphProvider::new();
        for graph in &self.graphs {
            tracing::info!(
                graph = %graph.name,
                vertices = graph.vertices.len(),
                edges = graph.edges.len(),
                "registering graph"
            );
            provider.register(graph.name.clone(), graph.build_graph());
        }
        provider
    }
}
