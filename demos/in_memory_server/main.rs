//! Serves a small in-memory graph, optionally loaded from a YAML config
//!
//! ```text
//! cargo run --example in_memory_server -- graphs.yaml
//! curl 'http://127.0.0.1:8182/graphs/tinkergraph/edges?rexster.offset.start=1&rexster.offset.end=3'
//! ```

use graph_rest::prelude::*;
use tracing_subscriber::EnvFilter;

fn tinkergraph() -> InMemoryGraph {
    let graph = InMemoryGraph::with_description("tinkergraph");

    let people = [(1_i64, "marko", 29), (2, "vadas", 27), (4, "josh", 32), (6, "peter", 35)];
    for (id, name, age) in people {
        graph.add_vertex(
            Vertex::new(id)
                .with_property("name", name)
                .with_property("age", age),
        );
    }
    for (id, lang) in [(3_i64, "lop"), (5, "ripple")] {
        graph.add_vertex(
            Vertex::new(id)
                .with_property("name", lang)
                .with_property("lang", "java"),
        );
    }

    let edges = [
        (7_i64, "knows", 1_i64, 2_i64, 0.5),
        (8, "knows", 1, 4, 1.0),
        (9, "created", 1, 3, 0.4),
        (10, "created", 4, 5, 1.0),
        (11, "created", 4, 3, 0.4),
        (12, "created", 6, 3, 0.2),
    ];
    for (id, label, out_v, in_v, weight) in edges {
        graph.add_edge(Edge::new(id, label, out_v, in_v).with_property("weight", weight));
    }

    graph
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (builder, bind) = match std::env::args().nth(1) {
        Some(path) => {
            let config = ServerConfig::from_yaml_file(&path)?;
            let bind = config.bind.clone();
            (ServerBuilder::new().with_config(config), bind)
        }
        None => {
            let provider = InMemoryGraphProvider::new();
            provider.register("tinkergraph", tinkergraph());
            (
                ServerBuilder::new().with_graph_provider(provider),
                graph_rest::config::DEFAULT_BIND.to_string(),
            )
        }
    };

    builder.serve(&bind).await
}
