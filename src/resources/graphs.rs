//! Graph discovery: which graphs are registered and what they are

use crate::core::envelope::QueryTimer;
use crate::core::error::ApiResult;
use crate::core::graph::{GraphHandle, GraphProvider};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name reported by the root resource
pub const SERVER_NAME: &str = "graph-rest";

/// Crate version reported alongside graph metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response for `GET /graphs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphList {
    pub name: String,
    pub version: String,
    pub graphs: Vec<String>,
    pub query_time: f64,
}

/// Response for `GET /graphs/{graph_name}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphInfo {
    pub name: String,
    pub graph: String,
    pub version: String,
    pub up_time: String,
    pub query_time: f64,
}

/// List every registered graph, sorted by name
pub fn list_graphs(provider: &dyn GraphProvider) -> GraphList {
    let timer = QueryTimer::start();
    let mut graphs = provider.graph_names();
    graphs.sort();

    GraphList {
        name: SERVER_NAME.to_string(),
        version: VERSION.to_string(),
        graphs,
        query_time: timer.elapsed_seconds(),
    }
}

/// Describe one graph
pub fn describe_graph(
    provider: &dyn GraphProvider,
    graph_name: &str,
    started_at: DateTime<Utc>,
) -> ApiResult<GraphInfo> {
    let timer = QueryTimer::start();
    let handle = GraphHandle::resolve(provider, graph_name)?;

    Ok(GraphInfo {
        graph: handle.graph.description(),
        name: handle.name,
        version: VERSION.to_string(),
        up_time: format_up_time(Utc::now() - started_at),
        query_time: timer.elapsed_seconds(),
    })
}

/// Format an uptime as `0[d]:01[h]:02[m]:03[s]`
pub fn format_up_time(up_time: chrono::Duration) -> String {
    let total = up_time.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!(
        "{}[d]:{:02}[h]:{:02}[m]:{:02}[s]",
        days, hours, minutes, seconds
    )
}
