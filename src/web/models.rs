use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{DistanceTable, SolverKind};
use crate::graph::LabelledGraph;

/// Graph as accepted over HTTP: `{"A": {"B": 4.0}}`
pub type WebGraph = LabelledGraph<String, OrderedFloat<f64>>;

/// Parameters for a distance computation
#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub graph: WebGraph,
    pub start: String,
    /// `linear` (default) or `heap`
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Reject negative weights and dangling edge targets instead of
    /// computing over them
    #[serde(default)]
    pub strict: bool,
}

/// Response containing the distance table
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResponse {
    pub execution_id: Uuid,
    pub algorithm: SolverKind,
    pub start: String,
    pub computed_at: DateTime<Utc>,
    pub execution_time_ms: f64,
    pub node_count: usize,
    pub reachable: usize,
    pub distances: DistanceTable<String, OrderedFloat<f64>>,
}

/// One entry of `GET /api/algorithms`
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmInfo {
    pub id: SolverKind,
    pub name: &'static str,
    pub complexity: &'static str,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
