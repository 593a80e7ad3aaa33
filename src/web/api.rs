use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::SolverKind;
use crate::graph::validate::check_preconditions;
use crate::graph::Graph;
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/algorithms", get(list_algorithms))
        .route("/api/distances", post(compute_distances))
}

/// Compute the distance table for a posted graph
pub async fn compute_distances(
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceResponse>, ApiError> {
    let kind = match request.algorithm.as_deref() {
        Some(name) => name
            .parse::<SolverKind>()
            .map_err(|err| api_error(StatusCode::BAD_REQUEST, &err))?,
        None => SolverKind::default(),
    };

    if request.strict {
        check_preconditions(&request.graph)
            .map_err(|err| api_error(StatusCode::UNPROCESSABLE_ENTITY, &err))?;
    }

    let start_time = Instant::now();
    let distances = kind.run(&request.graph, &request.start);
    let execution_time = start_time.elapsed();

    info!(
        "{} from {:?} over {} nodes in {:?}",
        kind,
        request.start,
        request.graph.node_count(),
        execution_time
    );

    Ok(Json(DistanceResponse {
        execution_id: Uuid::new_v4(),
        algorithm: kind,
        start: request.start,
        computed_at: Utc::now(),
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        node_count: request.graph.node_count(),
        reachable: distances.reachable_count(),
        distances,
    }))
}

/// List the available solvers
pub async fn list_algorithms() -> Json<Vec<AlgorithmInfo>> {
    Json(
        SolverKind::ALL
            .iter()
            .map(|&kind| AlgorithmInfo {
                id: kind,
                name: kind.name(),
                complexity: kind.complexity(),
            })
            .collect(),
    )
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn error_code(err: &Error) -> &'static str {
    match err {
        Error::NegativeWeight { .. } => "negative_weight",
        Error::DanglingTarget { .. } => "dangling_target",
        Error::UnknownAlgorithm(_) => "invalid_algorithm",
        Error::Io(_) => "io_error",
        Error::Json(_) => "invalid_json",
    }
}

fn api_error(status: StatusCode, err: &Error) -> ApiError {
    warn!("rejecting request: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: error_code(err).to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}
