//! Health check endpoints for liveness and readiness probes.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::data::{self, Resource};
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub resources: BTreeMap<&'static str, String>,
}

/// Liveness probe — always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe — verifies every data file loads and parses.
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    let mut resources = BTreeMap::new();
    let mut healthy = true;

    for resource in Resource::ALL {
        match data::load::<serde_json::Value>(&state.config.data_dir, resource) {
            Ok(items) => {
                resources.insert(resource.name(), format!("ok ({} entries)", items.len()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Data file health check failed");
                resources.insert(resource.name(), format!("error: {e}"));
                healthy = false;
            }
        }
    }

    Json(HealthStatus {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        resources,
    })
}
