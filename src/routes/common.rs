//! Operational routes mounted outside the versioned API: liveness, readiness
//! against the store, and the package version.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct ProbeBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn liveness() -> Json<ProbeBody> {
    Json(ProbeBody {
        status: "ok",
        database: None,
    })
}

/// 503 while the store cannot answer `SELECT 1`.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ProbeBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ProbeBody {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeBody {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn package_version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .route("/version", get(package_version))
        .with_state(state)
}
