//! HTTP API for the Guard Payroll engine.
//!
//! This module exposes a minimal REST API around the engine using the
//! [`axum`](https://crates.io/crates/axum) framework.  Clients post the
//! punch events they hold together with a reporting window and receive
//! the payroll summaries as JSON.  The engine stays a pure function; the
//! API only parses the window and applies the optional guard filter.

use crate::engine::calculate_payroll_with;
use crate::error::PayrollError;
use crate::models::{PayrollRequest, PayrollSummary, StatusRequest};
use crate::period::request_window;
use crate::rules::PayrollRules;
use crate::status::duty_status;
use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

/// Application state shared across requests.
pub struct AppState {
    pub rules: PayrollRules,
}

/// Build the API router around the given rules.
pub fn build_router(rules: PayrollRules) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState { rules });
    let router = Router::new()
        .route("/api/payroll", post(payroll_handler))
        .route("/api/status", post(status_handler))
        .with_state(state.clone());
    (router, state)
}

/// Resolve the window, run the engine and apply the guard filter.
pub fn run_request(
    request: &PayrollRequest,
    rules: &PayrollRules,
) -> Result<Vec<PayrollSummary>, PayrollError> {
    let (start, end) = request_window(request)?;
    let mut summaries = calculate_payroll_with(&request.events, start, end, rules);
    if let Some(guard) = &request.guard {
        summaries.retain(|s| &s.guard_name == guard);
    }
    Ok(summaries)
}

/// Handler for POST /api/payroll
async fn payroll_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<PayrollRequest>,
) -> impl IntoResponse {
    match run_request(&request, &app_state.rules) {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(err) => {
            warn!(error = %err, "rejected payroll request");
            let body = Json(serde_json::json!({"error": err.to_string()}));
            (StatusCode::BAD_REQUEST, body).into_response()
        }
    }
}

/// Handler for POST /api/status
async fn status_handler(Json(request): Json<StatusRequest>) -> impl IntoResponse {
    let now = request.now.unwrap_or_else(Utc::now);
    let status = duty_status(&request.events, now);
    Json(serde_json::json!({"status": status, "label": status.label()}))
}

/// Launch the API server.  Binds to `addr` and blocks until the server
/// terminates.
pub async fn serve(addr: &str, rules: PayrollRules) -> Result<()> {
    let (router, _state) = build_router(rules);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
