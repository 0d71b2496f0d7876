//! GET /health – Health-Check-Endpunkt

use axum::{extract::State, Json};
use merkliste_observability::HealthResponse;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_connected = state.db.ping().await;
    Json(HealthResponse::erstellen(state.gestartet, db_connected))
}
