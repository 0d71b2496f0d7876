//! Health-Status fuer Merkliste
//!
//! Der Endpunkt selbst lebt in der API; hier stehen nur die Status-Typen.
//! Auch `degraded` wird mit 200 ausgeliefert.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Status des Health-Checks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

/// Antwort des Health-Check-Endpunkts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub db_connected: bool,
}

impl HealthResponse {
    /// Baut die Antwort aus Startzeitpunkt und Ergebnis des DB-Pings
    pub fn erstellen(gestartet: Instant, db_connected: bool) -> Self {
        let status = if db_connected {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: gestartet.elapsed().as_secs(),
            db_connected,
        }
    }
}
