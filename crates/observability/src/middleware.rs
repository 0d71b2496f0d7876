//! Request-Timing Middleware fuer Axum
//!
//! Misst die Antwortzeit jeder HTTP-Anfrage und protokolliert sie als
//! strukturiertes Log-Event.

use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;

/// Axum-Middleware-Funktion: misst Antwortzeit und loggt strukturiert.
///
/// Verwendung:
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn(timing_middleware))
/// ```
pub async fn timing_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let methode = req.method().clone();
    let pfad = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let dauer = start.elapsed();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::warn!(
            method = %methode,
            path = %pfad,
            status = status,
            duration_ms = dauer.as_millis() as u64,
            "HTTP-Anfrage fehlgeschlagen"
        );
    } else {
        tracing::info!(
            method = %methode,
            path = %pfad,
            status = status,
            duration_ms = dauer.as_millis() as u64,
            "HTTP-Anfrage abgeschlossen"
        );
    }

    response
}
