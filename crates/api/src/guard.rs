//! Sitzungs-Guard fuer geschuetzte Routen
//!
//! Prueft den Bearer-Token aus dem `Authorization`-Header und legt die
//! Identitaet des Aufrufers als Request-Extension ab. Ohne gueltigen Token
//! erreicht die Anfrage keinen Handler.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use merkliste_auth::AuthError;
use merkliste_core::UserId;

use crate::error::ApiFehler;
use crate::state::AppState;

/// Identitaet des angemeldeten Aufrufers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identitaet {
    pub user_id: UserId,
    pub email: String,
}

/// Extrahiert Bearer-Token aus Authorization-Header
///
/// Leere Tokens zaehlen als fehlend.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Axum-Middleware: Token pruefen, Benutzer nachladen, Identitaet einsetzen
pub async fn sitzung_pruefen(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiFehler> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| ApiFehler::NichtAngemeldet("Authorization-Header fehlt".into()))?;

    let benutzer = state.auth.sitzung_aufloesen(token).await.map_err(|e| match e {
        AuthError::TokenUngueltig | AuthError::TokenAbgelaufen => {
            tracing::debug!(fehler = %e, "Sitzungs-Token abgelehnt");
            ApiFehler::NichtAngemeldet("Ungueltiger oder abgelaufener Token".into())
        }
        AuthError::BenutzerNichtGefunden(_) => {
            tracing::debug!("Token fuer nicht mehr existierenden Benutzer");
            ApiFehler::NichtAngemeldet("Ungueltiger oder abgelaufener Token".into())
        }
        e => e.into(),
    })?;

    req.extensions_mut().insert(Identitaet {
        user_id: benutzer.id,
        email: benutzer.email,
    });

    Ok(next.run(req).await)
}
