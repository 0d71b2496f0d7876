//! Fehlertypen und Fehlerantworten der REST-API
//!
//! Jeder Fehler wird als `{"error": {"code": <status>, "message": "..."}}`
//! ausgeliefert. Interne Fehler werden mit Details geloggt, nach aussen geht
//! nur eine generische Meldung.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use merkliste_auth::AuthError;
use merkliste_bookmarks::BookmarkError;
use serde_json::json;
use thiserror::Error;

/// API-Fehler mit fester HTTP-Zuordnung
#[derive(Debug, Error)]
pub enum ApiFehler {
    #[error("{0}")]
    Validierung(String),

    #[error("{0}")]
    NichtAngemeldet(String),

    #[error("{0}")]
    Verboten(String),

    #[error("{0}")]
    NichtGefunden(String),

    #[error("Interner Fehler: {0}")]
    Intern(String),
}

pub type ApiResult<T> = Result<T, ApiFehler>;

impl ApiFehler {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validierung(_) => StatusCode::BAD_REQUEST,
            Self::NichtAngemeldet(_) => StatusCode::UNAUTHORIZED,
            Self::Verboten(_) => StatusCode::FORBIDDEN,
            Self::NichtGefunden(_) => StatusCode::NOT_FOUND,
            Self::Intern(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Fehlerantwort fuer REST-API
pub fn fehler_antwort(status: StatusCode, nachricht: &str) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": nachricht
            }
        })),
    )
        .into_response()
}

impl IntoResponse for ApiFehler {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Intern(detail) => {
                tracing::error!(fehler = %detail, "Interner Fehler bei der Anfragebearbeitung");
                fehler_antwort(status, "Interner Serverfehler")
            }
            andere => fehler_antwort(status, &andere.to_string()),
        }
    }
}

impl From<AuthError> for ApiFehler {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::UngueltigeAnmeldedaten => Self::Verboten(e.to_string()),
            AuthError::EmailVergeben(_) => Self::Verboten("E-Mail bereits vergeben".into()),
            AuthError::TokenUngueltig | AuthError::TokenAbgelaufen => {
                Self::NichtAngemeldet(e.to_string())
            }
            AuthError::BenutzerNichtGefunden(_) => Self::NichtGefunden(e.to_string()),
            AuthError::PasswortHashing(_) | AuthError::Datenbank(_) | AuthError::Intern(_) => {
                Self::Intern(e.to_string())
            }
        }
    }
}

impl From<BookmarkError> for ApiFehler {
    fn from(e: BookmarkError) -> Self {
        match e {
            BookmarkError::NichtGefunden(_) => Self::NichtGefunden(e.to_string()),
            BookmarkError::KeineBerechtigung(_) => Self::Verboten(e.to_string()),
            BookmarkError::DatenbankFehler(_) => Self::Intern(e.to_string()),
        }
    }
}
