//! Fehlertypen fuer den Auth-Service

use thiserror::Error;

/// Alle moeglichen Fehler im Auth-Service
#[derive(Debug, Error)]
pub enum AuthError {
    // --- Passwort ---
    #[error("Passwort-Hashing fehlgeschlagen: {0}")]
    PasswortHashing(String),

    // --- Authentifizierung ---
    /// Unbekannte E-Mail und falsches Passwort liefern denselben Fehler
    #[error("E-Mail oder Passwort falsch")]
    UngueltigeAnmeldedaten,

    // --- Sitzungs-Token ---
    #[error("Sitzungs-Token ungueltig")]
    TokenUngueltig,

    #[error("Sitzungs-Token abgelaufen")]
    TokenAbgelaufen,

    // --- Benutzerverwaltung ---
    #[error("E-Mail bereits vergeben: {0}")]
    EmailVergeben(String),

    #[error("Benutzer nicht gefunden: {0}")]
    BenutzerNichtGefunden(String),

    // --- Datenbank ---
    #[error("Datenbankfehler: {0}")]
    Datenbank(#[from] merkliste_db::DbError),

    // --- Intern ---
    #[error("Interner Fehler: {0}")]
    Intern(String),
}

impl AuthError {
    pub fn intern(msg: impl Into<String>) -> Self {
        Self::Intern(msg.into())
    }
}

/// Result-Alias fuer den Auth-Service
pub type AuthResult<T> = Result<T, AuthError>;
