//! Oeffentliche Typen des Auth-Service
//!
//! `Benutzer` ist die nach aussen sichtbare Sicht auf einen Benutzer-Datensatz.
//! Der Passwort-Hash wird bei der Konvertierung verworfen.

use chrono::{DateTime, Utc};
use merkliste_core::UserId;
use merkliste_db::models::BenutzerRecord;
use serde::Serialize;

use crate::token::SitzungsToken;

/// Benutzer ohne Passwort-Hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Benutzer {
    pub id: UserId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BenutzerRecord> for Benutzer {
    fn from(r: BenutzerRecord) -> Self {
        Self {
            id: r.id,
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Ergebnis von Registrierung und Login
#[derive(Debug, Clone)]
pub struct Anmeldung {
    pub benutzer: Benutzer,
    pub token: SitzungsToken,
}

/// Teilweise Profilaenderung; `None` laesst das Feld unveraendert
#[derive(Debug, Clone, Default)]
pub struct ProfilAenderung {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
