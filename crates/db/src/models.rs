//! Datenbankmodelle fuer Merkliste
//!
//! Diese Typen repraesentieren Datensaetze aus der Datenbank.
//! Sie sind von den oeffentlichen API-Typen getrennt: `BenutzerRecord`
//! enthaelt den Passwort-Hash und verlaesst die Service-Schicht nie.

use chrono::{DateTime, Utc};
use merkliste_core::{BookmarkId, UserId};

// ---------------------------------------------------------------------------
// Benutzer
// ---------------------------------------------------------------------------

/// Benutzer-Datensatz aus der Datenbank
#[derive(Debug, Clone, PartialEq)]
pub struct BenutzerRecord {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Benutzers
#[derive(Debug, Clone)]
pub struct NeuerBenutzer<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// Daten zum Aktualisieren eines Benutzers (nur gesetzte Felder werden geaendert)
#[derive(Debug, Clone, Default)]
pub struct BenutzerUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl BenutzerUpdate {
    /// Gibt `true` zurueck wenn kein Feld gesetzt ist
    pub fn ist_leer(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
    }
}

// ---------------------------------------------------------------------------
// Lesezeichen
// ---------------------------------------------------------------------------

/// Lesezeichen-Datensatz aus der Datenbank
#[derive(Debug, Clone, PartialEq)]
pub struct LesezeichenRecord {
    pub id: BookmarkId,
    /// Besitzer; wird beim Anlegen gesetzt und nie mehr geaendert
    pub user_id: UserId,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Daten zum Erstellen eines neuen Lesezeichens
#[derive(Debug, Clone)]
pub struct NeuesLesezeichen<'a> {
    pub user_id: UserId,
    pub title: &'a str,
    pub link: &'a str,
    pub description: Option<&'a str>,
}

/// Daten zum Aktualisieren eines Lesezeichens
///
/// Der Besitzer ist absichtlich nicht enthalten. `description: Some(None)`
/// loescht die Beschreibung.
#[derive(Debug, Clone, Default)]
pub struct LesezeichenUpdate {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<Option<String>>,
}

impl LesezeichenUpdate {
    /// Gibt `true` zurueck wenn kein Feld gesetzt ist
    pub fn ist_leer(&self) -> bool {
        self.title.is_none() && self.link.is_none() && self.description.is_none()
    }
}
