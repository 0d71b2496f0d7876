//! Repository-Trait-Definitionen
//!
//! Das Repository-Pattern entkoppelt die Geschaeftslogik von der konkreten
//! Datenbank-Implementierung. Services sind generisch ueber diese Traits,
//! Tests koennen eigene In-Memory-Implementierungen einsetzen.

use merkliste_core::{BookmarkId, UserId};

use crate::error::DbError;
use crate::models::{
    BenutzerRecord, BenutzerUpdate, LesezeichenRecord, LesezeichenUpdate, NeuerBenutzer,
    NeuesLesezeichen,
};

/// Result-Alias fuer Datenbankoperationen
pub type DbResult<T> = Result<T, DbError>;

/// Konfiguration fuer die Datenbankverbindung
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Verbindungs-URL (z.B. "sqlite://merkliste.db")
    pub url: String,
    /// Maximale Anzahl gleichzeitiger Verbindungen im Pool
    pub max_verbindungen: u32,
    /// Ob WAL-Modus bei SQLite aktiviert werden soll
    pub sqlite_wal: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://merkliste.db".into(),
            max_verbindungen: 5,
            sqlite_wal: true,
        }
    }
}

/// Repository fuer Benutzer-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait UserRepository: Send + Sync {
    /// Legt einen neuen Benutzer an
    ///
    /// Gibt `DbError::Eindeutigkeit` zurueck wenn die E-Mail bereits existiert.
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord>;

    async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>>;

    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>>;

    /// Aendert nur die gesetzten Felder
    async fn update(&self, id: UserId, data: BenutzerUpdate) -> DbResult<BenutzerRecord>;
}

/// Repository fuer Lesezeichen-Datenzugriffe
#[allow(async_fn_in_trait)]
pub trait BookmarkRepository: Send + Sync {
    async fn create(&self, data: NeuesLesezeichen<'_>) -> DbResult<LesezeichenRecord>;

    /// Laedt ein Lesezeichen ohne Besitzerfilter
    async fn get_by_id(&self, id: BookmarkId) -> DbResult<Option<LesezeichenRecord>>;

    /// Laedt ein Lesezeichen nur wenn es `owner` gehoert
    async fn get_for_owner(
        &self,
        id: BookmarkId,
        owner: UserId,
    ) -> DbResult<Option<LesezeichenRecord>>;

    /// Alle Lesezeichen eines Besitzers, aelteste zuerst
    async fn list_for_owner(&self, owner: UserId) -> DbResult<Vec<LesezeichenRecord>>;

    async fn update(&self, id: BookmarkId, data: LesezeichenUpdate) -> DbResult<LesezeichenRecord>;

    /// Loescht endgueltig; gibt `false` zurueck wenn nichts geloescht wurde
    async fn delete(&self, id: BookmarkId) -> DbResult<bool>;
}
