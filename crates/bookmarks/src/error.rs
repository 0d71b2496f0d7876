//! Fehlertypen fuer das Bookmarks-Crate

use thiserror::Error;

/// Lesezeichen-Fehlertypen
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Lesezeichen nicht gefunden: {0}")]
    NichtGefunden(String),

    #[error("Keine Berechtigung: {0}")]
    KeineBerechtigung(String),

    #[error("Datenbank-Fehler: {0}")]
    DatenbankFehler(#[from] merkliste_db::DbError),
}

pub type BookmarkResult<T> = Result<T, BookmarkError>;
