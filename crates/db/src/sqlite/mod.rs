//! SQLite-Backend-Implementierungen fuer alle Repository-Traits

pub mod bookmarks;
pub mod pool;
pub mod users;

pub use pool::SqliteDb;

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::DbError;

/// Aktuelle Zeit, auf die gespeicherte Praezision gekuerzt
pub(crate) fn jetzt() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Zeitstempel im Speicherformat (RFC3339, Mikrosekunden, `Z`)
///
/// Feste Praezision, damit die Textsortierung der Zeitsortierung entspricht.
pub(crate) fn zeit_formatieren(zeit: DateTime<Utc>) -> String {
    zeit.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn zeit_parsen(feld: &str, wert: &str) -> Result<DateTime<Utc>, DbError> {
    chrono::DateTime::parse_from_rfc3339(wert)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DbError::intern(format!("Ungueltiges {feld} '{wert}': {e}")))
}
