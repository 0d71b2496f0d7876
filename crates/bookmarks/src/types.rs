//! Oeffentliche Typen fuer Lesezeichen

use chrono::{DateTime, Utc};
use merkliste_core::{BookmarkId, UserId};
use merkliste_db::models::LesezeichenRecord;
use serde::Serialize;

/// Ein Lesezeichen wie es die API ausliefert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesezeichen {
    pub id: BookmarkId,
    pub user_id: UserId,
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LesezeichenRecord> for Lesezeichen {
    fn from(r: LesezeichenRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            link: r.link,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Felder fuer ein neues Lesezeichen
#[derive(Debug, Clone)]
pub struct NeuesLesezeichenDaten {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

/// Teilweise Aenderung; `None` laesst das Feld unveraendert,
/// `description: Some(None)` entfernt die Beschreibung
#[derive(Debug, Clone, Default)]
pub struct LesezeichenAenderung {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<Option<String>>,
}
