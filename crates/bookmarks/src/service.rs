//! BookmarkService – Lesezeichen eines Benutzers verwalten

use std::sync::Arc;

use merkliste_core::{BookmarkId, UserId};
use merkliste_db::{
    models::{LesezeichenRecord, LesezeichenUpdate, NeuesLesezeichen},
    BookmarkRepository,
};

use crate::{
    error::{BookmarkError, BookmarkResult},
    types::{Lesezeichen, LesezeichenAenderung, NeuesLesezeichenDaten},
};

/// BookmarkService verwaltet die Lesezeichen aller Benutzer
///
/// Lesen unterscheidet nicht zwischen "gibt es nicht" und "gehoert jemand
/// anderem". Aendern und Loeschen melden fremde Lesezeichen dagegen als
/// `KeineBerechtigung`.
pub struct BookmarkService<R: BookmarkRepository> {
    repo: Arc<R>,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    /// Erstellt einen neuen BookmarkService
    pub fn neu(repo: Arc<R>) -> Arc<Self> {
        Arc::new(Self { repo })
    }

    /// Alle Lesezeichen des Benutzers, aelteste zuerst
    pub async fn alle_laden(&self, user_id: UserId) -> BookmarkResult<Vec<Lesezeichen>> {
        let records = self.repo.list_for_owner(user_id).await?;
        Ok(records.into_iter().map(Lesezeichen::from).collect())
    }

    /// Einzelnes Lesezeichen laden
    pub async fn laden(
        &self,
        user_id: UserId,
        bookmark_id: BookmarkId,
    ) -> BookmarkResult<Lesezeichen> {
        self.repo
            .get_for_owner(bookmark_id, user_id)
            .await?
            .map(Lesezeichen::from)
            .ok_or_else(|| BookmarkError::NichtGefunden(bookmark_id.to_string()))
    }

    /// Neues Lesezeichen fuer den Benutzer anlegen
    pub async fn erstellen(
        &self,
        user_id: UserId,
        daten: NeuesLesezeichenDaten,
    ) -> BookmarkResult<Lesezeichen> {
        let record = self
            .repo
            .create(NeuesLesezeichen {
                user_id,
                title: &daten.title,
                link: &daten.link,
                description: daten.description.as_deref(),
            })
            .await?;

        tracing::debug!(user_id = %user_id, bookmark_id = %record.id, "Lesezeichen angelegt");

        Ok(record.into())
    }

    /// Lesezeichen bearbeiten (nur eigene)
    pub async fn bearbeiten(
        &self,
        user_id: UserId,
        bookmark_id: BookmarkId,
        aenderung: LesezeichenAenderung,
    ) -> BookmarkResult<Lesezeichen> {
        self.eigenes_laden(user_id, bookmark_id).await?;

        let record = self
            .repo
            .update(
                bookmark_id,
                LesezeichenUpdate {
                    title: aenderung.title,
                    link: aenderung.link,
                    description: aenderung.description,
                },
            )
            .await
            .map_err(|e| match e {
                merkliste_db::DbError::NichtGefunden(_) => {
                    BookmarkError::NichtGefunden(bookmark_id.to_string())
                }
                e => e.into(),
            })?;

        Ok(record.into())
    }

    /// Lesezeichen loeschen (nur eigene)
    pub async fn loeschen(&self, user_id: UserId, bookmark_id: BookmarkId) -> BookmarkResult<()> {
        self.eigenes_laden(user_id, bookmark_id).await?;

        // Zwischen Pruefung und Loeschen kann ein paralleler Request zuvorkommen
        if !self.repo.delete(bookmark_id).await? {
            return Err(BookmarkError::NichtGefunden(bookmark_id.to_string()));
        }

        tracing::debug!(user_id = %user_id, bookmark_id = %bookmark_id, "Lesezeichen geloescht");

        Ok(())
    }

    async fn eigenes_laden(
        &self,
        user_id: UserId,
        bookmark_id: BookmarkId,
    ) -> BookmarkResult<LesezeichenRecord> {
        let existing = self
            .repo
            .get_by_id(bookmark_id)
            .await?
            .ok_or_else(|| BookmarkError::NichtGefunden(bookmark_id.to_string()))?;

        if existing.user_id != user_id {
            tracing::warn!(
                user_id = %user_id,
                bookmark_id = %bookmark_id,
                "Zugriff auf fremdes Lesezeichen verweigert"
            );
            return Err(BookmarkError::KeineBerechtigung(
                "Nur eigene Lesezeichen duerfen geaendert werden".into(),
            ));
        }

        Ok(existing)
    }
}
