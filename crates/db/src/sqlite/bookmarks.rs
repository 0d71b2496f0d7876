//! SQLite-Implementierung des BookmarkRepository

use merkliste_core::{BookmarkId, UserId};

use crate::error::DbError;
use crate::models::{LesezeichenRecord, LesezeichenUpdate, NeuesLesezeichen};
use crate::repository::{BookmarkRepository, DbResult};
use crate::sqlite::pool::SqliteDb;
use crate::sqlite::{jetzt, zeit_formatieren, zeit_parsen};

const SPALTEN: &str = "id, user_id, title, link, description, created_at, updated_at";

impl BookmarkRepository for SqliteDb {
    async fn create(&self, data: NeuesLesezeichen<'_>) -> DbResult<LesezeichenRecord> {
        let id = BookmarkId::new();
        let now = jetzt();
        let now_str = zeit_formatieren(now);

        sqlx::query(
            "INSERT INTO bookmarks (id, user_id, title, link, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(data.user_id.to_string())
        .bind(data.title)
        .bind(data.link)
        .bind(data.description)
        .bind(&now_str)
        .bind(&now_str)
        .execute(&self.pool)
        .await?;

        Ok(LesezeichenRecord {
            id,
            user_id: data.user_id,
            title: data.title.to_string(),
            link: data.link.to_string(),
            description: data.description.map(str::to_string),
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_id(&self, id: BookmarkId) -> DbResult<Option<LesezeichenRecord>> {
        let sql = format!("SELECT {SPALTEN} FROM bookmarks WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_lesezeichen(&r)).transpose()
    }

    async fn get_for_owner(
        &self,
        id: BookmarkId,
        owner: UserId,
    ) -> DbResult<Option<LesezeichenRecord>> {
        let sql = format!("SELECT {SPALTEN} FROM bookmarks WHERE id = ? AND user_id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .bind(owner.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_lesezeichen(&r)).transpose()
    }

    async fn list_for_owner(&self, owner: UserId) -> DbResult<Vec<LesezeichenRecord>> {
        let sql = format!(
            "SELECT {SPALTEN} FROM bookmarks WHERE user_id = ? ORDER BY created_at, id"
        );
        let rows = sqlx::query(&sql)
            .bind(owner.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_lesezeichen).collect()
    }

    async fn update(&self, id: BookmarkId, data: LesezeichenUpdate) -> DbResult<LesezeichenRecord> {
        if data.ist_leer() {
            return self
                .get_by_id(id)
                .await?
                .ok_or_else(|| DbError::nicht_gefunden(format!("Lesezeichen {id}")));
        }

        let mut sets: Vec<&str> = Vec::new();
        if data.title.is_some() {
            sets.push("title = ?");
        }
        if data.link.is_some() {
            sets.push("link = ?");
        }
        if data.description.is_some() {
            sets.push("description = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE bookmarks SET {} WHERE id = ?", sets.join(", "));
        let mut q = sqlx::query(&sql);

        if let Some(ref v) = data.title {
            q = q.bind(v);
        }
        if let Some(ref v) = data.link {
            q = q.bind(v);
        }
        if let Some(ref v) = data.description {
            q = q.bind(v);
        }
        q = q.bind(zeit_formatieren(jetzt()));
        q = q.bind(id.to_string());

        let affected = q.execute(&self.pool).await?.rows_affected();
        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("Lesezeichen {id}")));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("Lesezeichen nach Update nicht gefunden"))
    }

    async fn delete(&self, id: BookmarkId) -> DbResult<bool> {
        let affected = sqlx::query("DELETE FROM bookmarks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}

fn row_to_lesezeichen(row: &sqlx::sqlite::SqliteRow) -> DbResult<LesezeichenRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = id_str
        .parse::<BookmarkId>()
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let user_str: String = row.try_get("user_id")?;
    let user_id = user_str
        .parse::<UserId>()
        .map_err(|e| DbError::intern(format!("Ungueltige user_id '{user_str}': {e}")))?;

    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(LesezeichenRecord {
        id,
        user_id,
        title: row.try_get("title")?,
        link: row.try_get("link")?,
        description: row.try_get("description")?,
        created_at: zeit_parsen("created_at", &created_at)?,
        updated_at: zeit_parsen("updated_at", &updated_at)?,
    })
}
