//! SQLite-Implementierung des UserRepository

use merkliste_core::UserId;

use crate::error::DbError;
use crate::models::{BenutzerRecord, BenutzerUpdate, NeuerBenutzer};
use crate::repository::{DbResult, UserRepository};
use crate::sqlite::pool::SqliteDb;
use crate::sqlite::{jetzt, zeit_formatieren, zeit_parsen};

const SPALTEN: &str =
    "id, email, password_hash, first_name, last_name, created_at, updated_at";

impl UserRepository for SqliteDb {
    async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
        let id = UserId::new();
        let now = jetzt();
        let now_str = zeit_formatieren(now);

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id.to_string())
        .bind(data.email)
        .bind(data.password_hash)
        .bind(&now_str)
        .bind(&now_str)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DbError::aus_schreibfehler(e, || format!("E-Mail '{}' bereits vergeben", data.email))
        })?;

        tracing::debug!(user_id = %id, "Benutzer-Datensatz angelegt");

        Ok(BenutzerRecord {
            id,
            email: data.email.to_string(),
            password_hash: data.password_hash.to_string(),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>> {
        let sql = format!("SELECT {SPALTEN} FROM users WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
        let sql = format!("SELECT {SPALTEN} FROM users WHERE email = ?");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_benutzer(&r)).transpose()
    }

    async fn update(&self, id: UserId, data: BenutzerUpdate) -> DbResult<BenutzerRecord> {
        if data.ist_leer() {
            return self
                .get_by_id(id)
                .await?
                .ok_or_else(|| DbError::nicht_gefunden(format!("User {id}")));
        }

        // Dynamisches UPDATE – nur gesetzte Felder aendern
        let mut sets: Vec<&str> = Vec::new();
        if data.email.is_some() {
            sets.push("email = ?");
        }
        if data.first_name.is_some() {
            sets.push("first_name = ?");
        }
        if data.last_name.is_some() {
            sets.push("last_name = ?");
        }
        sets.push("updated_at = ?");

        let sql = format!("UPDATE users SET {} WHERE id = ?", sets.join(", "));
        let mut q = sqlx::query(&sql);

        if let Some(ref v) = data.email {
            q = q.bind(v);
        }
        if let Some(ref v) = data.first_name {
            q = q.bind(v);
        }
        if let Some(ref v) = data.last_name {
            q = q.bind(v);
        }
        q = q.bind(zeit_formatieren(jetzt()));
        q = q.bind(id.to_string());

        let affected = q
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DbError::aus_schreibfehler(e, || {
                    format!(
                        "E-Mail '{}' bereits vergeben",
                        data.email.as_deref().unwrap_or_default()
                    )
                })
            })?
            .rows_affected();
        if affected == 0 {
            return Err(DbError::nicht_gefunden(format!("User {id}")));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::intern("User nach Update nicht gefunden"))
    }
}

fn row_to_benutzer(row: &sqlx::sqlite::SqliteRow) -> DbResult<BenutzerRecord> {
    use sqlx::Row as _;

    let id_str: String = row.try_get("id")?;
    let id = id_str
        .parse::<UserId>()
        .map_err(|e| DbError::intern(format!("Ungueltige UUID '{id_str}': {e}")))?;

    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(BenutzerRecord {
        id,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        created_at: zeit_parsen("created_at", &created_at)?,
        updated_at: zeit_parsen("updated_at", &updated_at)?,
    })
}
