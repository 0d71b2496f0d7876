//! Geteilter Axum-State

use std::sync::Arc;
use std::time::Instant;

use merkliste_auth::{AuthService, PasswortHasher, TokenAussteller};
use merkliste_bookmarks::BookmarkService;
use merkliste_db::SqliteDb;

/// State fuer alle Handler; wird pro Request geklont
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<SqliteDb>>,
    pub bookmarks: Arc<BookmarkService<SqliteDb>>,
    pub db: Arc<SqliteDb>,
    pub gestartet: Instant,
}

impl AppState {
    /// Verdrahtet die Services mit einer gemeinsamen Datenbank
    pub fn neu(db: Arc<SqliteDb>, hasher: PasswortHasher, tokens: Arc<TokenAussteller>) -> Self {
        Self {
            auth: Arc::new(AuthService::neu(db.clone(), hasher, tokens)),
            bookmarks: BookmarkService::neu(db.clone()),
            db,
            gestartet: Instant::now(),
        }
    }
}
