//! merkliste-bookmarks – Lesezeichen pro Benutzer
//!
//! Dieses Crate implementiert den BookmarkService: Auflisten, Laden,
//! Anlegen, Bearbeiten und Loeschen von Lesezeichen. Jede Operation bekommt
//! die Benutzer-ID des Aufrufers explizit uebergeben und prueft den Besitz.
//!
//! # Beispiel
//!
//! ```no_run
//! use std::sync::Arc;
//! use merkliste_bookmarks::BookmarkService;
//! use merkliste_db::SqliteDb;
//!
//! #[tokio::main]
//! async fn main() {
//!     let db = Arc::new(SqliteDb::in_memory().await.unwrap());
//!     let bookmarks = BookmarkService::neu(db);
//! }
//! ```

pub mod error;
pub mod service;
pub mod types;


// Bequeme Re-Exporte
pub use error::{BookmarkError, BookmarkResult};
pub use service::BookmarkService;
pub use types::{Lesezeichen, LesezeichenAenderung, NeuesLesezeichenDaten};
