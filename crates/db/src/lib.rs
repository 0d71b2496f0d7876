//! merkliste-db – Datenbank-Abstraktion
//!
//! Dieses Crate stellt das Repository-Pattern bereit. Die Geschaeftslogik
//! spricht nur mit den Traits `UserRepository` und `BookmarkRepository`;
//! `SqliteDb` ist die mitgelieferte Implementierung.

pub mod error;
pub mod models;
pub mod repository;
pub mod sqlite;

pub use error::DbError;
pub use repository::{BookmarkRepository, DatabaseConfig, DbResult, UserRepository};
pub use sqlite::SqliteDb;
