//! merkliste-core – Gemeinsame Typen und Hilfsfunktionen
//!
//! Dieses Crate stellt die fundamentalen Bausteine bereit, die von allen
//! anderen Merkliste-Crates gemeinsam genutzt werden.

pub mod email;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use email::{email_gueltig, email_normalisieren};
pub use types::{BookmarkId, UserId};
