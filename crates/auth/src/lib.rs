//! merkliste-auth – Authentifizierung
//!
//! Dieses Crate implementiert:
//! - Passwort-Hashing mit Argon2id
//! - Signierte, zeitlich begrenzte Sitzungs-Tokens (JWT, HS256)
//! - AuthService (Registrierung, Login, Sitzungsaufloesung, Profil)

pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod types;

// Bequeme Re-Exporte
pub use error::{AuthError, AuthResult};
pub use password::{HashParameter, PasswortHasher};
pub use service::AuthService;
pub use token::{SitzungsClaims, SitzungsToken, TokenAussteller};
pub use types::{Anmeldung, Benutzer, ProfilAenderung};
