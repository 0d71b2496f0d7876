//! merkliste-api – REST-Schnittstelle
//!
//! Dieses Crate implementiert:
//! - Router mit oeffentlichen (`/auth/*`, `/health`) und geschuetzten Routen
//! - Sitzungs-Guard (Bearer-Token) als Axum-Middleware
//! - Request-Validierung und einheitliche Fehlerantworten
//! - RestServer mit CORS, Trace-Layer und Graceful Shutdown

pub mod dto;
pub mod error;
pub mod extract;
pub mod guard;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Bequeme Re-Exporte
pub use error::{ApiFehler, ApiResult};
pub use guard::Identitaet;
pub use routes::router;
pub use server::{RestServer, RestServerKonfig};
pub use state::AppState;
