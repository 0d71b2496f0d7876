//! merkliste-server – Bibliotheks-Root
//!
//! Deklariert alle Server-Module und stellt den oeffentlichen Einstiegspunkt
//! fuer Integrationstests bereit.

pub mod config;

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use config::ServerConfig;
use merkliste_api::{AppState, RestServer, RestServerKonfig};
use merkliste_auth::{PasswortHasher, TokenAussteller};
use merkliste_db::SqliteDb;

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Oeffnet die Datenbank und verdrahtet die Services
    pub async fn state_aufbauen(&self) -> Result<AppState> {
        let db = SqliteDb::oeffnen(&self.config.datenbank_config())
            .await
            .context("Datenbank konnte nicht geoeffnet werden")?;

        let hasher = PasswortHasher::neu(self.config.hash_parameter())
            .context("Ungueltige Argon2-Parameter")?;
        let tokens = TokenAussteller::neu(
            self.config.auth.jwt_secret.as_bytes(),
            self.config.token_gueltigkeit(),
        );

        Ok(AppState::neu(Arc::new(db), hasher, Arc::new(tokens)))
    }

    /// Startet den Server und laeuft bis Ctrl-C
    pub async fn starten(self) -> Result<()> {
        self.starten_bis(shutdown_signal()).await
    }

    /// Startet den Server und laeuft bis `shutdown` abschliesst
    ///
    /// Reihenfolge:
    /// 1. Datenbankverbindung herstellen, Migrationen ausfuehren
    /// 2. Services verdrahten
    /// 3. REST-API starten
    pub async fn starten_bis<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.rest_bind_adresse()?;

        tracing::info!(
            server_name = %self.config.server.name,
            adresse = %bind_addr,
            datenbank = %self.config.datenbank.url,
            "Server startet"
        );

        if self.config.nutzt_dev_geheimnis() {
            tracing::warn!(
                "Eingebautes JWT-Geheimnis aktiv; fuer den Betrieb {} setzen",
                config::ENV_JWT_SECRET
            );
        }

        let state = self.state_aufbauen().await?;

        RestServer::neu(RestServerKonfig {
            bind_addr,
            cors_origins: self.config.netzwerk.cors_origins.clone(),
        })
        .starten(state, shutdown)
        .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(fehler = %e, "Ctrl-C-Handler konnte nicht installiert werden");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown-Signal empfangen, Server wird beendet");
}
