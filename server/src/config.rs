//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist. Das JWT-Geheimnis laesst sich per `MERKLISTE_JWT_SECRET`
//! ueberschreiben.

use std::net::SocketAddr;

use anyhow::Context;
use merkliste_auth::HashParameter;
use merkliste_db::DatabaseConfig;
use serde::{Deserialize, Serialize};

/// Umgebungsvariable fuer das JWT-Geheimnis
pub const ENV_JWT_SECRET: &str = "MERKLISTE_JWT_SECRET";

/// Obergrenze fuer die Token-Gueltigkeit (10 Jahre)
pub const MAX_TOKEN_GUELTIGKEIT_SEKUNDEN: i64 = 10 * 365 * 24 * 60 * 60;

/// Eingebautes Geheimnis fuer die Entwicklung; im Betrieb immer ersetzen
pub const DEV_JWT_SECRET: &str = "merkliste-dev-geheimnis-bitte-ersetzen";

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allgemeine Server-Einstellungen
    pub server: ServerEinstellungen,
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Datenbank-Einstellungen
    pub datenbank: DatenbankEinstellungen,
    /// Sitzungs-Tokens und Passwort-Hashing
    pub auth: AuthEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
}

/// Allgemeine Server-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerEinstellungen {
    /// Anzeigename des Servers (nur fuer Logs)
    pub name: String,
}

impl Default for ServerEinstellungen {
    fn default() -> Self {
        Self {
            name: "Merkliste".into(),
        }
    }
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    pub bind_adresse: String,
    /// Port fuer die REST-API
    pub port: u16,
    /// CORS-Origins fuer REST (leer = alle erlaubt)
    pub cors_origins: Vec<String>,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 8080,
            cors_origins: vec![],
        }
    }
}

/// Datenbank-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatenbankEinstellungen {
    /// Verbindungs-URL
    pub url: String,
    /// Maximale Verbindungspool-Groesse
    pub max_verbindungen: u32,
    /// WAL-Modus fuer SQLite
    pub sqlite_wal: bool,
}

impl Default for DatenbankEinstellungen {
    fn default() -> Self {
        let standard = DatabaseConfig::default();
        Self {
            url: standard.url,
            max_verbindungen: standard.max_verbindungen,
            sqlite_wal: standard.sqlite_wal,
        }
    }
}

/// Auth-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEinstellungen {
    /// HMAC-Geheimnis fuer Sitzungs-Tokens
    pub jwt_secret: String,
    /// Gueltigkeit eines Tokens in Sekunden
    pub token_gueltigkeit_sekunden: i64,
    /// Argon2 Speicherbedarf in KiB
    pub argon2_speicher_kib: u32,
    pub argon2_iterationen: u32,
    pub argon2_parallelitaet: u32,
}

impl Default for AuthEinstellungen {
    fn default() -> Self {
        let hash = HashParameter::default();
        Self {
            jwt_secret: DEV_JWT_SECRET.into(),
            // 24 Stunden
            token_gueltigkeit_sekunden: 86_400,
            argon2_speicher_kib: hash.speicher_kib,
            argon2_iterationen: hash.iterationen,
            argon2_parallelitaet: hash.parallelitaet,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level oder EnvFilter-Direktive
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        let mut config = match std::fs::read_to_string(pfad) {
            Ok(inhalt) => toml::from_str(&inhalt)
                .with_context(|| format!("Konfigurationsfehler in '{pfad}'"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Self::default()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Konfigurationsdatei '{pfad}' nicht lesbar"))
            }
        };

        config.umgebung_anwenden(|name| std::env::var(name).ok());
        config.pruefen()?;
        Ok(config)
    }

    /// Uebernimmt Ueberschreibungen aus der Umgebung
    pub fn umgebung_anwenden(&mut self, lesen: impl Fn(&str) -> Option<String>) {
        if let Some(secret) = lesen(ENV_JWT_SECRET).filter(|s| !s.is_empty()) {
            self.auth.jwt_secret = secret;
        }
    }

    /// Prueft Werte, die Serde allein nicht abfangen kann
    pub fn pruefen(&self) -> anyhow::Result<()> {
        if self.auth.jwt_secret.is_empty() {
            anyhow::bail!("auth.jwt_secret darf nicht leer sein");
        }
        if self.auth.token_gueltigkeit_sekunden <= 0 {
            anyhow::bail!("auth.token_gueltigkeit_sekunden muss positiv sein");
        }
        if self.auth.token_gueltigkeit_sekunden > MAX_TOKEN_GUELTIGKEIT_SEKUNDEN {
            anyhow::bail!(
                "auth.token_gueltigkeit_sekunden darf hoechstens {MAX_TOKEN_GUELTIGKEIT_SEKUNDEN} sein"
            );
        }
        if self.datenbank.max_verbindungen == 0 {
            anyhow::bail!("datenbank.max_verbindungen muss mindestens 1 sein");
        }
        Ok(())
    }

    /// Gibt zurueck ob noch das eingebaute Entwicklungs-Geheimnis aktiv ist
    pub fn nutzt_dev_geheimnis(&self) -> bool {
        self.auth.jwt_secret == DEV_JWT_SECRET
    }

    /// Gibt die Bind-Adresse fuer den REST-Server zurueck
    pub fn rest_bind_adresse(&self) -> anyhow::Result<SocketAddr> {
        let adresse = format!("{}:{}", self.netzwerk.bind_adresse, self.netzwerk.port);
        adresse
            .parse()
            .with_context(|| format!("Ungueltige Bind-Adresse '{adresse}'"))
    }

    pub fn datenbank_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.datenbank.url.clone(),
            max_verbindungen: self.datenbank.max_verbindungen,
            sqlite_wal: self.datenbank.sqlite_wal,
        }
    }

    pub fn hash_parameter(&self) -> HashParameter {
        HashParameter {
            speicher_kib: self.auth.argon2_speicher_kib,
            iterationen: self.auth.argon2_iterationen,
            parallelitaet: self.auth.argon2_parallelitaet,
        }
    }

    pub fn token_gueltigkeit(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.auth.token_gueltigkeit_sekunden)
    }
}
