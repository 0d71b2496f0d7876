//! Structured Logging Setup via tracing-subscriber
//!
//! Level und Format kommen aus der Konfiguration und lassen sich per
//! Umgebungsvariable ueberschreiben:
//! - `MK_LOG_LEVEL`: EnvFilter-Direktive (z.B. `debug` oder `merkliste_api=trace`)
//! - `MK_LOG_FORMAT`: `text` oder `json`

use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_LEVEL: &str = "MK_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "MK_LOG_FORMAT";

/// Ausgabeformat der Logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Unbekannte Werte fallen auf `Text` zurueck
    pub fn aus_str(format: &str) -> Self {
        match format.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Initialisiert das Logging-System.
///
/// Umgebungsvariablen haben Vorrang vor den uebergebenen Werten. Ein
/// ungueltiger Filter faellt auf `info` zurueck. Mehrfacher Aufruf ist
/// harmlos, nur der erste Subscriber wird installiert.
pub fn logging_initialisieren(level: &str, format: &str) {
    let filter = EnvFilter::try_from_env(ENV_LOG_LEVEL)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| format.to_string());

    let ergebnis = match LogFormat::aus_str(&format) {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .try_init(),
        LogFormat::Text => fmt().with_env_filter(filter).with_target(true).try_init(),
    };

    if ergebnis.is_err() {
        tracing::debug!("Logging war bereits initialisiert");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsen() {
        assert_eq!(LogFormat::aus_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::aus_str(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::aus_str("text"), LogFormat::Text);
        assert_eq!(LogFormat::aus_str("xml"), LogFormat::Text);
    }

    #[test]
    fn doppelte_initialisierung_paniert_nicht() {
        logging_initialisieren("warn", "text");
        logging_initialisieren("debug", "json");
    }
}
