//! JSON-Extraktor mit Validierung
//!
//! Jeder Fehler beim Lesen des Bodys (fehlender Content-Type, kaputtes JSON,
//! fehlende Felder, falsche Typen) wird zu einer 400-Antwort im ueblichen
//! Fehlerformat. Danach prueft `Validieren` die fachlichen Regeln.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiFehler;

/// Fachliche Pruefung eines Request-Bodys
pub trait Validieren {
    fn validieren(&self) -> Result<(), ApiFehler>;
}

/// Wie `Json<T>`, aber mit einheitlichen 400-Fehlern und Validierung
#[derive(Debug)]
pub struct ValidiertesJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidiertesJson<T>
where
    T: DeserializeOwned + Validieren,
    S: Send + Sync,
{
    type Rejection = ApiFehler;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(wert) = Json::<T>::from_request(req, state)
            .await
            .map_err(|ablehnung| ApiFehler::Validierung(ablehnung.body_text()))?;

        wert.validieren()?;
        Ok(Self(wert))
    }
}
