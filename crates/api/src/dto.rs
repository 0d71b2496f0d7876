//! Request- und Response-Bodies der REST-API

use chrono::{DateTime, Utc};
use merkliste_auth::{Anmeldung, Benutzer, ProfilAenderung};
use merkliste_bookmarks::{LesezeichenAenderung, NeuesLesezeichenDaten};
use merkliste_core::email_gueltig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiFehler;
use crate::extract::Validieren;

fn nicht_leer(feld: &str, wert: &str) -> Result<(), ApiFehler> {
    if wert.trim().is_empty() {
        return Err(ApiFehler::Validierung(format!("{feld} darf nicht leer sein")));
    }
    Ok(())
}

fn optional_nicht_leer(feld: &str, wert: Option<&String>) -> Result<(), ApiFehler> {
    match wert {
        Some(w) => nicht_leer(feld, w),
        None => Ok(()),
    }
}

/// Unterscheidet ein fehlendes Feld (`None`) von explizitem `null` (`Some(None)`)
fn null_erlaubt<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn email_pruefen(email: &str) -> Result<(), ApiFehler> {
    if !email_gueltig(email) {
        return Err(ApiFehler::Validierung("email ist keine gueltige E-Mail-Adresse".into()));
    }
    Ok(())
}

/// Body fuer `POST /auth/signup` und `POST /auth/signin`
#[derive(Debug, Deserialize)]
pub struct AuthBody {
    pub email: String,
    pub password: String,
}

impl Validieren for AuthBody {
    fn validieren(&self) -> Result<(), ApiFehler> {
        email_pruefen(&self.email)?;
        if self.password.is_empty() {
            return Err(ApiFehler::Validierung("password darf nicht leer sein".into()));
        }
        Ok(())
    }
}

/// Antwort auf Registrierung und Login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthAntwort {
    pub user: Benutzer,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<Anmeldung> for AuthAntwort {
    fn from(a: Anmeldung) -> Self {
        Self {
            user: a.benutzer,
            token: a.token.token,
            expires_at: a.token.laeuft_ab_am,
        }
    }
}

/// Body fuer `PATCH /users`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilBody {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Validieren for ProfilBody {
    fn validieren(&self) -> Result<(), ApiFehler> {
        if let Some(ref email) = self.email {
            email_pruefen(email)?;
        }
        optional_nicht_leer("firstName", self.first_name.as_ref())?;
        optional_nicht_leer("lastName", self.last_name.as_ref())
    }
}

impl From<ProfilBody> for ProfilAenderung {
    fn from(b: ProfilBody) -> Self {
        Self {
            email: b.email,
            first_name: b.first_name,
            last_name: b.last_name,
        }
    }
}

/// Body fuer `POST /bookmarks`
#[derive(Debug, Deserialize)]
pub struct LesezeichenErstellenBody {
    pub title: String,
    pub link: String,
    pub description: Option<String>,
}

impl Validieren for LesezeichenErstellenBody {
    fn validieren(&self) -> Result<(), ApiFehler> {
        nicht_leer("title", &self.title)?;
        nicht_leer("link", &self.link)
    }
}

impl From<LesezeichenErstellenBody> for NeuesLesezeichenDaten {
    fn from(b: LesezeichenErstellenBody) -> Self {
        Self {
            title: b.title,
            link: b.link,
            description: b.description,
        }
    }
}

/// Body fuer `PATCH /bookmarks/:id`
///
/// `"description": null` entfernt die Beschreibung, ein fehlendes Feld laesst sie stehen.
#[derive(Debug, Default, Deserialize)]
pub struct LesezeichenBearbeitenBody {
    pub title: Option<String>,
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_erlaubt")]
    pub description: Option<Option<String>>,
}

impl Validieren for LesezeichenBearbeitenBody {
    fn validieren(&self) -> Result<(), ApiFehler> {
        optional_nicht_leer("title", self.title.as_ref())?;
        optional_nicht_leer("link", self.link.as_ref())?;
        optional_nicht_leer("description", self.description.as_ref().and_then(Option::as_ref))
    }
}

impl From<LesezeichenBearbeitenBody> for LesezeichenAenderung {
    fn from(b: LesezeichenBearbeitenBody) -> Self {
        Self {
            title: b.title,
            link: b.link,
            description: b.description,
        }
    }
}
