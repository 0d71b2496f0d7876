//! Auth-Service fuer Merkliste
//!
//! Zentraler Service fuer Registrierung, Login, Sitzungsaufloesung und
//! Profilpflege. Nutzt das UserRepository, den Passwort-Hasher und den
//! Token-Aussteller; alle drei werden beim Erstellen injiziert.

use std::sync::Arc;

use merkliste_core::{email_normalisieren, UserId};
use merkliste_db::{
    models::{BenutzerRecord, BenutzerUpdate, NeuerBenutzer},
    DbError, UserRepository,
};

use crate::{
    error::{AuthError, AuthResult},
    password::PasswortHasher,
    token::TokenAussteller,
    types::{Anmeldung, Benutzer, ProfilAenderung},
};

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    hasher: PasswortHasher,
    tokens: Arc<TokenAussteller>,
}

impl<U: UserRepository> AuthService<U> {
    /// Erstellt einen neuen AuthService
    pub fn neu(user_repo: Arc<U>, hasher: PasswortHasher, tokens: Arc<TokenAussteller>) -> Self {
        Self {
            user_repo,
            hasher,
            tokens,
        }
    }

    /// Registriert einen neuen Benutzer und stellt direkt ein Token aus
    ///
    /// Gibt `AuthError::EmailVergeben` zurueck wenn die E-Mail schon existiert,
    /// unabhaengig vom Passwort.
    pub async fn registrieren(&self, email: &str, passwort: &str) -> AuthResult<Anmeldung> {
        let email = email_normalisieren(email);

        if self.user_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailVergeben(email));
        }

        let passwort_hash = self.hasher.hashen(passwort)?;

        // Parallele Registrierung: der Unique-Index entscheidet
        let benutzer = self
            .user_repo
            .create(NeuerBenutzer {
                email: &email,
                password_hash: &passwort_hash,
            })
            .await
            .map_err(|e| match e {
                e if e.ist_eindeutigkeit() => AuthError::EmailVergeben(email.clone()),
                e => AuthError::Datenbank(e),
            })?;

        tracing::info!(user_id = %benutzer.id, "Neuer Benutzer registriert");

        self.anmeldung_fuer(benutzer)
    }

    /// Meldet einen Benutzer an
    ///
    /// Unbekannte E-Mail und falsches Passwort liefern denselben Fehler.
    pub async fn anmelden(&self, email: &str, passwort: &str) -> AuthResult<Anmeldung> {
        let email = email_normalisieren(email);

        let Some(benutzer) = self.user_repo.get_by_email(&email).await? else {
            tracing::warn!("Login-Versuch mit unbekannter E-Mail");
            return Err(AuthError::UngueltigeAnmeldedaten);
        };

        if !self.hasher.verifizieren(passwort, &benutzer.password_hash)? {
            tracing::warn!(user_id = %benutzer.id, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        tracing::info!(user_id = %benutzer.id, "Benutzer angemeldet");

        self.anmeldung_fuer(benutzer)
    }

    /// Prueft ein Sitzungs-Token und laedt den zugehoerigen Benutzer
    ///
    /// Das Nachladen faengt Tokens von Benutzern ab, die es nicht mehr gibt.
    pub async fn sitzung_aufloesen(&self, token: &str) -> AuthResult<Benutzer> {
        let claims = self.tokens.pruefen(token)?;
        let user_id = claims.user_id()?;

        let benutzer = self
            .user_repo
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::BenutzerNichtGefunden(user_id.to_string()))?;

        Ok(benutzer.into())
    }

    /// Laedt das Profil des angemeldeten Benutzers
    pub async fn profil_laden(&self, user_id: UserId) -> AuthResult<Benutzer> {
        self.user_repo
            .get_by_id(user_id)
            .await?
            .map(Benutzer::from)
            .ok_or_else(|| AuthError::BenutzerNichtGefunden(user_id.to_string()))
    }

    /// Aendert Profilfelder des angemeldeten Benutzers
    ///
    /// Eine E-Mail, die ein anderer Benutzer bereits verwendet, ergibt
    /// `AuthError::EmailVergeben`.
    pub async fn profil_bearbeiten(
        &self,
        user_id: UserId,
        aenderung: ProfilAenderung,
    ) -> AuthResult<Benutzer> {
        let email = aenderung.email.as_deref().map(email_normalisieren);

        if let Some(ref neue_email) = email {
            if let Some(inhaber) = self.user_repo.get_by_email(neue_email).await? {
                if inhaber.id != user_id {
                    return Err(AuthError::EmailVergeben(neue_email.clone()));
                }
            }
        }

        let update = BenutzerUpdate {
            email: email.clone(),
            first_name: aenderung.first_name,
            last_name: aenderung.last_name,
        };

        let benutzer = self
            .user_repo
            .update(user_id, update)
            .await
            .map_err(|e| match e {
                e if e.ist_eindeutigkeit() => {
                    AuthError::EmailVergeben(email.clone().unwrap_or_default())
                }
                DbError::NichtGefunden(_) => AuthError::BenutzerNichtGefunden(user_id.to_string()),
                e => AuthError::Datenbank(e),
            })?;

        tracing::info!(user_id = %user_id, "Profil aktualisiert");

        Ok(benutzer.into())
    }

    fn anmeldung_fuer(&self, benutzer: BenutzerRecord) -> AuthResult<Anmeldung> {
        let token = self.tokens.ausstellen(benutzer.id, &benutzer.email)?;
        Ok(Anmeldung {
            benutzer: benutzer.into(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use merkliste_db::DbResult;
    use std::sync::Mutex;

    use crate::password::HashParameter;

    // Minimaler In-Memory UserRepository fuer Tests
    #[derive(Default)]
    struct TestUserRepo {
        benutzer: Mutex<Vec<BenutzerRecord>>,
    }

    impl TestUserRepo {
        fn gespeicherter_hash(&self, email: &str) -> Option<String> {
            self.benutzer
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .map(|u| u.password_hash.clone())
        }

        fn entfernen(&self, id: UserId) {
            self.benutzer.lock().unwrap().retain(|u| u.id != id);
        }
    }

    impl UserRepository for TestUserRepo {
        async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
            let mut benutzer = self.benutzer.lock().unwrap();
            if benutzer.iter().any(|u| u.email == data.email) {
                return Err(DbError::Eindeutigkeit(data.email.to_string()));
            }
            let record = BenutzerRecord {
                id: UserId::new(),
                email: data.email.to_string(),
                password_hash: data.password_hash.to_string(),
                first_name: None,
                last_name: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            benutzer.push(record.clone());
            Ok(record)
        }

        async fn get_by_id(&self, id: UserId) -> DbResult<Option<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().iter().find(|u| u.email == email).cloned())
        }

        async fn update(&self, id: UserId, data: BenutzerUpdate) -> DbResult<BenutzerRecord> {
            let mut benutzer = self.benutzer.lock().unwrap();
            let user = benutzer
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| DbError::nicht_gefunden(id.to_string()))?;
            if let Some(v) = data.email {
                user.email = v;
            }
            if let Some(v) = data.first_name {
                user.first_name = Some(v);
            }
            if let Some(v) = data.last_name {
                user.last_name = Some(v);
            }
            user.updated_at = Utc::now();
            Ok(user.clone())
        }
    }

    fn test_service() -> (AuthService<TestUserRepo>, Arc<TestUserRepo>) {
        let repo = Arc::new(TestUserRepo::default());
        let hasher = PasswortHasher::neu(HashParameter {
            speicher_kib: 1024,
            iterationen: 1,
            parallelitaet: 1,
        })
        .unwrap();
        let tokens = Arc::new(TokenAussteller::neu(b"test", Duration::minutes(5)));
        (AuthService::neu(repo.clone(), hasher, tokens), repo)
    }

    #[tokio::test]
    async fn registrieren_und_anmelden() {
        let (service, repo) = test_service();

        let registrierung = service
            .registrieren("testuser@example.com", "sicheres_passwort!")
            .await
            .expect("Registrierung fehlgeschlagen");

        assert_eq!(registrierung.benutzer.email, "testuser@example.com");
        assert!(!registrierung.token.token.is_empty());

        let hash = repo.gespeicherter_hash("testuser@example.com").unwrap();
        assert_ne!(hash, "sicheres_passwort!");

        let anmeldung = service
            .anmelden("testuser@example.com", "sicheres_passwort!")
            .await
            .expect("Anmeldung fehlgeschlagen");

        assert_eq!(anmeldung.benutzer.id, registrierung.benutzer.id);
        assert!(!anmeldung.token.token.is_empty());
    }

    #[tokio::test]
    async fn email_wird_normalisiert() {
        let (service, _) = test_service();
        let reg = service.registrieren("  Mixed@Example.COM ", "pw").await.unwrap();
        assert_eq!(reg.benutzer.email, "mixed@example.com");

        service.anmelden("mixed@example.com", "pw").await.unwrap();
        let doppelt = service.registrieren("MIXED@example.com", "pw").await;
        assert!(matches!(doppelt, Err(AuthError::EmailVergeben(_))));
    }

    #[tokio::test]
    async fn doppelte_registrierung_schlaegt_fehl() {
        let (service, _) = test_service();
        service.registrieren("duplikat@example.com", "passwort").await.unwrap();

        for passwort in ["passwort", "anderes"] {
            let ergebnis = service.registrieren("duplikat@example.com", passwort).await;
            assert!(matches!(ergebnis, Err(AuthError::EmailVergeben(_))));
        }
    }

    #[tokio::test]
    async fn falsches_passwort_und_unbekannte_email_gleich() {
        let (service, _) = test_service();
        service.registrieren("user@example.com", "richtig").await.unwrap();

        let falsch = service.anmelden("user@example.com", "falsch").await.unwrap_err();
        let unbekannt = service.anmelden("niemand@example.com", "richtig").await.unwrap_err();

        assert!(matches!(falsch, AuthError::UngueltigeAnmeldedaten));
        assert!(matches!(unbekannt, AuthError::UngueltigeAnmeldedaten));
        assert_eq!(falsch.to_string(), unbekannt.to_string());
    }

    #[tokio::test]
    async fn sitzung_aufloesen() {
        let (service, _) = test_service();
        let reg = service.registrieren("session@example.com", "passwort").await.unwrap();

        let benutzer = service.sitzung_aufloesen(&reg.token.token).await.unwrap();
        assert_eq!(benutzer.id, reg.benutzer.id);
        assert_eq!(benutzer.email, "session@example.com");
    }

    #[tokio::test]
    async fn sitzung_fuer_verschwundenen_benutzer() {
        let (service, repo) = test_service();
        let reg = service.registrieren("weg@example.com", "passwort").await.unwrap();
        repo.entfernen(reg.benutzer.id);

        let ergebnis = service.sitzung_aufloesen(&reg.token.token).await;
        assert!(matches!(ergebnis, Err(AuthError::BenutzerNichtGefunden(_))));
    }

    #[tokio::test]
    async fn sitzung_mit_ungueltigem_token() {
        let (service, _) = test_service();
        let ergebnis = service.sitzung_aufloesen("kein.gueltiges.token").await;
        assert!(matches!(ergebnis, Err(AuthError::TokenUngueltig)));
    }

    #[tokio::test]
    async fn profil_bearbeiten() {
        let (service, repo) = test_service();
        let reg = service.registrieren("profil@example.com", "pw").await.unwrap();
        let hash_vorher = repo.gespeicherter_hash("profil@example.com").unwrap();

        let benutzer = service
            .profil_bearbeiten(
                reg.benutzer.id,
                ProfilAenderung {
                    first_name: Some("Vera".into()),
                    email: Some("Neu@Example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(benutzer.first_name.as_deref(), Some("Vera"));
        assert_eq!(benutzer.email, "neu@example.com");
        assert_eq!(repo.gespeicherter_hash("neu@example.com").unwrap(), hash_vorher);

        let geladen = service.profil_laden(reg.benutzer.id).await.unwrap();
        assert_eq!(geladen, benutzer);
    }

    #[tokio::test]
    async fn profil_email_eines_anderen() {
        let (service, _) = test_service();
        service.registrieren("erster@example.com", "pw").await.unwrap();
        let zweiter = service.registrieren("zweiter@example.com", "pw").await.unwrap();

        let ergebnis = service
            .profil_bearbeiten(
                zweiter.benutzer.id,
                ProfilAenderung {
                    email: Some("erster@example.com".into()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(ergebnis, Err(AuthError::EmailVergeben(_))));

        // Eigene E-Mail erneut setzen ist erlaubt
        service
            .profil_bearbeiten(
                zweiter.benutzer.id,
                ProfilAenderung {
                    email: Some("zweiter@example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
    }
}
