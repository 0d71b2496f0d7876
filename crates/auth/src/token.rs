//! Sitzungs-Tokens
//!
//! Ein Sitzungs-Token ist ein HS256-signiertes JWT mit den Claims
//! `{sub, email, iat, exp}`. Es wird nicht gespeichert; jede Anfrage
//! prueft Signatur und Ablauf zustandslos.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use merkliste_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Claims eines Sitzungs-Tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitzungsClaims {
    /// Benutzer-ID
    pub sub: String,
    pub email: String,
    /// Ausstellungszeitpunkt (Unix-Sekunden)
    pub iat: i64,
    /// Ablaufzeitpunkt (Unix-Sekunden)
    pub exp: i64,
}

impl SitzungsClaims {
    /// Gibt die Benutzer-ID aus dem `sub`-Claim zurueck
    pub fn user_id(&self) -> AuthResult<UserId> {
        self.sub.parse().map_err(|_| AuthError::TokenUngueltig)
    }
}

/// Ein frisch ausgestelltes Token
#[derive(Debug, Clone)]
pub struct SitzungsToken {
    pub token: String,
    pub laeuft_ab_am: DateTime<Utc>,
}

/// Stellt Sitzungs-Tokens aus und prueft sie
#[derive(Clone)]
pub struct TokenAussteller {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    gueltigkeit: Duration,
}

impl std::fmt::Debug for TokenAussteller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAussteller")
            .field("gueltigkeit", &self.gueltigkeit)
            .finish_non_exhaustive()
    }
}

impl TokenAussteller {
    /// Erstellt einen Aussteller mit gemeinsamem HMAC-Geheimnis
    pub fn neu(geheimnis: &[u8], gueltigkeit: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Keine Toleranz fuer Uhrabweichungen
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(geheimnis),
            decoding: DecodingKey::from_secret(geheimnis),
            validation,
            gueltigkeit,
        }
    }

    /// Stellt ein neues Token fuer den Benutzer aus
    pub fn ausstellen(&self, user_id: UserId, email: &str) -> AuthResult<SitzungsToken> {
        let jetzt = Utc::now();
        let ablauf = jetzt
            .checked_add_signed(self.gueltigkeit)
            .ok_or_else(|| AuthError::intern("Token-Ablaufzeit liegt ausserhalb des Zeitbereichs"))?;

        let claims = SitzungsClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: jetzt.timestamp(),
            exp: ablauf.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::intern(format!("Token-Erstellung fehlgeschlagen: {e}")))?;

        Ok(SitzungsToken {
            token,
            laeuft_ab_am: Utc
                .timestamp_opt(claims.exp, 0)
                .single()
                .unwrap_or(ablauf),
        })
    }

    /// Prueft Signatur, Format und Ablauf eines Tokens
    pub fn pruefen(&self, token: &str) -> AuthResult<SitzungsClaims> {
        decode::<SitzungsClaims>(token, &self.decoding, &self.validation)
            .map(|daten| daten.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenAbgelaufen,
                _ => AuthError::TokenUngueltig,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aussteller() -> TokenAussteller {
        TokenAussteller::neu(b"test-geheimnis", Duration::minutes(15))
    }

    #[test]
    fn ausstellen_und_pruefen() {
        let aussteller = aussteller();
        let user_id = UserId::new();

        let token = aussteller.ausstellen(user_id, "alice@example.com").unwrap();
        assert!(!token.token.is_empty());
        assert!(token.laeuft_ab_am > Utc::now());

        let claims = aussteller.pruefen(&token.token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.email, "alice@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn abgelaufenes_token() {
        let aussteller = TokenAussteller::neu(b"test-geheimnis", Duration::seconds(-120));
        let token = aussteller.ausstellen(UserId::new(), "a@example.com").unwrap();

        let ergebnis = aussteller.pruefen(&token.token);
        assert!(matches!(ergebnis, Err(AuthError::TokenAbgelaufen)));
    }

    #[test]
    fn ueberlaufende_gueltigkeit_gibt_fehler() {
        let aussteller = TokenAussteller::neu(b"test-geheimnis", Duration::seconds(10_000_000_000_000));
        let ergebnis = aussteller.ausstellen(UserId::new(), "a@example.com");
        assert!(matches!(ergebnis, Err(AuthError::Intern(_))));
    }

    #[test]
    fn fremdes_geheimnis_wird_abgelehnt() {
        let fremd = TokenAussteller::neu(b"anderes-geheimnis", Duration::minutes(15));
        let token = fremd.ausstellen(UserId::new(), "a@example.com").unwrap();

        let ergebnis = aussteller().pruefen(&token.token);
        assert!(matches!(ergebnis, Err(AuthError::TokenUngueltig)));
    }

    #[test]
    fn manipulierte_claims_werden_abgelehnt() {
        let aussteller = aussteller();
        let echt = aussteller.ausstellen(UserId::new(), "opfer@example.com").unwrap();
        let anderes = aussteller.ausstellen(UserId::new(), "angreifer@example.com").unwrap();

        // Payload des einen Tokens mit der Signatur des anderen kombinieren
        let teile_echt: Vec<&str> = echt.token.split('.').collect();
        let teile_anderes: Vec<&str> = anderes.token.split('.').collect();
        let manipuliert = format!("{}.{}.{}", teile_echt[0], teile_anderes[1], teile_echt[2]);

        let ergebnis = aussteller.pruefen(&manipuliert);
        assert!(matches!(ergebnis, Err(AuthError::TokenUngueltig)));
    }

    #[test]
    fn kaputtes_token() {
        let aussteller = aussteller();
        for token in ["", "abc", "a.b.c", "Bearer xyz"] {
            assert!(
                matches!(aussteller.pruefen(token), Err(AuthError::TokenUngueltig)),
                "Token {token:?} muss abgelehnt werden"
            );
        }
    }

    #[test]
    fn sub_ohne_uuid() {
        let claims = SitzungsClaims {
            sub: "42".into(),
            email: "x@example.com".into(),
            iat: 0,
            exp: 1,
        };
        assert!(matches!(claims.user_id(), Err(AuthError::TokenUngueltig)));
    }
}
