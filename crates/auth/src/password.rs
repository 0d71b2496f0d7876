//! Passwort-Hashing mit Argon2id
//!
//! Jeder Hash bekommt ein frisches Zufalls-Salt und wird als PHC-String
//! gespeichert (Algorithmus, Parameter und Salt stehen im String selbst).
//! Die Verifikation liest die Parameter aus dem gespeicherten Hash, alte
//! Hashes bleiben also pruefbar wenn die Konfiguration sich aendert.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{AuthError, AuthResult};

/// Kostenparameter fuer Argon2id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParameter {
    /// Speicherbedarf in KiB
    pub speicher_kib: u32,
    /// Anzahl Iterationen
    pub iterationen: u32,
    /// Parallelitaet (Lanes)
    pub parallelitaet: u32,
}

impl Default for HashParameter {
    /// Werte gemaess OWASP-Empfehlungen: 64 MiB, 3 Iterationen, 1 Lane
    fn default() -> Self {
        Self {
            speicher_kib: 64 * 1024,
            iterationen: 3,
            parallelitaet: 1,
        }
    }
}

/// Argon2id-Hasher mit fest konfigurierten Kostenparametern
#[derive(Debug, Clone)]
pub struct PasswortHasher {
    params: Params,
}

impl PasswortHasher {
    /// Erstellt einen Hasher; ungueltige Parameter werden sofort abgelehnt
    pub fn neu(parameter: HashParameter) -> AuthResult<Self> {
        let params = Params::new(
            parameter.speicher_kib,
            parameter.iterationen,
            parameter.parallelitaet,
            None, // output_len: Standard (32 Bytes)
        )
        .map_err(|e| AuthError::PasswortHashing(format!("Ungueltige Argon2-Parameter: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hasht ein Passwort mit einem zufaelligen Salt und gibt den PHC-String zurueck
    pub fn hashen(&self, passwort: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(passwort.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::PasswortHashing(e.to_string()))
    }

    /// Verifiziert ein Passwort gegen einen gespeicherten PHC-Hash
    ///
    /// `Ok(false)` bei falschem Passwort, `Err` nur bei kaputtem Hash.
    pub fn verifizieren(&self, passwort: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AuthError::PasswortHashing(format!("Ungueltiges Hash-Format: {e}")))?;

        match self.argon2().verify_password(passwort.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::PasswortHashing(e.to_string())),
        }
    }
}
