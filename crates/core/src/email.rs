//! E-Mail-Adressen: Normalisierung und Formatpruefung
//!
//! Die Pruefung ist bewusst grob (`lokal@domain.tld`); sie ersetzt keine
//! Zustellbarkeitspruefung.

/// Normalisiert eine E-Mail-Adresse (Leerraum entfernen, Kleinschreibung)
pub fn email_normalisieren(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Gibt `true` zurueck wenn die Adresse die Form `lokal@domain.tld` hat
pub fn email_gueltig(email: &str) -> bool {
    let email = email.trim();
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((lokal, domain)) = email.split_once('@') else {
        return false;
    };

    if lokal.is_empty() || domain.contains('@') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| {
            !l.is_empty()
                && !l.starts_with('-')
                && !l.ends_with('-')
                && l.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
