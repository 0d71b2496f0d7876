//! Gemeinsame Helfer fuer die End-to-End-Tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use merkliste_api::{router, AppState};
use merkliste_auth::{HashParameter, PasswortHasher, TokenAussteller};
use merkliste_db::SqliteDb;
use serde_json::Value;
use tower::ServiceExt;

pub const GEHEIMNIS: &[u8] = b"e2e-test-geheimnis";

pub struct TestApp {
    pub router: Router,
    pub db: Arc<SqliteDb>,
}

pub async fn test_app() -> TestApp {
    let db = Arc::new(
        SqliteDb::in_memory()
            .await
            .expect("In-Memory-DB konnte nicht geoeffnet werden"),
    );
    let hasher = PasswortHasher::neu(HashParameter {
        speicher_kib: 1024,
        iterationen: 1,
        parallelitaet: 1,
    })
    .unwrap();
    let tokens = Arc::new(TokenAussteller::neu(GEHEIMNIS, Duration::minutes(15)));

    TestApp {
        router: router(AppState::neu(db.clone(), hasher, tokens)),
        db,
    }
}

impl TestApp {
    /// Schickt eine Anfrage; leerer Body ergibt `Value::Null`
    pub async fn anfrage(
        &self,
        methode: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(methode).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.senden(request).await
    }

    pub async fn senden(&self, request: Request<Body>) -> (StatusCode, Value) {
        let antwort = self.router.clone().oneshot(request).await.unwrap();
        let status = antwort.status();
        let bytes = axum::body::to_bytes(antwort.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Antwort ist kein JSON")
        };
        (status, json)
    }

    /// Registriert einen Benutzer und gibt (Token, User-ID) zurueck
    pub async fn registrieren(&self, email: &str, passwort: &str) -> (String, String) {
        let (status, json) = self
            .anfrage(
                Method::POST,
                "/auth/signup",
                None,
                Some(serde_json::json!({ "email": email, "password": passwort })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "Signup fehlgeschlagen: {json}");
        (
            json["token"].as_str().unwrap().to_string(),
            json["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Legt ein Lesezeichen an und gibt seine ID zurueck
    pub async fn lesezeichen_anlegen(&self, token: &str, title: &str) -> String {
        let (status, json) = self
            .anfrage(
                Method::POST,
                "/bookmarks",
                Some(token),
                Some(serde_json::json!({ "title": title, "link": "https://example.com" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "Anlegen fehlgeschlagen: {json}");
        json["id"].as_str().unwrap().to_string()
    }
}

/// Prueft das einheitliche Fehlerformat
pub fn fehler_pruefen(json: &Value, status: StatusCode) {
    assert_eq!(json["error"]["code"], status.as_u16(), "Fehlerformat: {json}");
    assert!(json["error"]["message"].is_string(), "Fehlerformat: {json}");
}
