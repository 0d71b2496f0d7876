//! End-to-End-Tests fuer die Lesezeichen-Endpunkte

mod common;

use axum::http::{Method, StatusCode};
use common::{fehler_pruefen, test_app};
use serde_json::json;

#[tokio::test]
async fn kompletter_ablauf() {
    let app = test_app().await;

    let (status, json) = app
        .anfrage(
            Method::POST,
            "/auth/signup",
            None,
            Some(json!({ "email": "flow@example.com", "password": "pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(json["token"].is_string());

    let (status, json) = app
        .anfrage(
            Method::POST,
            "/auth/signin",
            None,
            Some(json!({ "email": "flow@example.com", "password": "pw" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = json["token"].as_str().unwrap().to_string();
    let user_id = json["user"]["id"].as_str().unwrap().to_string();

    let (status, json) = app
        .anfrage(
            Method::POST,
            "/bookmarks",
            Some(&token),
            Some(json!({
                "title": "Rust Book",
                "link": "https://doc.rust-lang.org/book/",
                "description": "Pflichtlektuere"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json["id"].as_str().unwrap().to_string();
    assert_eq!(json["userId"], user_id.as_str());
    assert_eq!(json["description"], "Pflichtlektuere");

    let (status, json) = app.anfrage(Method::GET, "/bookmarks", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let liste = json.as_array().unwrap();
    assert_eq!(liste.len(), 1);
    assert_eq!(liste[0]["id"], id.as_str());

    let pfad = format!("/bookmarks/{id}");
    let (status, json) = app.anfrage(Method::DELETE, &pfad, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(json.is_null());

    let (status, json) = app.anfrage(Method::GET, &pfad, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    fehler_pruefen(&json, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn leere_liste() {
    let app = test_app().await;
    let (token, _) = app.registrieren("leer@example.com", "pw").await;

    let (status, json) = app.anfrage(Method::GET, "/bookmarks", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!([]));
}

#[tokio::test]
async fn fremde_lesezeichen() {
    let app = test_app().await;
    let (token_a, _) = app.registrieren("a@example.com", "pw").await;
    let (token_b, _) = app.registrieren("b@example.com", "pw").await;

    let id = app.lesezeichen_anlegen(&token_a, "Privat").await;
    let pfad = format!("/bookmarks/{id}");

    let (status, _) = app.anfrage(Method::GET, &pfad, Some(&token_b), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = app
        .anfrage(Method::PATCH, &pfad, Some(&token_b), Some(json!({ "title": "Meins" })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    fehler_pruefen(&json, StatusCode::FORBIDDEN);

    let (status, _) = app.anfrage(Method::DELETE, &pfad, Some(&token_b), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // B sieht A's Lesezeichen nicht in der eigenen Liste
    let (_, json) = app.anfrage(Method::GET, "/bookmarks", Some(&token_b), None).await;
    assert_eq!(json, json!([]));

    // Bei A ist alles unveraendert
    let (status, json) = app.anfrage(Method::GET, &pfad, Some(&token_a), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Privat");
}

#[tokio::test]
async fn bearbeiten_nur_gesetzte_felder() {
    let app = test_app().await;
    let (token, _) = app.registrieren("patch@example.com", "pw").await;
    let id = app.lesezeichen_anlegen(&token, "Alt").await;
    let pfad = format!("/bookmarks/{id}");

    let (status, json) = app
        .anfrage(
            Method::PATCH,
            &pfad,
            Some(&token),
            Some(json!({ "link": "https://neu.example.com" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Alt");
    assert_eq!(json["link"], "https://neu.example.com");

    let (status, _) = app
        .anfrage(Method::PATCH, &pfad, Some(&token), Some(json!({ "title": "" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn beschreibung_mit_null_entfernen() {
    let app = test_app().await;
    let (token, _) = app.registrieren("null@example.com", "pw").await;

    let (status, json) = app
        .anfrage(
            Method::POST,
            "/bookmarks",
            Some(&token),
            Some(json!({
                "title": "Mit Notiz",
                "link": "https://example.com",
                "description": "kommt weg"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let pfad = format!("/bookmarks/{}", json["id"].as_str().unwrap());

    // Fehlendes Feld laesst die Beschreibung stehen
    let (status, json) = app
        .anfrage(Method::PATCH, &pfad, Some(&token), Some(json!({ "title": "Neu" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["description"], "kommt weg");

    let (status, json) = app
        .anfrage(Method::PATCH, &pfad, Some(&token), Some(json!({ "description": null })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["description"].is_null(), "{json}");
    assert_eq!(json["title"], "Neu");

    let (_, json) = app.anfrage(Method::GET, &pfad, Some(&token), None).await;
    assert!(json["description"].is_null());
}

#[tokio::test]
async fn nicht_existierende_und_kaputte_ids() {
    let app = test_app().await;
    let (token, _) = app.registrieren("ids@example.com", "pw").await;
    let unbekannt = "/bookmarks/3f2b8c1e-0000-4000-8000-000000000000";

    let (status, _) = app.anfrage(Method::GET, unbekannt, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .anfrage(Method::PATCH, unbekannt, Some(&token), Some(json!({ "title": "X" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.anfrage(Method::DELETE, unbekannt, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, json) = app
        .anfrage(Method::GET, "/bookmarks/keine-uuid", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    fehler_pruefen(&json, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn erstellen_validierung() {
    let app = test_app().await;
    let (token, _) = app.registrieren("valid@example.com", "pw").await;

    let faelle = [
        json!({ "link": "https://example.com" }),
        json!({ "title": "X" }),
        json!({ "title": "", "link": "https://example.com" }),
        json!({ "title": "X", "link": 5 }),
    ];
    for body in faelle {
        let (status, json) = app
            .anfrage(Method::POST, "/bookmarks", Some(&token), Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "Body {body} muss abgelehnt werden");
        fehler_pruefen(&json, StatusCode::BAD_REQUEST);
    }
}
