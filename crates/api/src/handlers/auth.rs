//! REST-Handler fuer Registrierung und Login

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::{AuthAntwort, AuthBody};
use crate::error::ApiResult;
use crate::extract::ValidiertesJson;
use crate::state::AppState;

/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidiertesJson(body): ValidiertesJson<AuthBody>,
) -> ApiResult<(StatusCode, Json<AuthAntwort>)> {
    let anmeldung = state.auth.registrieren(&body.email, &body.password).await?;
    Ok((StatusCode::CREATED, Json(anmeldung.into())))
}

/// POST /auth/signin
pub async fn signin(
    State(state): State<AppState>,
    ValidiertesJson(body): ValidiertesJson<AuthBody>,
) -> ApiResult<Json<AuthAntwort>> {
    let anmeldung = state.auth.anmelden(&body.email, &body.password).await?;
    Ok(Json(anmeldung.into()))
}
