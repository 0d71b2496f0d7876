//! REST-Handler fuer das eigene Benutzerprofil

use axum::{extract::State, Extension, Json};
use merkliste_auth::Benutzer;

use crate::dto::ProfilBody;
use crate::error::ApiResult;
use crate::extract::ValidiertesJson;
use crate::guard::Identitaet;
use crate::state::AppState;

/// GET /users/me
pub async fn me(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
) -> ApiResult<Json<Benutzer>> {
    Ok(Json(state.auth.profil_laden(ich.user_id).await?))
}

/// PATCH /users
pub async fn update_me(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
    ValidiertesJson(body): ValidiertesJson<ProfilBody>,
) -> ApiResult<Json<Benutzer>> {
    let benutzer = state.auth.profil_bearbeiten(ich.user_id, body.into()).await?;
    Ok(Json(benutzer))
}
