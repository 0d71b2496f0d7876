//! REST-Handler fuer Lesezeichen-Endpunkte

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use merkliste_bookmarks::Lesezeichen;
use merkliste_core::BookmarkId;

use crate::dto::{LesezeichenBearbeitenBody, LesezeichenErstellenBody};
use crate::error::{ApiFehler, ApiResult};
use crate::extract::ValidiertesJson;
use crate::guard::Identitaet;
use crate::state::AppState;

// Eine ID, die keine UUID ist, kann zu keinem Lesezeichen gehoeren
fn id_parsen(id: &str) -> ApiResult<BookmarkId> {
    id.parse()
        .map_err(|_| ApiFehler::NichtGefunden(format!("Lesezeichen nicht gefunden: {id}")))
}

/// GET /bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
) -> ApiResult<Json<Vec<Lesezeichen>>> {
    Ok(Json(state.bookmarks.alle_laden(ich.user_id).await?))
}

/// GET /bookmarks/:id
pub async fn get_bookmark(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
    Path(id): Path<String>,
) -> ApiResult<Json<Lesezeichen>> {
    let id = id_parsen(&id)?;
    Ok(Json(state.bookmarks.laden(ich.user_id, id).await?))
}

/// POST /bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
    ValidiertesJson(body): ValidiertesJson<LesezeichenErstellenBody>,
) -> ApiResult<(StatusCode, Json<Lesezeichen>)> {
    let lesezeichen = state.bookmarks.erstellen(ich.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(lesezeichen)))
}

/// PATCH /bookmarks/:id
pub async fn update_bookmark(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
    Path(id): Path<String>,
    ValidiertesJson(body): ValidiertesJson<LesezeichenBearbeitenBody>,
) -> ApiResult<Json<Lesezeichen>> {
    let id = id_parsen(&id)?;
    let lesezeichen = state.bookmarks.bearbeiten(ich.user_id, id, body.into()).await?;
    Ok(Json(lesezeichen))
}

/// DELETE /bookmarks/:id
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Extension(ich): Extension<Identitaet>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = id_parsen(&id)?;
    state.bookmarks.loeschen(ich.user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
