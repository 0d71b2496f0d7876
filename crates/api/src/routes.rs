//! Route-Definitionen fuer die REST-API

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use merkliste_observability::timing_middleware;

use crate::guard::sitzung_pruefen;
use crate::handlers;
use crate::state::AppState;

/// Erstellt den vollstaendigen Router
///
/// Die geschuetzten Routen laufen durch den Sitzungs-Guard; `/auth/*` und
/// `/health` sind oeffentlich.
pub fn router(state: AppState) -> Router {
    let oeffentlich = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signin", post(handlers::auth::signin));

    let geschuetzt = Router::new()
        // Benutzer
        .route("/users/me", get(handlers::users::me))
        .route("/users", patch(handlers::users::update_me))
        // Lesezeichen
        .route(
            "/bookmarks",
            get(handlers::bookmarks::list_bookmarks).post(handlers::bookmarks::create_bookmark),
        )
        .route(
            "/bookmarks/:id",
            get(handlers::bookmarks::get_bookmark)
                .patch(handlers::bookmarks::update_bookmark)
                .delete(handlers::bookmarks::delete_bookmark),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), sitzung_pruefen));

    Router::new()
        .merge(oeffentlich)
        .merge(geschuetzt)
        .layer(middleware::from_fn(timing_middleware))
        .with_state(state)
}
