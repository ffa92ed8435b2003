use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use murmur_types::api::StatusResponse;

use crate::auth::{self, AppState};
use crate::middleware::require_auth;
use crate::{countries, friends, posts, profiles, reactions};

/// Every route, mounted under `/api`.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/ping", get(ping))
        .route("/countries", get(countries::list_countries))
        .route("/countries/{alpha2}", get(countries::get_country))
        .route("/auth/register", post(auth::register))
        .route("/auth/sign-in", post(auth::sign_in));

    let protected_routes = Router::new()
        .route("/me/profile", get(profiles::get_my_profile).patch(profiles::update_my_profile))
        .route("/me/updatePassword", post(profiles::update_password))
        .route("/profiles/{login}", get(profiles::get_profile))
        .route("/friends", get(friends::list_friends))
        .route("/friends/add", post(friends::add_friend))
        .route("/friends/remove", post(friends::remove_friend))
        .route("/posts/new", post(posts::new_post))
        .route("/posts/feed/my", get(posts::get_my_feed))
        .route("/posts/feed/{login}", get(posts::get_feed))
        .route("/posts/{post_id}", get(posts::get_post))
        .route("/posts/{post_id}/like", post(reactions::like_post))
        .route("/posts/{post_id}/dislike", post(reactions::dislike_post))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(state)
}

async fn ping() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
