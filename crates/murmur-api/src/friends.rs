use axum::{
    Extension, Json,
    extract::State,
    response::IntoResponse,
};
use axum_extra::extract::{Query, WithRejection};

use murmur_core::feed::{self, Order, Page};
use murmur_db::FriendAdd;
use murmur_types::api::{FriendRequest, FriendResponse, PageQuery, StatusResponse};

use crate::auth::{AppState, blocking};
use crate::error::ApiError;
use crate::middleware::Session;

/// POST /friends/add. Idempotent; adding yourself is a no-op.
pub async fn add_friend(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(req), _): WithRejection<Json<FriendRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = blocking(&state, move |db| {
        Ok(db.add_friend(&session.login, &req.login, chrono::Utc::now())?)
    })
    .await?;

    match outcome {
        FriendAdd::UnknownUser => Err(ApiError::NotFound("User with this login was not found.")),
        FriendAdd::Added | FriendAdd::AlreadyFriends | FriendAdd::Myself => {
            Ok(Json(StatusResponse::ok()))
        }
    }
}

/// POST /friends/remove. Succeeds whether or not the edge existed.
pub async fn remove_friend(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(req), _): WithRejection<Json<FriendRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    blocking(&state, move |db| Ok(db.remove_friend(&session.login, &req.login)?)).await?;
    Ok(Json(StatusResponse::ok()))
}

/// GET /friends. The caller's friend list, most recently added first.
pub async fn list_friends(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let window = Page::new(query.limit, query.offset)?;

    let edges = blocking(&state, move |db| Ok(db.list_friends(&session.login)?)).await?;
    let edges = feed::page(
        edges,
        window,
        |e| (e.added_at, e.friend.clone()),
        Order::Descending,
    );

    Ok(Json(edges.into_iter().map(FriendResponse::from).collect::<Vec<_>>()))
}
