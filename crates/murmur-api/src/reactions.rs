use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};

use murmur_types::models::Direction;

use crate::auth::{AppState, blocking};
use crate::error::ApiError;
use crate::middleware::Session;

pub async fn like_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    react(&state, session, post_id, Direction::Like).await
}

pub async fn dislike_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    react(&state, session, post_id, Direction::Dislike).await
}

async fn react(
    state: &AppState,
    session: Session,
    post_id: String,
    direction: Direction,
) -> Result<impl IntoResponse + use<>, ApiError> {
    let post = blocking(state, move |db| Ok(db.react(&session.login, &post_id, direction)?))
        .await?
        .ok_or(ApiError::NotFound("Post was not found or is not available."))?;
    Ok(Json(post))
}
