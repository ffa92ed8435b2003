use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::{Query, WithRejection};
use uuid::Uuid;

use murmur_core::feed::{self, Order, Page};
use murmur_core::validate;
use murmur_db::{Feed, NewPost};
use murmur_types::api::{NewPostRequest, PageQuery};
use murmur_types::models::Post;

use crate::auth::{AppState, blocking};
use crate::error::ApiError;
use crate::middleware::Session;

const POST_NOT_FOUND: &str = "Post was not found or is not available.";
const FEED_NOT_FOUND: &str = "User was not found or their posts are not available.";

pub async fn new_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(req), _): WithRejection<Json<NewPostRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    validate::new_post(&req)?;

    let post = NewPost {
        id: Uuid::new_v4().to_string(),
        author: session.login,
        content: req.content,
        tags: req.tags,
        created_at: chrono::Utc::now(),
    };
    let post = blocking(&state, move |db| Ok(db.create_post(&post)?)).await?;

    Ok(Json(post))
}

/// GET /posts/{post_id}. A post hidden by its author's privacy settings is
/// reported exactly like a missing one.
pub async fn get_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let post = blocking(&state, move |db| Ok(db.visible_post(&session.login, &post_id)?))
        .await?
        .ok_or(ApiError::NotFound(POST_NOT_FOUND))?;
    Ok(Json(post))
}

pub async fn get_my_feed(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let author = session.login.clone();
    feed_of(&state, session, author, query).await
}

pub async fn get_feed(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(login): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    feed_of(&state, session, login, query).await
}

/// `author`'s posts as `session` may see them, newest first.
async fn feed_of(
    state: &AppState,
    session: Session,
    author: String,
    query: PageQuery,
) -> Result<Json<Vec<Post>>, ApiError> {
    let window = Page::new(query.limit, query.offset)?;

    let posts = match blocking(state, move |db| Ok(db.posts_of(&session.login, &author)?)).await? {
        Feed::Posts(posts) => posts,
        Feed::Denied | Feed::Missing => return Err(ApiError::NotFound(FEED_NOT_FOUND)),
    };

    Ok(Json(feed::page(
        posts,
        window,
        |p| (p.created_at, p.id.clone()),
        Order::Descending,
    )))
}
