use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use murmur_core::session::parse_bearer;

use crate::auth::{AppState, blocking};
use crate::error::ApiError;

/// The authenticated caller, attached to every request that passed
/// [`require_auth`].
#[derive(Debug, Clone)]
pub struct Session {
    pub login: String,
}

/// Resolve the bearer token from the Authorization header into a [`Session`].
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_bearer)
        .ok_or(ApiError::Unauthorized)?
        .to_string();

    let ttl = state.session_ttl;
    let token = blocking(&state, move |db| {
        Ok(db.authenticate(&token, chrono::Utc::now(), ttl)?)
    })
    .await?
    .ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(Session { login: token.login });
    Ok(next.run(req).await)
}
