use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use tracing::info;

use murmur_core::validate;
use murmur_db::{Access, ProfileChanges, UpdateProfile};
use murmur_types::api::{StatusResponse, UpdatePasswordRequest, UpdateProfileRequest, UserProfile};

use crate::auth::{AppState, blocking, hash_password, verify_password};
use crate::error::ApiError;
use crate::middleware::Session;

/// Empty string means "clear"; anything else is the new value.
fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| if v.is_empty() { None } else { Some(v) })
}

pub async fn get_my_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, ApiError> {
    let user = blocking(&state, move |db| Ok(db.get_user(&session.login)?))
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(Json(UserProfile::from(&user)))
}

pub async fn update_my_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateProfileRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    validate::profile_update(&req)?;

    let user = blocking(&state, move |db| {
        if let Some(code) = &req.country_code {
            if db.get_country(code)?.is_none() {
                return Err(ApiError::InvalidInput("unknown country code".to_string()));
            }
        }

        let changes = ProfileChanges {
            country_code: req.country_code,
            is_public: req.is_public,
            phone: clearable(req.phone),
            image: clearable(req.image),
        };
        match db.update_profile(&session.login, &changes)? {
            UpdateProfile::Updated(user) => Ok(user),
            UpdateProfile::PhoneTaken => Err(ApiError::Conflict),
        }
    })
    .await?;

    Ok(Json(UserProfile::from(&user)))
}

pub async fn update_password(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    WithRejection(Json(req), _): WithRejection<Json<UpdatePasswordRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    if !validate::password(&req.new_password) {
        return Err(ApiError::InvalidInput("invalid newPassword".to_string()));
    }

    let login = session.login.clone();
    let revoked = blocking(&state, move |db| {
        let user = db.get_user(&session.login)?.ok_or(ApiError::Unauthorized)?;
        if !verify_password(&req.old_password, &user.password_hash)? {
            return Err(ApiError::WrongPassword);
        }
        let hash = hash_password(&req.new_password)?;
        Ok(db.change_password(&user.login, &hash)?)
    })
    .await?;

    info!("{} changed password, {} sessions ended", login, revoked);
    Ok(Json(StatusResponse::ok()))
}

/// GET /profiles/{login}. Unknown users and hidden profiles are both 403 so
/// the response does not reveal whether the login exists.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(login): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let access = blocking(&state, move |db| Ok(db.profile_for(&session.login, &login)?)).await?;
    match access {
        Access::Granted(user) => Ok(Json(UserProfile::from(&user))),
        Access::Denied | Access::Missing => Err(ApiError::Forbidden),
    }
}
