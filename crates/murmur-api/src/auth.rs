use std::sync::Arc;

use anyhow::anyhow;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::{SaltString, rand_core::OsRng}};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::WithRejection;
use chrono::Duration;
use tracing::{error, info};

use murmur_core::validate;
use murmur_db::{CreateUser, Database, NewUser};
use murmur_types::api::{ProfileResponse, RegisterRequest, SignInRequest, TokenResponse, UserProfile};

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub session_ttl: Duration,
}

/// Run blocking store work off the async runtime.
pub async fn blocking<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(anyhow!("blocking task failed"))
        })?
}

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    validate::registration(&req)?;

    let profile = blocking(&state, move |db| {
        if db.get_country(&req.country_code)?.is_none() {
            return Err(ApiError::InvalidInput("unknown country code".to_string()));
        }

        let user = NewUser {
            password_hash: hash_password(&req.password)?,
            login: req.login,
            email: req.email,
            country_code: req.country_code,
            is_public: req.is_public,
            phone: req.phone.filter(|p| !p.is_empty()),
            image: req.image.filter(|i| !i.is_empty()),
        };
        match db.create_user(&user)? {
            CreateUser::Created => Ok(UserProfile {
                login: user.login,
                email: user.email,
                country_code: user.country_code,
                is_public: user.is_public,
                phone: user.phone,
                image: user.image,
            }),
            CreateUser::Taken => Err(ApiError::Conflict),
        }
    })
    .await?;

    Ok((StatusCode::CREATED, Json(ProfileResponse { profile })))
}

pub async fn sign_in(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SignInRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let token = blocking(&state, move |db| {
        let user = db.get_user(&req.login)?.ok_or(ApiError::BadCredentials)?;
        if !verify_password(&req.password, &user.password_hash)? {
            return Err(ApiError::BadCredentials);
        }
        Ok(db.issue_token(&user.login, chrono::Utc::now())?)
    })
    .await?;

    info!("{} signed in", token.login);
    Ok(Json(TokenResponse { token: token.value }))
}

/// Argon2id with a fresh random salt, as a PHC string.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed_hash =
        PasswordHash::new(stored).map_err(|e| anyhow!("Corrupt password hash: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hash = hash_password("Secret1").unwrap();
        assert_ne!(hash, "Secret1");
        assert!(verify_password("Secret1", &hash).unwrap());
        assert!(!verify_password("Secret2", &hash).unwrap());
    }

    #[test]
    fn same_password_different_salt() {
        assert_ne!(hash_password("Secret1").unwrap(), hash_password("Secret1").unwrap());
    }

    #[test]
    fn corrupt_hash_is_an_error() {
        assert!(verify_password("Secret1", "not-a-phc-string").is_err());
    }
}
