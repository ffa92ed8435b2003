use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FriendEdge, User};

// -- Errors --

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignInRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// -- Profiles --

/// Public view of a [`User`]: everything except the password hash.
/// `phone` and `image` are left out of the JSON when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub login: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            login: user.login.clone(),
            email: user.email.clone(),
            country_code: user.country_code.clone(),
            is_public: user.is_public,
            phone: user.phone.clone(),
            image: user.image.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: UserProfile,
}

/// PATCH /me/profile. Absent fields are left alone; an empty `phone` or
/// `image` clears the stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub country_code: Option<String>,
    pub is_public: Option<bool>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

// -- Friends --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FriendRequest {
    pub login: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendResponse {
    pub login: String,
    pub added_at: DateTime<Utc>,
}

impl From<FriendEdge> for FriendResponse {
    fn from(edge: FriendEdge) -> Self {
        Self {
            login: edge.friend,
            added_at: edge.added_at,
        }
    }
}

// -- Posts --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewPostRequest {
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    5
}

// -- Countries --

#[derive(Debug, Default, Deserialize)]
pub struct CountryQuery {
    #[serde(default)]
    pub region: Vec<String>,
}
