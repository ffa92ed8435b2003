//! Inputs to and outcomes of store operations. Entities themselves live in
//! `murmur_types::models`.

use chrono::{DateTime, Utc};
use murmur_types::models::{Post, User};

pub struct NewUser {
    pub login: String,
    pub password_hash: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    pub phone: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUser {
    Created,
    /// Login, email or phone already belongs to someone.
    Taken,
}

/// Partial profile update. For `phone`/`image`, `Some(None)` clears the field.
#[derive(Debug, Default)]
pub struct ProfileChanges {
    pub country_code: Option<String>,
    pub is_public: Option<bool>,
    pub phone: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

#[derive(Debug)]
pub enum UpdateProfile {
    Updated(User),
    PhoneTaken,
}

pub struct NewPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendAdd {
    Added,
    AlreadyFriends,
    /// Listing yourself is accepted but stores nothing.
    Myself,
    UnknownUser,
}

/// Outcome of checking a viewer against a target user.
#[derive(Debug)]
pub enum Access {
    Granted(User),
    Denied,
    Missing,
}

/// A user's posts as seen by a viewer.
#[derive(Debug)]
pub enum Feed {
    Posts(Vec<Post>),
    Denied,
    Missing,
}
