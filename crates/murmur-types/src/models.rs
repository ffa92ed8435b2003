use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub login: String,
    /// Argon2 PHC string. Never leaves the server.
    pub password_hash: String,
    pub email: String,
    pub country_code: String,
    pub is_public: bool,
    pub phone: Option<String>,
    pub image: Option<String>,
}

/// A bearer session. `value` is the opaque string clients send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub login: String,
    pub value: String,
    pub issued_at: DateTime<Utc>,
}

/// Directed edge: `login` has listed `friend` as a friend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendEdge {
    pub login: String,
    pub friend: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub likes_count: i64,
    pub dislikes_count: i64,
}

/// One viewer's reaction to one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub post_id: String,
    pub login: String,
    pub liked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Like,
    Dislike,
}
