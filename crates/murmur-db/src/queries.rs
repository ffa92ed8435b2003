use crate::friends::query_edges;
use crate::models::{Access, CreateUser, Feed, NewPost, NewUser, ProfileChanges, UpdateProfile};
use crate::tokens::delete_tokens_for;
use crate::Database;
use anyhow::{Result, anyhow};
use murmur_core::visibility::can_view;
use murmur_types::models::{Country, Post, User};
use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use tracing::{debug, info};

const USER_COLUMNS: &str = "login, password_hash, email, country_code, is_public, phone, image";
const POST_COLUMNS: &str = "id, content, author, tags, created_at, likes_count, dislikes_count";

impl Database {
    // -- Countries --

    /// All countries ordered by alpha2, optionally restricted to `regions`.
    pub fn list_countries(&self, regions: &[String]) -> Result<Vec<Country>> {
        let countries = self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT name, alpha2, alpha3, region FROM countries ORDER BY alpha2",
            )?;
            let rows = stmt
                .query_map([], country_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        if regions.is_empty() {
            return Ok(countries);
        }
        Ok(countries
            .into_iter()
            .filter(|c| c.region.as_ref().is_some_and(|r| regions.contains(r)))
            .collect())
    }

    pub fn get_country(&self, alpha2: &str) -> Result<Option<Country>> {
        self.with_conn(|conn| query_country(conn, alpha2))
    }

    // -- Users --

    /// Insert a user unless login, email or phone is already in use.
    pub fn create_user(&self, user: &NewUser) -> Result<CreateUser> {
        self.with_tx(|conn| {
            let taken: bool = conn.query_row(
                "SELECT EXISTS(
                    SELECT 1 FROM users
                    WHERE login = ?1 OR email = ?2 OR (?3 IS NOT NULL AND phone = ?3)
                 )",
                (&user.login, &user.email, user.phone.as_deref()),
                |row| row.get(0),
            )?;
            if taken {
                return Ok(CreateUser::Taken);
            }

            conn.execute(
                "INSERT INTO users (login, password_hash, email, country_code, is_public, phone, image)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                rusqlite::params![
                    user.login,
                    user.password_hash,
                    user.email,
                    user.country_code,
                    user.is_public,
                    user.phone,
                    user.image,
                ],
            )?;
            info!("User {} registered", user.login);
            Ok(CreateUser::Created)
        })
    }

    pub fn get_user(&self, login: &str) -> Result<Option<User>> {
        self.with_conn(|conn| query_user(conn, login))
    }

    pub fn update_profile(&self, login: &str, changes: &ProfileChanges) -> Result<UpdateProfile> {
        self.with_tx(|conn| {
            if let Some(Some(phone)) = &changes.phone {
                let taken: bool = conn.query_row(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE phone = ?1 AND login != ?2)",
                    (phone, login),
                    |row| row.get(0),
                )?;
                if taken {
                    return Ok(UpdateProfile::PhoneTaken);
                }
            }

            if let Some(code) = &changes.country_code {
                conn.execute("UPDATE users SET country_code = ?1 WHERE login = ?2", (code, login))?;
            }
            if let Some(is_public) = changes.is_public {
                conn.execute("UPDATE users SET is_public = ?1 WHERE login = ?2", (is_public, login))?;
            }
            if let Some(phone) = &changes.phone {
                conn.execute("UPDATE users SET phone = ?1 WHERE login = ?2", (phone.as_deref(), login))?;
            }
            if let Some(image) = &changes.image {
                conn.execute("UPDATE users SET image = ?1 WHERE login = ?2", (image.as_deref(), login))?;
            }

            let user = query_user(conn, login)?.ok_or_else(|| anyhow!("User not found: {}", login))?;
            Ok(UpdateProfile::Updated(user))
        })
    }

    /// Store a new password hash and drop every session of the user.
    /// Returns how many sessions were revoked.
    pub fn change_password(&self, login: &str, password_hash: &str) -> Result<usize> {
        self.with_tx(|conn| {
            conn.execute(
                "UPDATE users SET password_hash = ?1 WHERE login = ?2",
                (password_hash, login),
            )?;
            let revoked = delete_tokens_for(conn, login)?;
            info!("Password changed for {}, {} sessions revoked", login, revoked);
            Ok(revoked)
        })
    }

    /// `target`'s profile if `viewer` may see it.
    pub fn profile_for(&self, viewer: &str, target: &str) -> Result<Access> {
        self.with_conn(|conn| check_access(conn, viewer, target))
    }

    // -- Posts --

    pub fn create_post(&self, post: &NewPost) -> Result<Post> {
        let tags = serde_json::to_string(&post.tags)?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO posts (id, content, author, tags, created_at, likes_count, dislikes_count)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0, 0)",
                rusqlite::params![post.id, post.content, post.author, tags, post.created_at],
            )?;
            debug!("Post {} created by {}", post.id, post.author);
            Ok(Post {
                id: post.id.clone(),
                content: post.content.clone(),
                author: post.author.clone(),
                tags: post.tags.clone(),
                created_at: post.created_at,
                likes_count: 0,
                dislikes_count: 0,
            })
        })
    }

    /// The post, if it exists and its author's visibility rules let `viewer`
    /// see it.
    pub fn visible_post(&self, viewer: &str, post_id: &str) -> Result<Option<Post>> {
        self.with_conn(|conn| {
            let Some(post) = query_post(conn, post_id)? else {
                return Ok(None);
            };
            match check_access(conn, viewer, &post.author)? {
                Access::Granted(_) => Ok(Some(post)),
                Access::Denied | Access::Missing => Ok(None),
            }
        })
    }

    /// Every post of `author`, unordered, if `viewer` may see them.
    pub fn posts_of(&self, viewer: &str, author: &str) -> Result<Feed> {
        self.with_conn(|conn| match check_access(conn, viewer, author)? {
            Access::Granted(user) => Ok(Feed::Posts(query_posts_by_author(conn, &user.login)?)),
            Access::Denied => Ok(Feed::Denied),
            Access::Missing => Ok(Feed::Missing),
        })
    }
}

/// Apply the visibility rules for `viewer` looking at `target`.
pub(crate) fn check_access(conn: &Connection, viewer: &str, target: &str) -> Result<Access> {
    let Some(user) = query_user(conn, target)? else {
        return Ok(Access::Missing);
    };
    // Only private targets seen by someone else need the edge list.
    let edges = if viewer == user.login || user.is_public {
        Vec::new()
    } else {
        query_edges(conn, &user.login)?
    };
    if can_view(viewer, &user, &edges) {
        Ok(Access::Granted(user))
    } else {
        Ok(Access::Denied)
    }
}

pub(crate) fn query_user(conn: &Connection, login: &str) -> Result<Option<User>> {
    let mut stmt = conn.prepare(&format!("SELECT {USER_COLUMNS} FROM users WHERE login = ?1"))?;
    let row = stmt.query_row([login], user_from_row).optional()?;
    Ok(row)
}

fn query_country(conn: &Connection, alpha2: &str) -> Result<Option<Country>> {
    let mut stmt =
        conn.prepare("SELECT name, alpha2, alpha3, region FROM countries WHERE alpha2 = ?1")?;
    let row = stmt.query_row([alpha2], country_from_row).optional()?;
    Ok(row)
}

pub(crate) fn query_post(conn: &Connection, id: &str) -> Result<Option<Post>> {
    let mut stmt = conn.prepare(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1"))?;
    let row = stmt.query_row([id], post_from_row).optional()?;
    Ok(row)
}

fn query_posts_by_author(conn: &Connection, author: &str) -> Result<Vec<Post>> {
    let mut stmt = conn.prepare(&format!("SELECT {POST_COLUMNS} FROM posts WHERE author = ?1"))?;
    let rows = stmt
        .query_map([author], post_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        login: row.get(0)?,
        password_hash: row.get(1)?,
        email: row.get(2)?,
        country_code: row.get(3)?,
        is_public: row.get(4)?,
        phone: row.get(5)?,
        image: row.get(6)?,
    })
}

fn country_from_row(row: &Row) -> rusqlite::Result<Country> {
    Ok(Country {
        name: row.get(0)?,
        alpha2: row.get(1)?,
        alpha3: row.get(2)?,
        region: row.get(3)?,
    })
}

fn post_from_row(row: &Row) -> rusqlite::Result<Post> {
    let tags: String = row.get(3)?;
    let tags = serde_json::from_str(&tags)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;
    Ok(Post {
        id: row.get(0)?,
        content: row.get(1)?,
        author: row.get(2)?,
        tags,
        created_at: row.get(4)?,
        likes_count: row.get(5)?,
        dislikes_count: row.get(6)?,
    })
}

/// Extension trait for optional query results
pub(crate) trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
