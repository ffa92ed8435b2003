use anyhow::{Result, bail};
use chrono::{DateTime, Duration, Utc};
use murmur_core::session::{self, TokenStatus};
use murmur_types::models::Token;
use rusqlite::{Connection, ErrorCode};
use tracing::{debug, info};

use crate::Database;
use crate::queries::OptionalExt;

/// A 256-bit value colliding is not expected; this only bounds the loop.
const ISSUE_ATTEMPTS: usize = 3;

impl Database {
    /// Start a new session for `login`.
    pub fn issue_token(&self, login: &str, now: DateTime<Utc>) -> Result<Token> {
        self.with_conn(|conn| {
            for _ in 0..ISSUE_ATTEMPTS {
                let value = session::generate_token_value();
                let inserted = conn.execute(
                    "INSERT INTO tokens (value, login, issued_at) VALUES (?1, ?2, ?3)",
                    rusqlite::params![value, login, now],
                );
                match inserted {
                    Ok(_) => {
                        info!("Session issued for {}", login);
                        return Ok(Token {
                            login: login.to_string(),
                            value,
                            issued_at: now,
                        });
                    }
                    Err(rusqlite::Error::SqliteFailure(e, _))
                        if e.code == ErrorCode::ConstraintViolation =>
                    {
                        debug!("Token value collision, regenerating");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            bail!("Could not issue a unique token for {}", login)
        })
    }

    /// Exact-match lookup, expired or not.
    pub fn resolve_token(&self, value: &str) -> Result<Option<Token>> {
        self.with_conn(|conn| query_token(conn, value))
    }

    /// Resolve and validate in one step. An expired token is deleted on the
    /// spot; the caller only learns that the token is not usable.
    pub fn authenticate(&self, value: &str, now: DateTime<Utc>, ttl: Duration) -> Result<Option<Token>> {
        self.with_tx(|conn| {
            let Some(token) = query_token(conn, value)? else {
                return Ok(None);
            };
            match session::validate(&token, now, ttl) {
                TokenStatus::Valid => Ok(Some(token)),
                TokenStatus::Expired => {
                    conn.execute("DELETE FROM tokens WHERE value = ?1", [value])?;
                    debug!("Expired session of {} removed", token.login);
                    Ok(None)
                }
            }
        })
    }

    /// Drop every session of `login`. Returns how many were removed.
    pub fn revoke_all(&self, login: &str) -> Result<usize> {
        self.with_tx(|conn| delete_tokens_for(conn, login))
    }
}

pub(crate) fn delete_tokens_for(conn: &Connection, login: &str) -> Result<usize> {
    Ok(conn.execute("DELETE FROM tokens WHERE login = ?1", [login])?)
}

fn query_token(conn: &Connection, value: &str) -> Result<Option<Token>> {
    let mut stmt = conn.prepare("SELECT login, value, issued_at FROM tokens WHERE value = ?1")?;
    let row = stmt
        .query_row([value], |row| {
            Ok(Token {
                login: row.get(0)?,
                value: row.get(1)?,
                issued_at: row.get(2)?,
            })
        })
        .optional()?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, register};
    use murmur_core::session::default_session_ttl;

    #[test]
    fn issue_then_authenticate() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", true);

        let token = db.issue_token("alice", at(0)).unwrap();
        let found = db.authenticate(&token.value, at(60), default_session_ttl()).unwrap();
        assert_eq!(found, Some(token));
    }

    #[test]
    fn expiry_boundary_deletes_token() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", true);
        let ttl = default_session_ttl();

        let token = db.issue_token("alice", at(0)).unwrap();
        let almost = at(0) + ttl - Duration::seconds(1);
        assert!(db.authenticate(&token.value, almost, ttl).unwrap().is_some());

        assert!(db.authenticate(&token.value, at(0) + ttl, ttl).unwrap().is_none());
        // lazily deleted, gone even for a later lookup with a fresh clock
        assert!(db.resolve_token(&token.value).unwrap().is_none());
    }

    #[test]
    fn unknown_token_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.authenticate("nope", at(0), default_session_ttl()).unwrap().is_none());
    }

    #[test]
    fn revoke_all_sessions() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", true);
        register(&db, "bob", true);

        let a1 = db.issue_token("alice", at(0)).unwrap();
        let a2 = db.issue_token("alice", at(1)).unwrap();
        let b1 = db.issue_token("bob", at(2)).unwrap();
        assert_ne!(a1.value, a2.value);

        assert_eq!(db.revoke_all("alice").unwrap(), 2);
        assert!(db.resolve_token(&a1.value).unwrap().is_none());
        assert!(db.resolve_token(&a2.value).unwrap().is_none());
        assert!(db.resolve_token(&b1.value).unwrap().is_some());
    }

    #[test]
    fn password_change_revokes_sessions() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", true);
        let token = db.issue_token("alice", at(0)).unwrap();

        assert_eq!(db.change_password("alice", "new-hash").unwrap(), 1);
        assert!(db.resolve_token(&token.value).unwrap().is_none());
        assert_eq!(db.get_user("alice").unwrap().unwrap().password_hash, "new-hash");
    }
}
