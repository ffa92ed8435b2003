use anyhow::Result;
use chrono::{DateTime, Utc};
use murmur_types::models::FriendEdge;
use rusqlite::Connection;
use tracing::debug;

use crate::Database;
use crate::models::FriendAdd;
use crate::queries::query_user;

impl Database {
    /// Add the edge `login -> friend`. Adding an existing edge keeps the
    /// first `added_at`.
    pub fn add_friend(&self, login: &str, friend: &str, now: DateTime<Utc>) -> Result<FriendAdd> {
        self.with_tx(|conn| {
            if query_user(conn, friend)?.is_none() {
                return Ok(FriendAdd::UnknownUser);
            }
            if login == friend {
                return Ok(FriendAdd::Myself);
            }

            let inserted = conn.execute(
                "INSERT OR IGNORE INTO friends (login, friend, added_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![login, friend, now],
            )?;
            if inserted == 0 {
                return Ok(FriendAdd::AlreadyFriends);
            }
            debug!("{} added {} as a friend", login, friend);
            Ok(FriendAdd::Added)
        })
    }

    /// Remove the edge `login -> friend`. Returns whether an edge existed;
    /// removing a missing edge is not an error.
    pub fn remove_friend(&self, login: &str, friend: &str) -> Result<bool> {
        self.with_tx(|conn| {
            let removed = conn.execute(
                "DELETE FROM friends WHERE login = ?1 AND friend = ?2",
                (login, friend),
            )?;
            if removed > 0 {
                debug!("{} removed {} from friends", login, friend);
            }
            Ok(removed > 0)
        })
    }

    /// Every edge starting at `login`, unordered.
    pub fn list_friends(&self, login: &str) -> Result<Vec<FriendEdge>> {
        self.with_conn(|conn| query_edges(conn, login))
    }
}

pub(crate) fn query_edges(conn: &Connection, login: &str) -> Result<Vec<FriendEdge>> {
    let mut stmt =
        conn.prepare("SELECT login, friend, added_at FROM friends WHERE login = ?1")?;

    let rows = stmt
        .query_map([login], |row| {
            Ok(FriendEdge {
                login: row.get(0)?,
                friend: row.get(1)?,
                added_at: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Access;
    use crate::test_support::{at, register};

    #[test]
    fn add_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", false);
        register(&db, "bob", false);

        let first = at(1_000);
        assert_eq!(db.add_friend("alice", "bob", first).unwrap(), FriendAdd::Added);
        assert_eq!(
            db.add_friend("alice", "bob", at(2_000)).unwrap(),
            FriendAdd::AlreadyFriends
        );

        let edges = db.list_friends("alice").unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].friend, "bob");
        assert_eq!(edges[0].added_at, first);
    }

    #[test]
    fn remove_missing_edge_is_ok() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", false);
        register(&db, "bob", false);

        assert!(!db.remove_friend("alice", "bob").unwrap());
        assert!(db.list_friends("alice").unwrap().is_empty());

        db.add_friend("alice", "bob", at(1_000)).unwrap();
        assert!(db.remove_friend("alice", "bob").unwrap());
        assert!(!db.remove_friend("alice", "bob").unwrap());
        assert!(db.list_friends("alice").unwrap().is_empty());
    }

    #[test]
    fn edges_are_directed() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", false);
        register(&db, "bob", false);

        db.add_friend("bob", "alice", at(1_000)).unwrap();
        assert!(db.list_friends("alice").unwrap().is_empty());
        assert!(matches!(db.profile_for("bob", "alice").unwrap(), Access::Denied));

        db.add_friend("alice", "bob", at(1_000)).unwrap();
        assert!(matches!(db.profile_for("bob", "alice").unwrap(), Access::Granted(_)));
    }

    #[test]
    fn unknown_and_self() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", true);

        assert_eq!(db.add_friend("alice", "ghost", at(1_000)).unwrap(), FriendAdd::UnknownUser);
        assert_eq!(db.add_friend("alice", "alice", at(1_000)).unwrap(), FriendAdd::Myself);
        assert!(db.list_friends("alice").unwrap().is_empty());
    }
}
