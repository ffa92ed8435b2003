use anyhow::{Result, anyhow};
use murmur_core::reaction::{MarkChange, MarkState};
use murmur_types::models::{Direction, Mark, Post};
use rusqlite::Connection;
use tracing::debug;

use crate::Database;
use crate::models::Access;
use crate::queries::{OptionalExt, check_access, query_post};

impl Database {
    /// Apply `viewer`'s like or dislike to a post and return the post with
    /// its updated counters.
    ///
    /// The visibility check, the mark read, the mark write and the counter
    /// update all happen in one transaction. `None` means the post does not
    /// exist or the viewer may not see it.
    pub fn react(&self, viewer: &str, post_id: &str, direction: Direction) -> Result<Option<Post>> {
        self.with_tx(|conn| {
            let Some(post) = query_post(conn, post_id)? else {
                return Ok(None);
            };
            if !matches!(check_access(conn, viewer, &post.author)?, Access::Granted(_)) {
                return Ok(None);
            }

            let mark = query_mark(conn, post_id, viewer)?;
            let transition = MarkState::of(mark.as_ref()).apply(direction);

            match transition.change {
                MarkChange::Unchanged => return Ok(Some(post)),
                MarkChange::Create { liked } => {
                    conn.execute(
                        "INSERT INTO marks (post_id, login, liked) VALUES (?1, ?2, ?3)",
                        (post_id, viewer, liked),
                    )?;
                }
                MarkChange::Flip { liked } => {
                    conn.execute(
                        "UPDATE marks SET liked = ?1 WHERE post_id = ?2 AND login = ?3",
                        (liked, post_id, viewer),
                    )?;
                }
            }

            conn.execute(
                "UPDATE posts
                 SET likes_count = likes_count + ?1, dislikes_count = dislikes_count + ?2
                 WHERE id = ?3",
                (transition.likes_delta, transition.dislikes_delta, post_id),
            )?;

            debug!(
                "{} {:?} on {}: {:?} -> {:?}",
                viewer,
                direction,
                post_id,
                MarkState::of(mark.as_ref()),
                transition.next
            );

            query_post(conn, post_id)?
                .map(Some)
                .ok_or_else(|| anyhow!("Post vanished mid-transaction: {}", post_id))
        })
    }

    pub fn get_mark(&self, post_id: &str, login: &str) -> Result<Option<Mark>> {
        self.with_conn(|conn| query_mark(conn, post_id, login))
    }
}

fn query_mark(conn: &Connection, post_id: &str, login: &str) -> Result<Option<Mark>> {
    let mut stmt =
        conn.prepare("SELECT post_id, login, liked FROM marks WHERE post_id = ?1 AND login = ?2")?;
    let row = stmt
        .query_row((post_id, login), |row| {
            Ok(Mark {
                post_id: row.get(0)?,
                login: row.get(1)?,
                liked: row.get(2)?,
            })
        })
        .optional()?;
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use crate::models::NewPost;
    use crate::test_support::{at, register};

    fn new_post(db: &Database, id: &str, author: &str) -> Post {
        db.create_post(&NewPost {
            id: id.into(),
            author: author.into(),
            content: "hello".into(),
            tags: vec!["greeting".into()],
            created_at: at(0),
        })
        .unwrap()
    }

    fn mark_sums(db: &Database, post_id: &str) -> (i64, i64) {
        db.with_conn(|conn| {
            Ok(conn.query_row(
                "SELECT COALESCE(SUM(liked), 0), COALESCE(SUM(1 - liked), 0) FROM marks WHERE post_id = ?1",
                [post_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?)
        })
        .unwrap()
    }

    #[test]
    fn like_then_dislike_moves_one_unit() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", true);
        register(&db, "bob", true);
        new_post(&db, "p1", "alice");

        let post = db.react("bob", "p1", Direction::Like).unwrap().unwrap();
        assert_eq!((post.likes_count, post.dislikes_count), (1, 0));
        assert!(db.get_mark("p1", "bob").unwrap().unwrap().liked);

        let post = db.react("bob", "p1", Direction::Like).unwrap().unwrap();
        assert_eq!((post.likes_count, post.dislikes_count), (1, 0));

        let post = db.react("bob", "p1", Direction::Dislike).unwrap().unwrap();
        assert_eq!((post.likes_count, post.dislikes_count), (0, 1));
        assert!(!db.get_mark("p1", "bob").unwrap().unwrap().liked);
    }

    #[test]
    fn counters_match_marks_across_viewers() {
        let db = Database::open_in_memory().unwrap();
        for login in ["alice", "bob", "carol", "dave"] {
            register(&db, login, true);
        }
        new_post(&db, "p1", "alice");

        let script = [
            ("bob", Direction::Like),
            ("carol", Direction::Dislike),
            ("alice", Direction::Like),
            ("bob", Direction::Dislike),
            ("dave", Direction::Dislike),
            ("carol", Direction::Like),
            ("carol", Direction::Like),
            ("dave", Direction::Dislike),
        ];
        for (viewer, direction) in script {
            let post = db.react(viewer, "p1", direction).unwrap().unwrap();
            assert_eq!((post.likes_count, post.dislikes_count), mark_sums(&db, "p1"));
        }

        let post = db.visible_post("alice", "p1").unwrap().unwrap();
        // alice + carol like, bob + dave dislike
        assert_eq!((post.likes_count, post.dislikes_count), (2, 2));
    }

    #[test]
    fn concurrent_viewers_keep_counters_consistent() {
        const VIEWERS: usize = 16;
        const ROUNDS: usize = 20;

        let db = Arc::new(Database::open_in_memory().unwrap());
        register(&db, "alice", true);
        let viewers: Vec<String> = (0..VIEWERS).map(|i| format!("viewer-{i}")).collect();
        for viewer in &viewers {
            register(&db, viewer, true);
        }
        new_post(&db, "p1", "alice");

        let handles: Vec<_> = viewers
            .into_iter()
            .enumerate()
            .map(|(i, viewer)| {
                let db = Arc::clone(&db);
                thread::spawn(move || {
                    for round in 0..ROUNDS {
                        // odd viewers end on a like, even viewers on a dislike
                        let direction = if (i + round) % 2 == 0 {
                            Direction::Like
                        } else {
                            Direction::Dislike
                        };
                        db.react(&viewer, "p1", direction).unwrap().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let post = db.visible_post("alice", "p1").unwrap().unwrap();
        assert_eq!((post.likes_count, post.dislikes_count), mark_sums(&db, "p1"));
        assert_eq!(post.likes_count + post.dislikes_count, VIEWERS as i64);
        assert_eq!((post.likes_count, post.dislikes_count), (8, 8));
    }

    #[test]
    fn hidden_or_missing_post_is_none() {
        let db = Database::open_in_memory().unwrap();
        register(&db, "alice", false);
        register(&db, "bob", true);
        new_post(&db, "p1", "alice");

        assert!(db.react("bob", "p1", Direction::Like).unwrap().is_none());
        assert!(db.react("bob", "nope", Direction::Like).unwrap().is_none());
        assert!(db.get_mark("p1", "bob").unwrap().is_none());

        db.add_friend("alice", "bob", at(1)).unwrap();
        let post = db.react("bob", "p1", Direction::Like).unwrap().unwrap();
        assert_eq!(post.likes_count, 1);
    }
}
