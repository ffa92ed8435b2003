use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

use crate::countries::COUNTRIES;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn
        .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Running migration v1 (initial schema)");
        conn.execute_batch(
            "
            CREATE TABLE countries (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT NOT NULL,
                alpha2      TEXT NOT NULL UNIQUE,
                alpha3      TEXT NOT NULL,
                region      TEXT
            );

            CREATE TABLE users (
                login           TEXT PRIMARY KEY,
                password_hash   TEXT NOT NULL,
                email           TEXT NOT NULL UNIQUE,
                country_code    TEXT NOT NULL,
                is_public       INTEGER NOT NULL,
                phone           TEXT UNIQUE,
                image           TEXT
            );

            CREATE TABLE tokens (
                value       TEXT PRIMARY KEY,
                login       TEXT NOT NULL REFERENCES users(login),
                issued_at   TEXT NOT NULL
            );

            CREATE INDEX idx_tokens_login ON tokens(login);

            CREATE TABLE friends (
                login       TEXT NOT NULL REFERENCES users(login),
                friend      TEXT NOT NULL REFERENCES users(login),
                added_at    TEXT NOT NULL,
                PRIMARY KEY (login, friend)
            );

            CREATE TABLE posts (
                id              TEXT PRIMARY KEY,
                author          TEXT NOT NULL REFERENCES users(login),
                content         TEXT NOT NULL,
                tags            TEXT NOT NULL,
                created_at      TEXT NOT NULL,
                likes_count     INTEGER NOT NULL DEFAULT 0 CHECK (likes_count >= 0),
                dislikes_count  INTEGER NOT NULL DEFAULT 0 CHECK (dislikes_count >= 0)
            );

            CREATE INDEX idx_posts_author ON posts(author, created_at);

            CREATE TABLE marks (
                post_id     TEXT NOT NULL REFERENCES posts(id),
                login       TEXT NOT NULL REFERENCES users(login),
                liked       INTEGER NOT NULL,
                PRIMARY KEY (post_id, login)
            );

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
        seed_countries(conn)?;
    }

    info!("Database migrations complete");
    Ok(())
}

fn seed_countries(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO countries (name, alpha2, alpha3, region) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for &(name, alpha2, alpha3, region) in COUNTRIES {
        let region = (!region.is_empty()).then_some(region);
        stmt.execute((name, alpha2, alpha3, region))?;
    }
    info!("Seeded {} countries", COUNTRIES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use murmur_core::validate::REGIONS;

    #[test]
    fn full_directory_is_seeded() {
        let db = Database::open_in_memory().unwrap();
        let all = db.list_countries(&[]).unwrap();
        assert_eq!(all.len(), 249);

        for code in ["PL", "UA", "TH", "SE", "RU", "US"] {
            assert!(db.get_country(code).unwrap().is_some(), "{code} missing");
        }
        let poland = db.get_country("PL").unwrap().unwrap();
        assert_eq!(poland.alpha3, "POL");
        assert_eq!(poland.region.as_deref(), Some("Europe"));
    }

    #[test]
    fn regions_are_known_or_absent() {
        let db = Database::open_in_memory().unwrap();
        let all = db.list_countries(&[]).unwrap();
        assert!(all
            .iter()
            .all(|c| c.region.as_deref().is_none_or(|r| REGIONS.contains(&r))));

        let antarctica = db.get_country("AQ").unwrap().unwrap();
        assert_eq!(antarctica.region, None);

        let europe = db.list_countries(&["Europe".to_string()]).unwrap();
        assert_eq!(europe.len(), 51);
        assert!(europe.iter().any(|c| c.alpha2 == "SE"));
    }

    #[test]
    fn rerun_does_not_duplicate() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| super::run(conn)).unwrap();
        assert_eq!(db.list_countries(&[]).unwrap().len(), 249);
    }
}
