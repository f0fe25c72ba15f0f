use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};

use crate::error::Result;

fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Register a user. Returns false if the username is already taken.
pub fn add_user(conn: &Connection, username: &str, password: &str) -> Result<bool> {
    let inserted = conn.execute(
        "INSERT OR IGNORE INTO users (username, password_hash) VALUES (?1, ?2)",
        rusqlite::params![username, hash_password(password)],
    )?;
    Ok(inserted > 0)
}

/// Check a username/password pair. Unknown users and wrong passwords
/// both come back false; the caller gets no hint which it was.
pub fn validate_user(conn: &Connection, username: &str, password: &str) -> Result<bool> {
    let stored: Option<String> = conn
        .query_row(
            "SELECT password_hash FROM users WHERE username = ?1",
            [username],
            |row| row.get(0),
        )
        .optional()?;
    Ok(stored.as_deref() == Some(hash_password(password).as_str()))
}
