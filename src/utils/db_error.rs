//! Classification of sqlx driver errors.

/// SQLite result codes meaning "try again": BUSY, LOCKED and their extended forms.
const SQLITE_TRANSIENT_CODES: &[&str] = &["5", "6", "261", "262", "517", "518", "773"];

/// Returns true if the error is a unique violation on `links.short_code`.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    // SQLite reports the column, not the constraint name.
    matches!(db_err.constraint(), Some("links_short_code_key"))
        || db_err.message().contains("links.short_code")
}

/// Returns true for failures that may clear up on their own: pool exhaustion,
/// lost connections, busy or locked database files.
pub fn is_transient(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| is_transient_sqlite_code(&code)),
        _ => false,
    }
}

/// Returns true if a SQLite result code (primary or extended) means "try again".
fn is_transient_sqlite_code(code: &str) -> bool {
    SQLITE_TRANSIENT_CODES.contains(&code)
}
