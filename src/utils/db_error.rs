//! Classification of database errors the store turns into domain outcomes.

/// Unique constraint on `url.alias`.
pub const URL_ALIAS_CONSTRAINT: &str = "url_alias_key";

/// Unique constraint on `users.username`.
pub const USERS_USERNAME_CONSTRAINT: &str = "users_username_key";

/// Returns true if `e` is a unique violation on the named constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}
