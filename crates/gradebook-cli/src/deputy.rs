use gradebook_core::{UserRole, hash_password};
use sqlx::PgPool;

/// Creates a deputy account and returns its user id.
///
/// Fails if the username is already taken.
pub async fn create_deputy(
    db: &PgPool,
    username: &str,
    password: &str,
) -> Result<i32, Box<dyn std::error::Error>> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username must not be empty".into());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".into());
    }

    let password_hash =
        hash_password(password).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (username, password_hash, role)
         VALUES ($1, $2, $3)
         ON CONFLICT (username) DO NOTHING
         RETURNING id",
    )
    .bind(username)
    .bind(&password_hash)
    .bind(UserRole::Deputy.as_str())
    .fetch_optional(db)
    .await?;

    user_id.ok_or_else(|| format!("User '{}' already exists", username).into())
}
