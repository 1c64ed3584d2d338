use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::{AppError, hash_password, verify_password};

use crate::modules::users::model::{ChangePasswordDto, User};

pub struct UserService;

impl UserService {
    #[instrument(skip(db))]
    pub async fn get_user(db: &PgPool, id: i32) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    /// Replaces the password digest after checking the current password.
    #[instrument(skip(db, dto))]
    pub async fn change_password(
        db: &PgPool,
        user_id: i32,
        dto: ChangePasswordDto,
    ) -> Result<(), AppError> {
        let user = Self::get_user(db, user_id).await?;

        if !verify_password(&dto.current_password, &user.password_hash)? {
            return Err(AppError::bad_request(anyhow!("Current password is incorrect")));
        }

        let password_hash = hash_password(&dto.new_password)?;

        sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(&password_hash)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to update password")
            .map_err(AppError::database)?;

        Ok(())
    }
}
