use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use gradebook_auth::create_access_token;
use gradebook_config::JwtConfig;
use gradebook_core::{AppError, UserRole, hash_password, verify_password_or_dummy};
use gradebook_db::is_unique_violation;

use crate::middleware::auth::token_error_to_app_error;

use super::model::{LoginRequest, LoginResponse, RegisterRequestDto, User};

/// Returned for an unknown username and for a wrong password alike.
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

fn user_exists() -> AppError {
    AppError::conflict(anyhow!("User already exists"))
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let role: UserRole = dto.role.parse().map_err(AppError::bad_request)?;

        if Self::find_user_by_username(db, &dto.username).await?.is_some() {
            return Err(user_exists());
        }

        let password_hash = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(&dto.username)
        .bind(&password_hash)
        .bind(role.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            // Lost a race with a concurrent registration of the same name
            if is_unique_violation(&e) {
                return user_exists();
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        tracing::info!(user_id = user.id, role = %user.role, "User registered");
        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = Self::find_user_by_username(db, &dto.username).await?;
        let valid = verify_password_or_dummy(
            &dto.password,
            user.as_ref().map(|u| u.password_hash.as_str()),
        )?;

        let user = match user {
            Some(user) if valid => user,
            _ => {
                tracing::warn!("Login failed: invalid credentials");
                return Err(AppError::unauthorized(INVALID_CREDENTIALS));
            }
        };

        let token =
            create_access_token(user.id, user.role, jwt_config).map_err(token_error_to_app_error)?;

        tracing::info!(user_id = user.id, role = %user.role, "User logged in");
        Ok(LoginResponse { token, user })
    }

    #[instrument(skip(db))]
    pub async fn find_user_by_username(
        db: &PgPool,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, created_at FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by username")
        .map_err(AppError::database)
    }
}
