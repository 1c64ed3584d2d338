use sqlx::PgPool;

use gradebook_config::{CorsConfig, GradingConfig, JwtConfig};
use gradebook_db::init_db_pool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub grading_config: GradingConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        grading_config: GradingConfig::from_env(),
    }
}
