use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::grades::router::init_grades_router;
use crate::modules::reports::router::init_reports_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subjects::router::init_subjects_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use gradebook_config::CorsConfig;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

/// Origins usable alongside credentialed CORS. A `*` entry would make
/// tower-http panic, so it is dropped with a warning.
pub fn cors_origins(config: &CorsConfig) -> Vec<HeaderValue> {
    config
        .allowed_origins
        .iter()
        .filter(|origin| {
            if origin.as_str() == "*" {
                tracing::warn!("Ignoring wildcard CORS origin; credentials are allowed");
                return false;
            }
            true
        })
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(init_auth_router())
        .merge(init_students_router(&state))
        .merge(init_subjects_router(&state))
        .merge(init_teachers_router(&state))
        .merge(init_grades_router(&state))
        .merge(init_reports_router(&state))
        .merge(init_users_router(&state))
        .with_state(state.clone())
        .layer({
            CorsLayer::new()
                .allow_origin(cors_origins(&state.cors_config))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_drop_wildcard() {
        let config = CorsConfig::from_source(|_| Some("*, http://a.test".to_string()));
        assert_eq!(cors_origins(&config), vec![HeaderValue::from_static("http://a.test")]);
    }

    #[test]
    fn test_cors_origins_only_wildcard() {
        let config = CorsConfig::from_source(|_| Some("*".to_string()));
        assert!(cors_origins(&config).is_empty());
    }
}
