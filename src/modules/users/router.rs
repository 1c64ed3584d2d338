use axum::{Router, middleware, routing::put};

use crate::middleware::auth::require_auth;
use crate::modules::users::controller::change_password;
use crate::state::AppState;

pub fn init_users_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me/password", put(change_password))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}
