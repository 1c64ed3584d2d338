use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::middleware::role::require_deputy;
use crate::modules::subjects::controller::{
    create_subject, delete_subject, get_subjects, update_subject,
};
use crate::state::AppState;

pub fn init_subjects_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/subjects", get(get_subjects).post(create_subject))
        .route("/subjects/{id}", put(update_subject))
        .route(
            "/subjects/{id}",
            delete(delete_subject)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_deputy)),
        )
}
