use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::middleware::role::require_deputy;
use crate::modules::students::controller::{
    create_student, delete_student, get_students, update_student,
};
use crate::state::AppState;

pub fn init_students_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/students", get(get_students).post(create_student))
        .route("/students/{id}", put(update_student))
        .route(
            "/students/{id}",
            delete(delete_student)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_deputy)),
        )
}
