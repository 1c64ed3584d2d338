use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::middleware::auth::require_auth;
use crate::middleware::role::{require_deputy, require_grade_writer};
use crate::modules::grades::controller::{
    create_grade, delete_grade, get_grades, get_student_grades, update_grade,
};
use crate::state::AppState;

pub fn init_grades_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/grades",
            get(get_grades)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .route(
            "/grades",
            post(create_grade).route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_grade_writer,
            )),
        )
        .route(
            "/grades/student/{id}",
            get(get_student_grades)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .route(
            "/grades/{id}",
            put(update_grade).route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_grade_writer,
            )),
        )
        .route(
            "/grades/{id}",
            delete(delete_grade)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_deputy)),
        )
}
