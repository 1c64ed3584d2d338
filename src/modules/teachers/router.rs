use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::middleware::role::{require_deputy, require_teacher};
use crate::modules::teachers::controller::{
    create_teacher, delete_teacher, get_my_students, get_my_students_grades, get_teachers,
    update_teacher,
};
use crate::state::AppState;

pub fn init_teachers_router(state: &AppState) -> Router<AppState> {
    let management = Router::new()
        .route("/teachers", post(create_teacher))
        .route("/teachers/{id}", put(update_teacher).merge(delete(delete_teacher)))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_deputy));

    let own_roster = Router::new()
        .route("/teacher/my-students", get(get_my_students))
        .route("/teacher/my-students/grades", get(get_my_students_grades))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_teacher));

    Router::new()
        .route("/teachers", get(get_teachers))
        .merge(management)
        .merge(own_roster)
}
