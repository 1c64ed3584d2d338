use axum::{Router, middleware, routing::get};

use crate::middleware::auth::require_auth;
use crate::middleware::role::require_deputy;
use crate::modules::reports::controller::{
    get_average_grade, get_average_grades_by_class, get_class_performance, get_failing_students,
    get_students_count, get_teachers_count, get_top_and_worst_classes,
};
use crate::state::AppState;

/// `/stats/average-grades` and `/stats/failing-students` are aliases of the
/// deputy reports under `/grades` and `/students`.
pub fn init_reports_router(state: &AppState) -> Router<AppState> {
    let deputy_reports = Router::new()
        .route("/students/failing", get(get_failing_students))
        .route("/stats/failing-students", get(get_failing_students))
        .route("/grades/average-by-class", get(get_average_grades_by_class))
        .route("/stats/average-grades", get(get_average_grades_by_class))
        .route("/stats/top-worst-classes", get(get_top_and_worst_classes))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_deputy));

    let dashboard = Router::new()
        .route("/stats/students-count", get(get_students_count))
        .route("/stats/teachers-count", get(get_teachers_count))
        .route("/stats/average-grade", get(get_average_grade))
        .route("/stats/class-performance", get(get_class_performance))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    deputy_reports.merge(dashboard)
}
