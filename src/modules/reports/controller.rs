use axum::{Json, extract::State};
use tracing::instrument;

use gradebook_core::AppError;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::reports::model::{
    AverageResponse, ClassAverages, ClassPerformance, CountResponse, FailingStudent,
    TopWorstClasses,
};
use crate::modules::reports::service::ReportService;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/students/failing",
    responses(
        (status = 200, description = "Students with a failing subject average in some quarter", body = Vec<FailingStudent>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Reports"
)]
#[instrument(skip(state))]
pub async fn get_failing_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<FailingStudent>>, AppError> {
    let students =
        ReportService::failing_students(&state.db, state.grading_config.failing_threshold).await?;
    tracing::info!(count = students.len(), "Failing students report generated");
    Ok(Json(students))
}

#[utoipa::path(
    get,
    path = "/grades/average-by-class",
    responses(
        (status = 200, description = "Class → subject → quarter-weighted average", body = ClassAverages),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Reports"
)]
#[instrument(skip(state))]
pub async fn get_average_grades_by_class(
    State(state): State<AppState>,
) -> Result<Json<ClassAverages>, AppError> {
    Ok(Json(ReportService::average_by_class(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/stats/top-worst-classes",
    responses(
        (status = 200, description = "Best and worst class by mean grade", body = TopWorstClasses),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Reports"
)]
#[instrument(skip(state))]
pub async fn get_top_and_worst_classes(
    State(state): State<AppState>,
) -> Result<Json<TopWorstClasses>, AppError> {
    Ok(Json(ReportService::top_and_worst_classes(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/stats/class-performance",
    responses(
        (status = 200, description = "Quarter-weighted average per class", body = Vec<ClassPerformance>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statistics"
)]
#[instrument(skip(state))]
pub async fn get_class_performance(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassPerformance>>, AppError> {
    Ok(Json(ReportService::class_performance(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/stats/students-count",
    responses(
        (status = 200, description = "Number of students", body = CountResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statistics"
)]
#[instrument(skip(state))]
pub async fn get_students_count(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let count = ReportService::students_count(&state.db).await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/stats/teachers-count",
    responses(
        (status = 200, description = "Number of teachers", body = CountResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statistics"
)]
#[instrument(skip(state))]
pub async fn get_teachers_count(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let count = ReportService::teachers_count(&state.db).await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/stats/average-grade",
    responses(
        (status = 200, description = "Mean of all grades, 0 when none exist", body = AverageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Statistics"
)]
#[instrument(skip(state))]
pub async fn get_average_grade(
    State(state): State<AppState>,
) -> Result<Json<AverageResponse>, AppError> {
    let average = ReportService::average_grade(&state.db).await?;
    Ok(Json(AverageResponse { average }))
}
