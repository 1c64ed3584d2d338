use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::MessageResponse;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::grades::model::{CreateGradeDto, Grade, GradeWithSubject, UpdateGradeDto};
use crate::modules::grades::service::GradeService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/grades",
    responses(
        (status = 200, description = "All grades", body = Vec<Grade>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_grades(State(state): State<AppState>) -> Result<Json<Vec<Grade>>, AppError> {
    Ok(Json(GradeService::get_grades(&state.db).await?))
}

#[utoipa::path(
    get,
    path = "/grades/student/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Grades of the student with subject names", body = Vec<GradeWithSubject>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn get_student_grades(
    State(state): State<AppState>,
    ValidatedPath(student_id): ValidatedPath<i32>,
) -> Result<Json<Vec<GradeWithSubject>>, AppError> {
    Ok(Json(
        GradeService::get_grades_by_student(&state.db, student_id).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/grades",
    request_body = CreateGradeDto,
    responses(
        (status = 201, description = "Grade created successfully", body = Grade),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy or teacher only", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn create_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateGradeDto>,
) -> Result<(StatusCode, Json<Grade>), AppError> {
    let grade = GradeService::create_grade(&state.db, dto).await?;
    tracing::info!(
        grade_id = grade.id,
        created_by = auth_user.user_id(),
        "Grade created"
    );
    Ok((StatusCode::CREATED, Json(grade)))
}

#[utoipa::path(
    put,
    path = "/grades/{id}",
    params(
        ("id" = i32, Path, description = "Grade ID")
    ),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "Grade updated successfully", body = Grade),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy or teacher only", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state, dto))]
pub async fn update_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateGradeDto>,
) -> Result<Json<Grade>, AppError> {
    let grade = GradeService::update_grade(&state.db, id, dto).await?;
    tracing::info!(grade_id = id, updated_by = auth_user.user_id(), "Grade updated");
    Ok(Json(grade))
}

#[utoipa::path(
    delete,
    path = "/grades/{id}",
    params(
        ("id" = i32, Path, description = "Grade ID")
    ),
    responses(
        (status = 200, description = "Grade deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 404, description = "Grade not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Grades"
)]
#[instrument(skip(state))]
pub async fn delete_grade(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let grade = GradeService::delete_grade(&state.db, id).await?;
    tracing::info!(
        grade_id = grade.id,
        student_id = grade.student_id,
        subject_id = grade.subject_id,
        value = grade.value,
        quarter = grade.quarter,
        deleted_by = auth_user.user_id(),
        "Grade deleted"
    );
    Ok(Json(MessageResponse::new("Grade deleted successfully")))
}
