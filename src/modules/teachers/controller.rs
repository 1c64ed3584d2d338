use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::{MessageResponse, Student};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::teachers::model::{CreateTeacherDto, StudentGrades, Teacher, UpdateTeacherDto};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/teachers",
    responses(
        (status = 200, description = "List of teachers", body = Vec<Teacher>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    Ok(Json(TeacherService::get_teachers(&state.db).await?))
}

#[utoipa::path(
    post,
    path = "/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher and account created", body = Teacher),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 409, description = "A user with this name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = TeacherService::create_teacher(
        &state.db,
        dto,
        &state.grading_config.teacher_temp_password,
    )
    .await?;
    tracing::info!(teacher_id = teacher.id, user_id = teacher.user_id, "Teacher created");
    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    put,
    path = "/teachers/{id}",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated successfully", body = Teacher),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state, dto))]
pub async fn update_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    Ok(Json(TeacherService::update_teacher(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/teachers/{id}",
    params(
        ("id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher and account deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;
    tracing::info!(teacher_id = id, "Teacher deleted");
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}

#[utoipa::path(
    get,
    path = "/teacher/my-students",
    responses(
        (status = 200, description = "Students graded in the caller's subjects", body = Vec<Student>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Teacher only", body = ErrorResponse),
        (status = 404, description = "No teacher profile for the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_my_students(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(
        TeacherService::get_my_students(&state.db, auth_user.user_id()).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/teacher/my-students/grades",
    responses(
        (status = 200, description = "Grades in the caller's subjects, grouped by student", body = Vec<StudentGrades>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Teacher only", body = ErrorResponse),
        (status = 404, description = "No teacher profile for the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_my_students_grades(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<StudentGrades>>, AppError> {
    Ok(Json(
        TeacherService::get_my_students_grades(&state.db, auth_user.user_id()).await?,
    ))
}
