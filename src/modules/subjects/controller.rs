use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_models::MessageResponse;

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};
use crate::modules::subjects::service::SubjectService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/subjects",
    responses(
        (status = 200, description = "List of subjects", body = Vec<Subject>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, AppError> {
    Ok(Json(SubjectService::get_subjects(&state.db).await?))
}

#[utoipa::path(
    post,
    path = "/subjects",
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created successfully", body = Subject),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state, dto))]
pub async fn create_subject(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSubjectDto>,
) -> Result<(StatusCode, Json<Subject>), AppError> {
    let subject = SubjectService::create_subject(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(subject)))
}

#[utoipa::path(
    put,
    path = "/subjects/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Subject updated successfully", body = Subject),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Subjects"
)]
#[instrument(skip(state, dto))]
pub async fn update_subject(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateSubjectDto>,
) -> Result<Json<Subject>, AppError> {
    Ok(Json(SubjectService::update_subject(&state.db, id, dto).await?))
}

#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - Deputy only", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Subjects"
)]
#[instrument(skip(state))]
pub async fn delete_subject(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    SubjectService::delete_subject(&state.db, id).await?;
    tracing::info!(subject_id = id, "Subject deleted");
    Ok(Json(MessageResponse::new("Subject deleted successfully")))
}
