use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_db::is_foreign_key_violation;

use crate::modules::subjects::model::{CreateSubjectDto, Subject, UpdateSubjectDto};

fn map_write_error(err: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&err) {
        return AppError::bad_request(anyhow!("Referenced teacher does not exist"));
    }
    AppError::database(anyhow::Error::from(err))
}

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db))]
    pub async fn get_subjects(db: &PgPool) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>("SELECT id, name, teacher_id FROM subjects ORDER BY id")
            .fetch_all(db)
            .await
            .context("Failed to fetch subjects")
            .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_subjects_by_teacher(
        db: &PgPool,
        teacher_id: i32,
    ) -> Result<Vec<Subject>, AppError> {
        sqlx::query_as::<_, Subject>(
            "SELECT id, name, teacher_id FROM subjects WHERE teacher_id = $1 ORDER BY name, id",
        )
        .bind(teacher_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch subjects by teacher")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_subject(db: &PgPool, dto: CreateSubjectDto) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name, teacher_id) VALUES ($1, $2) RETURNING id, name, teacher_id",
        )
        .bind(&dto.name)
        .bind(dto.teacher_id)
        .fetch_one(db)
        .await
        .map_err(map_write_error)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_subject(
        db: &PgPool,
        id: i32,
        dto: UpdateSubjectDto,
    ) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(
            r#"
            UPDATE subjects
            SET name = COALESCE($1, name),
                teacher_id = COALESCE($2, teacher_id)
            WHERE id = $3
            RETURNING id, name, teacher_id
            "#,
        )
        .bind(dto.name)
        .bind(dto.teacher_id)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| AppError::not_found(anyhow!("Subject not found")))
    }

    #[instrument(skip(db))]
    pub async fn delete_subject(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete subject")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Subject not found")));
        }

        Ok(())
    }
}
