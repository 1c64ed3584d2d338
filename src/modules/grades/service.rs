use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_db::is_foreign_key_violation;

use crate::modules::grades::model::{CreateGradeDto, Grade, GradeWithSubject, UpdateGradeDto};
use crate::modules::students::service::StudentService;

fn map_write_error(err: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&err) {
        return AppError::bad_request(anyhow!("Referenced student or subject does not exist"));
    }
    AppError::database(anyhow::Error::from(err))
}

fn grade_not_found() -> AppError {
    AppError::not_found(anyhow!("Grade not found"))
}

pub struct GradeService;

impl GradeService {
    #[instrument(skip(db))]
    pub async fn get_grades(db: &PgPool) -> Result<Vec<Grade>, AppError> {
        sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, subject_id, value, quarter FROM grades ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch grades")
        .map_err(AppError::database)
    }

    /// Grades of one student with subject names, ordered by subject then quarter.
    #[instrument(skip(db))]
    pub async fn get_grades_by_student(
        db: &PgPool,
        student_id: i32,
    ) -> Result<Vec<GradeWithSubject>, AppError> {
        StudentService::get_student_by_id(db, student_id).await?;

        sqlx::query_as::<_, GradeWithSubject>(
            r#"
            SELECT g.id, g.student_id, g.subject_id, sub.name AS subject_name, g.value, g.quarter
            FROM grades g
            JOIN subjects sub ON sub.id = g.subject_id
            WHERE g.student_id = $1
            ORDER BY sub.name, g.quarter, g.id
            "#,
        )
        .bind(student_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch student grades")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_grade(db: &PgPool, dto: CreateGradeDto) -> Result<Grade, AppError> {
        sqlx::query_as::<_, Grade>(
            r#"
            INSERT INTO grades (student_id, subject_id, value, quarter)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_id, subject_id, value, quarter
            "#,
        )
        .bind(dto.student_id)
        .bind(dto.subject_id)
        .bind(dto.value)
        .bind(dto.quarter)
        .fetch_one(db)
        .await
        .map_err(map_write_error)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_grade(db: &PgPool, id: i32, dto: UpdateGradeDto) -> Result<Grade, AppError> {
        sqlx::query_as::<_, Grade>(
            r#"
            UPDATE grades
            SET value = COALESCE($1, value),
                quarter = COALESCE($2, quarter)
            WHERE id = $3
            RETURNING id, student_id, subject_id, value, quarter
            "#,
        )
        .bind(dto.value)
        .bind(dto.quarter)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update grade")
        .map_err(AppError::database)?
        .ok_or_else(grade_not_found)
    }

    /// Reads the grade under a row lock and deletes it in the same transaction.
    ///
    /// Returns the deleted grade. A grade removed concurrently is reported as not found.
    #[instrument(skip(db))]
    pub async fn delete_grade(db: &PgPool, id: i32) -> Result<Grade, AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let grade = sqlx::query_as::<_, Grade>(
            "SELECT id, student_id, subject_id, value, quarter FROM grades WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .context("Failed to fetch grade")
        .map_err(AppError::database)?
        .ok_or_else(grade_not_found)?;

        let result = sqlx::query("DELETE FROM grades WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete grade")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(grade_not_found());
        }

        tx.commit()
            .await
            .context("Failed to commit grade deletion")
            .map_err(AppError::database)?;

        Ok(grade)
    }
}
