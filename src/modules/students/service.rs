use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::AppError;
use gradebook_db::is_foreign_key_violation;

use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};

fn map_write_error(err: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&err) {
        return AppError::bad_request(anyhow!("Referenced user does not exist"));
    }
    AppError::database(anyhow::Error::from(err))
}

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn get_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, full_name, class_name, user_id FROM students ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: i32) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, full_name, class_name, user_id FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (full_name, class_name, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, class_name, user_id
            "#,
        )
        .bind(&dto.full_name)
        .bind(&dto.class_name)
        .bind(dto.user_id)
        .fetch_one(db)
        .await
        .map_err(map_write_error)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i32,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET full_name = COALESCE($1, full_name),
                class_name = COALESCE($2, class_name),
                user_id = COALESCE($3, user_id)
            WHERE id = $4
            RETURNING id, full_name, class_name, user_id
            "#,
        )
        .bind(dto.full_name)
        .bind(dto.class_name)
        .bind(dto.user_id)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| AppError::not_found(anyhow!("Student not found")))
    }

    /// Grades of the student are removed with it.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete student")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Student not found")));
        }

        Ok(())
    }

    /// Distinct students with at least one grade in `subject_id`, ordered by name.
    #[instrument(skip(db))]
    pub async fn get_students_by_subject(
        db: &PgPool,
        subject_id: i32,
    ) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT DISTINCT s.id, s.full_name, s.class_name, s.user_id
            FROM students s
            JOIN grades g ON g.student_id = s.id
            WHERE g.subject_id = $1
            ORDER BY s.full_name, s.id
            "#,
        )
        .bind(subject_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch students by subject")
        .map_err(AppError::database)
    }
}
