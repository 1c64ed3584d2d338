use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::{AppError, UserRole, hash_password};
use gradebook_db::is_unique_violation;
use gradebook_models::{Student, Subject, TeacherGradeRow};

use crate::modules::reports::aggregate::{dedupe_roster, group_grades_by_student};
use crate::modules::students::service::StudentService;
use crate::modules::subjects::service::SubjectService;
use crate::modules::teachers::model::{CreateTeacherDto, StudentGrades, Teacher, UpdateTeacherDto};

fn teacher_not_found() -> AppError {
    AppError::not_found(anyhow!("Teacher not found"))
}

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db))]
    pub async fn get_teachers(db: &PgPool) -> Result<Vec<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, full_name, room_number, user_id FROM teachers ORDER BY id",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch teachers")
        .map_err(AppError::database)
    }

    /// Creates the backing `teacher` account and the teacher row in one transaction.
    ///
    /// The account's username is the teacher's full name and its password is
    /// `temp_password`, to be changed by the teacher through `/me/password`.
    #[instrument(skip(db, dto, temp_password), fields(full_name = %dto.full_name))]
    pub async fn create_teacher(
        db: &PgPool,
        dto: CreateTeacherDto,
        temp_password: &str,
    ) -> Result<Teacher, AppError> {
        let password_hash = hash_password(temp_password)?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let user_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&dto.full_name)
        .bind(&password_hash)
        .bind(UserRole::Teacher.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return AppError::conflict(anyhow!(
                    "A user named '{}' already exists",
                    dto.full_name
                ));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            INSERT INTO teachers (full_name, room_number, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, room_number, user_id
            "#,
        )
        .bind(&dto.full_name)
        .bind(&dto.room_number)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await
        .context("Failed to insert teacher")
        .map_err(AppError::database)?;

        tx.commit()
            .await
            .context("Failed to commit teacher creation")
            .map_err(AppError::database)?;

        Ok(teacher)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_teacher(
        db: &PgPool,
        id: i32,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(
            r#"
            UPDATE teachers
            SET full_name = COALESCE($1, full_name),
                room_number = COALESCE($2, room_number)
            WHERE id = $3
            RETURNING id, full_name, room_number, user_id
            "#,
        )
        .bind(dto.full_name)
        .bind(dto.room_number)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update teacher")
        .map_err(AppError::database)?
        .ok_or_else(teacher_not_found)
    }

    /// Deletes the teacher and its backing account. Owned subjects are kept, unassigned.
    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: i32) -> Result<(), AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let user_id =
            sqlx::query_scalar::<_, i32>("DELETE FROM teachers WHERE id = $1 RETURNING user_id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .context("Failed to delete teacher")
                .map_err(AppError::database)?
                .ok_or_else(teacher_not_found)?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete teacher account")
            .map_err(AppError::database)?;

        tx.commit()
            .await
            .context("Failed to commit teacher deletion")
            .map_err(AppError::database)?;

        Ok(())
    }

    /// Resolves an authenticated user to its teacher record.
    #[instrument(skip(db))]
    pub async fn get_teacher_by_user_id(db: &PgPool, user_id: i32) -> Result<Teacher, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT id, full_name, room_number, user_id FROM teachers WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher by user ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Teacher profile not found")))
    }

    #[instrument(skip(db))]
    pub async fn get_subjects_by_teacher_user(
        db: &PgPool,
        user_id: i32,
    ) -> Result<Vec<Subject>, AppError> {
        let teacher = Self::get_teacher_by_user_id(db, user_id).await?;
        SubjectService::get_subjects_by_teacher(db, teacher.id).await
    }

    /// Students holding at least one grade in a subject the teacher owns.
    #[instrument(skip(db))]
    pub async fn get_my_students(db: &PgPool, user_id: i32) -> Result<Vec<Student>, AppError> {
        let subjects = Self::get_subjects_by_teacher_user(db, user_id).await?;

        let mut students = Vec::new();
        for subject in &subjects {
            students.extend(StudentService::get_students_by_subject(db, subject.id).await?);
        }

        let roster = dedupe_roster(students);
        tracing::debug!(subjects = subjects.len(), students = roster.len(), "Roster resolved");
        Ok(roster)
    }

    /// Grades in the teacher's subjects, grouped by student.
    #[instrument(skip(db))]
    pub async fn get_my_students_grades(
        db: &PgPool,
        user_id: i32,
    ) -> Result<Vec<StudentGrades>, AppError> {
        let teacher = Self::get_teacher_by_user_id(db, user_id).await?;

        let rows = sqlx::query_as::<_, TeacherGradeRow>(
            r#"
            SELECT g.id, g.student_id, s.full_name AS student_name, g.subject_id, g.value, g.quarter
            FROM grades g
            JOIN subjects sub ON sub.id = g.subject_id
            JOIN students s ON s.id = g.student_id
            WHERE sub.teacher_id = $1
            ORDER BY s.full_name, g.student_id, g.subject_id, g.quarter, g.id
            "#,
        )
        .bind(teacher.id)
        .fetch_all(db)
        .await
        .context("Failed to fetch grades of teacher's students")
        .map_err(AppError::database)?;

        Ok(group_grades_by_student(rows))
    }
}
