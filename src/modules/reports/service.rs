use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use gradebook_core::AppError;

use crate::modules::reports::aggregate;
use crate::modules::reports::model::{
    ClassAverages, ClassPerformance, FailingStudent, GradeFact, TopWorstClasses,
};

pub struct ReportService;

impl ReportService {
    /// Every grade joined with its student and subject, read in one statement.
    #[instrument(skip(db))]
    pub async fn grade_facts(db: &PgPool) -> Result<Vec<GradeFact>, AppError> {
        sqlx::query_as::<_, GradeFact>(
            r#"
            SELECT
                s.id AS student_id,
                s.full_name,
                s.class_name,
                s.user_id AS student_user_id,
                sub.name AS subject_name,
                g.quarter,
                g.value
            FROM grades g
            JOIN students s ON s.id = g.student_id
            JOIN subjects sub ON sub.id = g.subject_id
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch grade facts")
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn failing_students(
        db: &PgPool,
        threshold: f64,
    ) -> Result<Vec<FailingStudent>, AppError> {
        let facts = Self::grade_facts(db).await?;
        Ok(aggregate::failing_students(&facts, threshold))
    }

    #[instrument(skip(db))]
    pub async fn average_by_class(db: &PgPool) -> Result<ClassAverages, AppError> {
        let facts = Self::grade_facts(db).await?;
        Ok(aggregate::average_by_class(&facts))
    }

    #[instrument(skip(db))]
    pub async fn top_and_worst_classes(db: &PgPool) -> Result<TopWorstClasses, AppError> {
        let facts = Self::grade_facts(db).await?;
        Ok(aggregate::top_and_worst_classes(&facts))
    }

    #[instrument(skip(db))]
    pub async fn class_performance(db: &PgPool) -> Result<Vec<ClassPerformance>, AppError> {
        let facts = Self::grade_facts(db).await?;
        Ok(aggregate::class_performance(&facts))
    }

    #[instrument(skip(db))]
    pub async fn students_count(db: &PgPool) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM students")
            .fetch_one(db)
            .await
            .context("Failed to count students")
            .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn teachers_count(db: &PgPool) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM teachers")
            .fetch_one(db)
            .await
            .context("Failed to count teachers")
            .map_err(AppError::database)
    }

    /// Mean of all grades; 0 when there are none.
    #[instrument(skip(db))]
    pub async fn average_grade(db: &PgPool) -> Result<f64, AppError> {
        sqlx::query_scalar::<_, f64>("SELECT COALESCE(AVG(value)::float8, 0) FROM grades")
            .fetch_one(db)
            .await
            .context("Failed to compute average grade")
            .map_err(AppError::database)
    }
}
