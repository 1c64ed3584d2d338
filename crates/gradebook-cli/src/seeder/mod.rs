//! Database seeding for development and demos.
//!
//! [`seed_all`] creates classes of students, teachers with login accounts,
//! subjects assigned to those teachers, and grades for every student in every
//! subject over all four quarters. [`clear_all`] removes the school data again
//! while keeping deputy accounts.

mod grades;
mod models;
mod students;
mod teachers;

pub use grades::{generate_grades, seed_grades};
pub use models::{GradeSeed, SeedConfig, StudentSeed, TeacherSeed};
pub use students::{generate_class_names, generate_students, seed_students};
pub use teachers::{
    SEED_USERNAME_PREFIX, clear_teachers, generate_subject_names, generate_teachers,
    seed_subjects, seed_teachers,
};

use gradebook_core::hash_password;
use sqlx::PgPool;
use std::time::Instant;

/// Password of every seeded teacher account.
pub const SEED_PASSWORD: &str = "password123";

pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} classes, {} students, {} teachers, {} subjects (~{} grades)\n",
        config.classes,
        config.total_students(),
        config.teachers,
        config.subjects,
        config.total_grades()
    );

    let password_hash =
        hash_password(SEED_PASSWORD).map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let class_names = generate_class_names(config.classes);
    let student_ids = seed_students(db, &class_names, config.students_per_class).await?;
    let teacher_ids = seed_teachers(db, config.teachers, &password_hash).await?;
    let subject_ids = seed_subjects(db, config.subjects, &teacher_ids).await?;
    seed_grades(db, &student_ids, &subject_ids, config.grades_per_quarter).await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    println!(
        "   Teacher logins: {}1..{}{} / {}",
        SEED_USERNAME_PREFIX, SEED_USERNAME_PREFIX, config.teachers, SEED_PASSWORD
    );

    Ok(())
}

/// Removes grades, subjects, students and seeded teacher accounts.
pub async fn clear_all(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing school data...");

    let mut tx = db.begin().await?;
    let grades = sqlx::query("DELETE FROM grades")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let subjects = sqlx::query("DELETE FROM subjects")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    let students = sqlx::query("DELETE FROM students")
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    println!(
        "   ✓ Deleted {} grades, {} subjects, {} students",
        grades, subjects, students
    );

    clear_teachers(db).await?;

    println!("\n✅ Cleared in {:?}", start_time.elapsed());
    Ok(())
}
