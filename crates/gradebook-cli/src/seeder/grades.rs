//! Grade seeding.

use fake::Fake;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::GradeSeed;

/// Generates grades for every student, subject and quarter.
///
/// Each student gets a base level in 2..=5 and grades scatter by one point
/// around it, so some (student, subject, quarter) averages land below the
/// failing threshold.
pub fn generate_grades(
    student_ids: &[i32],
    subject_ids: &[i32],
    grades_per_quarter: usize,
) -> Vec<GradeSeed> {
    student_ids
        .par_iter()
        .flat_map(|&student_id| {
            let base: i32 = (2..6).fake();
            let mut grades = Vec::with_capacity(subject_ids.len() * 4 * grades_per_quarter);

            for &subject_id in subject_ids {
                for quarter in 1..=4 {
                    for _ in 0..grades_per_quarter {
                        let offset: i32 = (-1..2).fake();
                        grades.push(GradeSeed {
                            student_id,
                            subject_id,
                            value: (base + offset).clamp(1, 5),
                            quarter,
                        });
                    }
                }
            }

            grades
        })
        .collect()
}

pub async fn seed_grades(
    db: &PgPool,
    student_ids: &[i32],
    subject_ids: &[i32],
    grades_per_quarter: usize,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    let grades = generate_grades(student_ids, subject_ids, grades_per_quarter);
    println!("📝 Seeding {} grades...", grades.len());

    let mut tx = db.begin().await?;

    // 4 params per grade
    const BATCH_SIZE: usize = 2000;

    let mut inserted = 0;
    for chunk in grades.chunks(BATCH_SIZE) {
        inserted += insert_grades_chunk(&mut tx, chunk).await?;
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} grades in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

async fn insert_grades_chunk(
    tx: &mut Transaction<'_, Postgres>,
    grades: &[GradeSeed],
) -> Result<u64, Box<dyn std::error::Error>> {
    if grades.is_empty() {
        return Ok(0);
    }

    let mut query =
        String::from("INSERT INTO grades (student_id, subject_id, value, quarter) VALUES ");
    for i in 0..grades.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let param_idx = i * 4;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${})",
            param_idx + 1,
            param_idx + 2,
            param_idx + 3,
            param_idx + 4
        ));
    }

    let mut q = sqlx::query(&query);
    for grade in grades {
        q = q
            .bind(grade.student_id)
            .bind(grade.subject_id)
            .bind(grade.value)
            .bind(grade.quarter);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_count_and_ranges() {
        let grades = generate_grades(&[1, 2, 3], &[10, 20], 2);

        assert_eq!(grades.len(), 3 * 2 * 4 * 2);
        assert!(grades.iter().all(|g| (1..=5).contains(&g.value)));
        assert!(grades.iter().all(|g| (1..=4).contains(&g.quarter)));
    }

    #[test]
    fn test_every_quarter_covered() {
        let grades = generate_grades(&[1], &[10], 1);
        let mut quarters: Vec<i32> = grades.iter().map(|g| g.quarter).collect();
        quarters.sort();
        assert_eq!(quarters, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_no_subjects_no_grades() {
        assert!(generate_grades(&[1, 2], &[], 3).is_empty());
    }
}
