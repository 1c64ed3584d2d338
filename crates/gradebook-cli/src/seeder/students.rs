//! Student seeding.

use fake::Fake;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::StudentSeed;

/// Class names in the `5A, 5B, 5C, 6A, ...` style.
pub fn generate_class_names(count: usize) -> Vec<String> {
    const SECTIONS: [char; 3] = ['A', 'B', 'C'];

    (0..count)
        .map(|i| format!("{}{}", 5 + i / SECTIONS.len(), SECTIONS[i % SECTIONS.len()]))
        .collect()
}

pub fn generate_students(class_names: &[String], students_per_class: usize) -> Vec<StudentSeed> {
    class_names
        .par_iter()
        .flat_map(|class_name| {
            (0..students_per_class)
                .map(|_| StudentSeed {
                    full_name: Name().fake(),
                    class_name: class_name.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_students(
    db: &PgPool,
    class_names: &[String],
    students_per_class: usize,
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🎓 Seeding {} students ({} per class)...",
        class_names.len() * students_per_class,
        students_per_class
    );

    let students = generate_students(class_names, students_per_class);

    let mut tx = db.begin().await?;
    const BATCH_SIZE: usize = 1000;
    let mut ids = Vec::with_capacity(students.len());
    for chunk in students.chunks(BATCH_SIZE) {
        ids.extend(insert_students_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    if students.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO students (full_name, class_name) VALUES ");
    for i in 0..students.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${}, ${})", i * 2 + 1, i * 2 + 2));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for student in students {
        q = q.bind(&student.full_name).bind(&student.class_name);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}
