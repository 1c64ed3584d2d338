//! Teacher and subject seeding.
//!
//! Seeded teacher accounts use the `seed_teacher_` username prefix so
//! `clear-seed` can find them again.

use fake::Fake;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::PgPool;
use std::time::Instant;

use gradebook_core::UserRole;

use super::models::TeacherSeed;

pub const SEED_USERNAME_PREFIX: &str = "seed_teacher_";

const SUBJECT_NAMES: [&str; 12] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "Literature",
    "English",
    "Computer Science",
    "Art",
    "Music",
    "Physical Education",
];

pub fn generate_teachers(count: usize, password_hash: &str) -> Vec<TeacherSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| TeacherSeed {
            username: format!("{}{}", SEED_USERNAME_PREFIX, idx + 1),
            full_name: Name().fake(),
            room_number: (100..400).fake::<u16>().to_string(),
            password_hash: password_hash.to_string(),
        })
        .collect()
}

/// Subject names, suffixed with a number once the built-in list runs out.
pub fn generate_subject_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let base = SUBJECT_NAMES[i % SUBJECT_NAMES.len()];
            match i / SUBJECT_NAMES.len() {
                0 => base.to_string(),
                round => format!("{} {}", base, round + 1),
            }
        })
        .collect()
}

/// Inserts teachers with their accounts and returns the teacher ids.
pub async fn seed_teachers(
    db: &PgPool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👩‍🏫 Seeding {} teachers...", count);

    let teachers = generate_teachers(count, password_hash);
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(teachers.len());

    for teacher in &teachers {
        let user_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO users (username, password_hash, role) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&teacher.username)
        .bind(&teacher.password_hash)
        .bind(UserRole::Teacher.as_str())
        .fetch_one(&mut *tx)
        .await?;

        let teacher_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO teachers (full_name, room_number, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&teacher.full_name)
        .bind(&teacher.room_number)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        ids.push(teacher_id);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Inserts subjects, assigning teachers round-robin, and returns the subject ids.
pub async fn seed_subjects(
    db: &PgPool,
    count: usize,
    teacher_ids: &[i32],
) -> Result<Vec<i32>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📚 Seeding {} subjects...", count);

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(count);

    for (i, name) in generate_subject_names(count).iter().enumerate() {
        let teacher_id = match teacher_ids.len() {
            0 => None,
            n => Some(teacher_ids[i % n]),
        };

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO subjects (name, teacher_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(teacher_id)
        .fetch_one(&mut *tx)
        .await?;

        ids.push(id);
    }

    tx.commit().await?;

    println!(
        "   ✓ Inserted {} subjects in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

/// Deletes seeded teacher accounts; their teacher rows cascade.
pub async fn clear_teachers(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded teachers...");

    let result = sqlx::query("DELETE FROM users WHERE role = $1 AND username LIKE $2")
        .bind(UserRole::Teacher.as_str())
        .bind(format!("{}%", SEED_USERNAME_PREFIX))
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} teacher accounts in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_usernames_are_unique_and_prefixed() {
        let teachers = generate_teachers(5, "hash");
        let mut names: Vec<_> = teachers.iter().map(|t| t.username.clone()).collect();
        names.sort();
        names.dedup();

        assert_eq!(names.len(), 5);
        assert!(names.iter().all(|n| n.starts_with(SEED_USERNAME_PREFIX)));
        assert!(teachers.iter().all(|t| t.password_hash == "hash"));
    }

    #[test]
    fn test_subject_names_wrap_with_suffix() {
        let names = generate_subject_names(SUBJECT_NAMES.len() + 2);

        assert_eq!(names[0], "Mathematics");
        assert_eq!(names[SUBJECT_NAMES.len()], "Mathematics 2");
        assert_eq!(names[SUBJECT_NAMES.len() + 1], "Physics 2");
    }
}
