//! Data models for database seeding configuration.

/// Seed data for a student row.
pub struct StudentSeed {
    pub full_name: String,
    pub class_name: String,
}

/// Seed data for a teacher and the login account behind it.
pub struct TeacherSeed {
    pub username: String,
    pub full_name: String,
    pub room_number: String,
    pub password_hash: String,
}

/// Seed data for a single grade.
pub struct GradeSeed {
    pub student_id: i32,
    pub subject_id: i32,
    pub value: i32,
    pub quarter: i32,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub classes: usize,
    pub students_per_class: usize,
    pub teachers: usize,
    pub subjects: usize,
    pub grades_per_quarter: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            classes: 6,
            students_per_class: 20,
            teachers: 5,
            subjects: 8,
            grades_per_quarter: 3,
        }
    }
}

impl SeedConfig {
    /// Creates a configuration for `classes` classes with default sizes.
    pub fn new(classes: usize) -> Self {
        Self {
            classes,
            ..Default::default()
        }
    }

    pub fn with_students_per_class(mut self, students_per_class: usize) -> Self {
        self.students_per_class = students_per_class;
        self
    }

    pub fn with_teachers(mut self, teachers: usize) -> Self {
        self.teachers = teachers;
        self
    }

    pub fn with_subjects(mut self, subjects: usize) -> Self {
        self.subjects = subjects;
        self
    }

    pub fn with_grades_per_quarter(mut self, grades_per_quarter: usize) -> Self {
        self.grades_per_quarter = grades_per_quarter;
        self
    }

    pub fn total_students(&self) -> usize {
        self.classes * self.students_per_class
    }

    /// Every student gets `grades_per_quarter` grades in every subject for all four quarters.
    pub fn total_grades(&self) -> usize {
        self.total_students() * self.subjects * self.grades_per_quarter * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let config = SeedConfig::new(2)
            .with_students_per_class(10)
            .with_subjects(3)
            .with_grades_per_quarter(2);

        assert_eq!(config.total_students(), 20);
        assert_eq!(config.total_grades(), 20 * 3 * 2 * 4);
    }
}
