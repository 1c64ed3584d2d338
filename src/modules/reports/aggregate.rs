//! In-memory folds behind the reporting endpoints.
//!
//! Every report is computed from one snapshot of [`GradeFact`] rows, so a report never
//! mixes data from before and after a concurrent write. Averages that weight quarters
//! equally first reduce to one mean per quarter, then average those means.

use std::collections::BTreeMap;

use gradebook_models::{
    ClassAverages, ClassPerformance, FailingStudent, Grade, GradeFact, Student, StudentGrades,
    SubjectAverage, TeacherGradeRow, TopWorstClasses,
};

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: i64,
    count: i64,
}

impl Mean {
    fn add(&mut self, value: i32) {
        self.sum += i64::from(value);
        self.count += 1;
    }

    fn value(&self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

fn mean_of(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

/// Students having at least one (subject, quarter) mean strictly below `threshold`.
///
/// Students are ordered by full name, their entries by subject name then quarter.
pub fn failing_students(facts: &[GradeFact], threshold: f64) -> Vec<FailingStudent> {
    let mut means: BTreeMap<(i32, &str, i32), Mean> = BTreeMap::new();
    let mut students: BTreeMap<i32, &GradeFact> = BTreeMap::new();

    for fact in facts {
        means
            .entry((fact.student_id, fact.subject_name.as_str(), fact.quarter))
            .or_default()
            .add(fact.value);
        students.entry(fact.student_id).or_insert(fact);
    }

    let mut failing: BTreeMap<i32, Vec<SubjectAverage>> = BTreeMap::new();
    for ((student_id, subject_name, quarter), mean) in means {
        let average = mean.value();
        if average < threshold {
            failing.entry(student_id).or_default().push(SubjectAverage {
                subject_name: subject_name.to_string(),
                quarter,
                average,
            });
        }
    }

    let mut result: Vec<FailingStudent> = failing
        .into_iter()
        .filter_map(|(student_id, subject_averages)| {
            students.get(&student_id).map(|fact| FailingStudent {
                student: fact.student(),
                subject_averages,
            })
        })
        .collect();

    result.sort_by(|a, b| {
        a.student
            .full_name
            .cmp(&b.student.full_name)
            .then(a.student.id.cmp(&b.student.id))
    });
    result
}

/// Per class and subject: the mean of the per-quarter means, two decimals.
pub fn average_by_class(facts: &[GradeFact]) -> ClassAverages {
    let mut quarter_means: BTreeMap<(&str, &str, i32), Mean> = BTreeMap::new();
    for fact in facts {
        quarter_means
            .entry((fact.class_name.as_str(), fact.subject_name.as_str(), fact.quarter))
            .or_default()
            .add(fact.value);
    }

    let mut per_subject: BTreeMap<(&str, &str), Vec<f64>> = BTreeMap::new();
    for ((class_name, subject_name, _), mean) in quarter_means {
        per_subject
            .entry((class_name, subject_name))
            .or_default()
            .push(mean.value());
    }

    let mut result: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    for ((class_name, subject_name), means) in per_subject {
        result
            .entry(class_name.to_string())
            .or_default()
            .insert(subject_name.to_string(), round2(mean_of(means)));
    }

    ClassAverages(result)
}

/// Highest and lowest class by the flat mean of all their grades.
///
/// Ties rank by class name so the result is deterministic.
pub fn top_and_worst_classes(facts: &[GradeFact]) -> TopWorstClasses {
    let mut means: BTreeMap<&str, Mean> = BTreeMap::new();
    for fact in facts {
        means.entry(fact.class_name.as_str()).or_default().add(fact.value);
    }

    let mut ranked: Vec<(&str, f64)> = means
        .into_iter()
        .map(|(class_name, mean)| (class_name, mean.value()))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(b.0)));

    TopWorstClasses {
        top_class: ranked.first().map(|(name, _)| name.to_string()),
        worst_class: ranked.last().map(|(name, _)| name.to_string()),
    }
}

/// Per class: the mean of the per-quarter means, two decimals, ordered by class name.
pub fn class_performance(facts: &[GradeFact]) -> Vec<ClassPerformance> {
    let mut quarter_means: BTreeMap<(&str, i32), Mean> = BTreeMap::new();
    for fact in facts {
        quarter_means
            .entry((fact.class_name.as_str(), fact.quarter))
            .or_default()
            .add(fact.value);
    }

    let mut per_class: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for ((class_name, _), mean) in quarter_means {
        per_class.entry(class_name).or_default().push(mean.value());
    }

    per_class
        .into_iter()
        .map(|(class_name, means)| ClassPerformance {
            name: class_name.to_string(),
            value: round2(mean_of(means)),
        })
        .collect()
}

/// Removes duplicate students (by id) and orders the roster by name.
pub fn dedupe_roster(students: impl IntoIterator<Item = Student>) -> Vec<Student> {
    let unique: BTreeMap<i32, Student> = students.into_iter().map(|s| (s.id, s)).collect();
    let mut roster: Vec<Student> = unique.into_values().collect();
    roster.sort_by(|a, b| a.full_name.cmp(&b.full_name).then(a.id.cmp(&b.id)));
    roster
}

/// Groups grade rows by student, keeping row order within each student.
/// Students are ordered by name.
pub fn group_grades_by_student(rows: Vec<TeacherGradeRow>) -> Vec<StudentGrades> {
    let mut grouped: BTreeMap<i32, StudentGrades> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(row.student_id)
            .or_insert_with(|| StudentGrades {
                student_id: row.student_id,
                student_name: row.student_name.clone(),
                grades: Vec::new(),
            })
            .grades
            .push(Grade {
                id: row.id,
                student_id: row.student_id,
                subject_id: row.subject_id,
                value: row.value,
                quarter: row.quarter,
            });
    }

    let mut result: Vec<StudentGrades> = grouped.into_values().collect();
    result.sort_by(|a, b| {
        a.student_name
            .cmp(&b.student_name)
            .then(a.student_id.cmp(&b.student_id))
    });
    result
}
