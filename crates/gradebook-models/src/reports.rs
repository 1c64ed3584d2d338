//! Result types of the reporting endpoints.
//!
//! [`GradeFact`] and [`TeacherGradeRow`] are raw rows read from the store; the other
//! types are what the API returns after aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::grades::Grade;
use crate::students::Student;

/// One grade with the student and subject attributes reports group by.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct GradeFact {
    pub student_id: i32,
    pub full_name: String,
    pub class_name: String,
    pub student_user_id: Option<i32>,
    pub subject_name: String,
    pub quarter: i32,
    pub value: i32,
}

impl GradeFact {
    pub fn student(&self) -> Student {
        Student {
            id: self.student_id,
            full_name: self.full_name.clone(),
            class_name: self.class_name.clone(),
            user_id: self.student_user_id,
        }
    }
}

/// Mean of one student's grades in one subject and quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectAverage {
    pub subject_name: String,
    pub quarter: i32,
    pub average: f64,
}

/// A student with every (subject, quarter) average below the failing threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FailingStudent {
    #[serde(flatten)]
    pub student: Student,
    pub subject_averages: Vec<SubjectAverage>,
}

/// Class name → subject name → quarter-weighted average.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ClassAverages(pub BTreeMap<String, BTreeMap<String, f64>>);

/// Best and worst class by flat mean. Both are `None` when no grades exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopWorstClasses {
    pub top_class: Option<String>,
    pub worst_class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassPerformance {
    /// Class name
    pub name: String,
    /// Quarter-weighted average, two decimals
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AverageResponse {
    pub average: f64,
}

/// A grade of a subject owned by a teacher, with the student's name.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TeacherGradeRow {
    pub id: i32,
    pub student_id: i32,
    pub student_name: String,
    pub subject_id: i32,
    pub value: i32,
    pub quarter: i32,
}

/// The grades a teacher's roster student holds in that teacher's subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentGrades {
    pub student_id: i32,
    pub student_name: String,
    pub grades: Vec<Grade>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failing_student_flattens_student_fields() {
        let failing = FailingStudent {
            student: Student {
                id: 3,
                full_name: "Anna Smirnova".to_string(),
                class_name: "9A".to_string(),
                user_id: None,
            },
            subject_averages: vec![SubjectAverage {
                subject_name: "Math".to_string(),
                quarter: 1,
                average: 2.5,
            }],
        };

        assert_eq!(
            serde_json::to_value(&failing).unwrap(),
            json!({
                "id": 3,
                "full_name": "Anna Smirnova",
                "class_name": "9A",
                "user_id": null,
                "subject_averages": [{"subject_name": "Math", "quarter": 1, "average": 2.5}]
            })
        );
    }

    #[test]
    fn test_class_averages_serialize_as_plain_map() {
        let mut subjects = BTreeMap::new();
        subjects.insert("Math".to_string(), 4.0);
        let mut classes = BTreeMap::new();
        classes.insert("9A".to_string(), subjects);

        assert_eq!(
            serde_json::to_value(ClassAverages(classes)).unwrap(),
            json!({"9A": {"Math": 4.0}})
        );
    }

    #[test]
    fn test_empty_top_worst_serializes_nulls() {
        assert_eq!(
            serde_json::to_value(TopWorstClasses::default()).unwrap(),
            json!({"top_class": null, "worst_class": null})
        );
    }
}
