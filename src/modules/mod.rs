pub mod auth;
pub mod grades;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod teachers;
pub mod users;
