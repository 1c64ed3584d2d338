use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use gradebook_core::UserRole;
use gradebook_models::{
    AverageResponse, ChangePasswordDto, ClassAverages, ClassPerformance, CountResponse,
    CreateGradeDto, CreateStudentDto, CreateSubjectDto, CreateTeacherDto, FailingStudent, Grade,
    GradeWithSubject, LoginRequest, LoginResponse, MessageResponse, RegisterRequestDto, Student,
    StudentGrades, Subject, SubjectAverage, Teacher, TopWorstClasses, UpdateGradeDto,
    UpdateStudentDto, UpdateSubjectDto, UpdateTeacherDto, User, VerifyTokenResponse,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::verify_token,
        crate::modules::users::controller::change_password,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::get_my_students,
        crate::modules::teachers::controller::get_my_students_grades,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::grades::controller::get_grades,
        crate::modules::grades::controller::get_student_grades,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::update_grade,
        crate::modules::grades::controller::delete_grade,
        crate::modules::reports::controller::get_failing_students,
        crate::modules::reports::controller::get_average_grades_by_class,
        crate::modules::reports::controller::get_top_and_worst_classes,
        crate::modules::reports::controller::get_class_performance,
        crate::modules::reports::controller::get_students_count,
        crate::modules::reports::controller::get_teachers_count,
        crate::modules::reports::controller::get_average_grade,
    ),
    components(
        schemas(
            User,
            UserRole,
            LoginRequest,
            LoginResponse,
            RegisterRequestDto,
            ChangePasswordDto,
            VerifyTokenResponse,
            MessageResponse,
            ErrorResponse,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
            Teacher,
            CreateTeacherDto,
            UpdateTeacherDto,
            Subject,
            CreateSubjectDto,
            UpdateSubjectDto,
            Grade,
            GradeWithSubject,
            CreateGradeDto,
            UpdateGradeDto,
            FailingStudent,
            SubjectAverage,
            ClassAverages,
            TopWorstClasses,
            ClassPerformance,
            CountResponse,
            AverageResponse,
            StudentGrades,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, registration and token checks"),
        (name = "Users", description = "Self-service account operations"),
        (name = "Students", description = "Student management"),
        (name = "Teachers", description = "Teacher management and teacher-scoped views"),
        (name = "Subjects", description = "Subject management"),
        (name = "Grades", description = "Grade entry and lookup"),
        (name = "Reports", description = "Deputy reports"),
        (name = "Statistics", description = "Dashboard statistics for any signed-in user")
    ),
    info(
        title = "Gradebook API",
        version = "0.1.0",
        description = "Role-based school gradebook: students, teachers, subjects, grades and reports",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/login",
            "/register",
            "/verify-token",
            "/me/password",
            "/students",
            "/students/{id}",
            "/students/failing",
            "/teachers",
            "/teachers/{id}",
            "/teacher/my-students",
            "/teacher/my-students/grades",
            "/subjects",
            "/subjects/{id}",
            "/grades",
            "/grades/{id}",
            "/grades/student/{id}",
            "/grades/average-by-class",
            "/stats/top-worst-classes",
            "/stats/students-count",
            "/stats/teachers-count",
            "/stats/average-grade",
            "/stats/class-performance",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
