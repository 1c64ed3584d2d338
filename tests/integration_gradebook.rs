//! End-to-end flows against a real PostgreSQL database.
//!
//! Run with `DATABASE_URL` set and `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use common::{
    app_with_db, bearer, body_json, create_test_grade, create_test_student, create_test_subject,
    create_test_user, request,
};
use gradebook_core::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_register_then_login(pool: PgPool) {
    let app = app_with_db(pool);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/register",
            None,
            Some(json!({ "username": "deputy1", "password": "secret1", "role": "Deputy" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let user = body_json(response).await;
    assert_eq!(user["role"], "deputy");
    assert!(user.get("password_hash").is_none());

    let response = app
        .oneshot(request(
            "POST",
            "/login",
            None,
            Some(json!({ "username": "deputy1", "password": "secret1" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["username"], "deputy1");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_register_duplicate_conflicts(pool: PgPool) {
    create_test_user(&pool, "taken", "secret1", UserRole::Student).await;
    let digest_before: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE username = 'taken'")
            .fetch_one(&pool)
            .await
            .unwrap();
    let app = app_with_db(pool.clone());

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/register",
            None,
            Some(json!({ "username": "taken", "password": "another-secret", "role": "deputy" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let (digest_after, role): (String, String) =
        sqlx::query_as("SELECT password_hash, role FROM users WHERE username = 'taken'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(digest_after, digest_before);
    assert_eq!(role, "student");

    let response = app
        .oneshot(request(
            "POST",
            "/login",
            None,
            Some(json!({ "username": "taken", "password": "secret1" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_login_failures_look_the_same(pool: PgPool) {
    create_test_user(&pool, "alice", "secret1", UserRole::Student).await;
    let app = app_with_db(pool);

    let mut bodies = Vec::new();
    for (username, password) in [("alice", "wrong-password"), ("nobody", "secret1")] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/login",
                None,
                Some(json!({ "username": username, "password": password })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(body_json(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_teacher_create_and_delete_manage_account(pool: PgPool) {
    let deputy = create_test_user(&pool, "deputy", "secret1", UserRole::Deputy).await;
    let auth = bearer(deputy, UserRole::Deputy);
    let app = app_with_db(pool.clone());

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/teachers",
            Some(&auth),
            Some(json!({ "full_name": "Ivan Petrov", "room_number": "101" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let teacher = body_json(response).await;
    let teacher_id = teacher["id"].as_i64().unwrap();

    // The new account can sign in with the temporary password.
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/login",
            None,
            Some(json!({ "username": "Ivan Petrov", "password": "password123" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["user"]["role"], "teacher");

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/teachers",
            Some(&auth),
            Some(json!({ "full_name": "Ivan Petrov" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/teachers/{}", teacher_id),
            Some(&auth),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind("Ivan Petrov")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_grade_lifecycle(pool: PgPool) {
    let teacher = create_test_user(&pool, "teacher", "secret1", UserRole::Teacher).await;
    let deputy = create_test_user(&pool, "deputy", "secret1", UserRole::Deputy).await;
    let student = create_test_student(&pool, "Anna", "5A").await;
    let subject = create_test_subject(&pool, "Math", None).await;
    let app = app_with_db(pool);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/grades",
            Some(&bearer(teacher, UserRole::Teacher)),
            Some(json!({ "student_id": student, "subject_id": subject, "value": 4, "quarter": 2 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let grade = body_json(response).await;
    let grade_id = grade["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/grades",
            Some(&bearer(teacher, UserRole::Teacher)),
            Some(json!({ "student_id": 9999, "subject_id": subject, "value": 4, "quarter": 2 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let uri = format!("/grades/{}", grade_id);
    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &uri,
            Some(&bearer(deputy, UserRole::Deputy)),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            "DELETE",
            &uri,
            Some(&bearer(deputy, UserRole::Deputy)),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_reports(pool: PgPool) {
    let deputy = create_test_user(&pool, "deputy", "secret1", UserRole::Deputy).await;
    let anna = create_test_student(&pool, "Anna", "5A").await;
    let boris = create_test_student(&pool, "Boris", "6B").await;
    let math = create_test_subject(&pool, "Math", None).await;

    create_test_grade(&pool, anna, math, 5, 1).await;
    create_test_grade(&pool, anna, math, 4, 1).await;
    create_test_grade(&pool, boris, math, 2, 1).await;
    create_test_grade(&pool, boris, math, 3, 1).await;

    let app = app_with_db(pool);
    let auth = bearer(deputy, UserRole::Deputy);

    let response = app
        .clone()
        .oneshot(request("GET", "/students/failing", Some(&auth), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let failing = body_json(response).await;
    assert_eq!(failing.as_array().unwrap().len(), 1);
    assert_eq!(failing[0]["full_name"], "Boris");

    let response = app
        .clone()
        .oneshot(request("GET", "/grades/average-by-class", Some(&auth), None))
        .await
        .unwrap();
    let averages = body_json(response).await;
    assert_eq!(averages["5A"]["Math"], 4.5);
    assert_eq!(averages["6B"]["Math"], 2.5);

    let response = app
        .clone()
        .oneshot(request("GET", "/stats/top-worst-classes", Some(&auth), None))
        .await
        .unwrap();
    let top_worst = body_json(response).await;
    assert_eq!(top_worst["top_class"], "5A");
    assert_eq!(top_worst["worst_class"], "6B");

    let response = app
        .clone()
        .oneshot(request("GET", "/stats/students-count", Some(&auth), None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["count"], 2);

    let response = app
        .oneshot(request("GET", "/stats/average-grade", Some(&auth), None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["average"], 3.5);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_teacher_sees_only_own_students(pool: PgPool) {
    let deputy = create_test_user(&pool, "deputy", "secret1", UserRole::Deputy).await;
    let app = app_with_db(pool.clone());

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/teachers",
            Some(&bearer(deputy, UserRole::Deputy)),
            Some(json!({ "full_name": "Olga" })),
        ))
        .await
        .unwrap();
    let teacher = body_json(response).await;
    let teacher_id = teacher["id"].as_i64().unwrap() as i32;
    let teacher_user = teacher["user_id"].as_i64().unwrap() as i32;

    let mine = create_test_subject(&pool, "Math", Some(teacher_id)).await;
    let other = create_test_subject(&pool, "Art", None).await;
    let anna = create_test_student(&pool, "Anna", "5A").await;
    let boris = create_test_student(&pool, "Boris", "5A").await;
    create_test_grade(&pool, anna, mine, 5, 1).await;
    create_test_grade(&pool, anna, mine, 4, 2).await;
    create_test_grade(&pool, boris, other, 3, 1).await;

    let auth = bearer(teacher_user, UserRole::Teacher);
    let response = app
        .clone()
        .oneshot(request("GET", "/teacher/my-students", Some(&auth), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let students = body_json(response).await;
    assert_eq!(students.as_array().unwrap().len(), 1);
    assert_eq!(students[0]["full_name"], "Anna");

    let response = app
        .oneshot(request("GET", "/teacher/my-students/grades", Some(&auth), None))
        .await
        .unwrap();
    let grouped = body_json(response).await;
    assert_eq!(grouped.as_array().unwrap().len(), 1);
    assert_eq!(grouped[0]["grades"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_change_password(pool: PgPool) {
    let user = create_test_user(&pool, "alice", "secret1", UserRole::Student).await;
    let app = app_with_db(pool);
    let auth = bearer(user, UserRole::Student);

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            "/me/password",
            Some(&auth),
            Some(json!({ "current_password": "nope", "new_password": "secret2" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            "/me/password",
            Some(&auth),
            Some(json!({ "current_password": "secret1", "new_password": "secret2" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request(
            "POST",
            "/login",
            None,
            Some(json!({ "username": "alice", "password": "secret2" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_dashboard_stats_without_grades(pool: PgPool) {
    let user = create_test_user(&pool, "alice", "secret1", UserRole::Student).await;
    let app = app_with_db(pool);
    let auth = bearer(user, UserRole::Student);

    let response = app
        .clone()
        .oneshot(request("GET", "/stats/average-grade", Some(&auth), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["average"], 0.0);

    let response = app
        .oneshot(request("GET", "/stats/class-performance", Some(&auth), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}
