use actix_web::http::StatusCode;
use actix_web::test;
use sea_orm::ConnectionTrait;
use serde_json::Value;
use students_api::db::require_db;
use students_api::state::app_state::AppState;

use crate::support::factory::seed_student;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn health_counts_students_and_reports_schema() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    seed_student(require_db(&state)?, "CS").await?;
    seed_student(require_db(&state)?, "Math").await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["store"]["reachable"], true);
    assert_eq!(body["store"]["students"], 2);
    assert_eq!(body["store"]["schema_version"], "m20250901_000001_students");
    assert!(body["store"].get("error").is_none());
    assert!(body["checked_at"].as_str().is_some_and(|t| !t.is_empty()));

    Ok(())
}

#[actix_web::test]
async fn health_is_degraded_when_students_table_is_gone() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    require_db(&state)?
        .execute_unprepared("DROP TABLE students")
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"]["reachable"], false);
    assert!(body["store"].get("students").is_none());
    assert!(body["store"]["error"].as_str().is_some());

    Ok(())
}

#[actix_web::test]
async fn health_without_database_is_degraded() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["store"]["reachable"], false);
    assert!(body["store"]["error"]
        .as_str()
        .is_some_and(|e| e.contains("Database unavailable")));
}

#[actix_web::test]
async fn root_names_the_service() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::read_body(test::call_service(&app, req).await).await;
    assert_eq!(body, "Students API");
}
