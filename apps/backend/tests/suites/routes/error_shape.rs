use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use api_test_support::problem_details::assert_problem_details_from_service_response;
use students_api::state::app_state::AppState;
use students_api::{AppError, ErrorCode};

use crate::support::create_test_app;

async fn validation_error() -> Result<HttpResponse, AppError> {
    Err(AppError::invalid(ErrorCode::ValidationError, "Field validation failed"))
}

async fn not_found_error() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorCode::NotFound, "Resource not found"))
}

async fn internal_error() -> Result<HttpResponse, AppError> {
    Err(AppError::internal("Something broke"))
}

async fn db_unavailable_error() -> Result<HttpResponse, AppError> {
    Err(AppError::db_unavailable())
}

// handler-only: no database needed
#[actix_web::test]
async fn every_error_is_problem_json_with_matching_trace_id() {
    let app = create_test_app(AppState::new_without_db())
        .with_routes(|cfg| {
            cfg.route("/validation", web::get().to(validation_error))
                .route("/not_found", web::get().to(not_found_error))
                .route("/internal", web::get().to(internal_error))
                .route("/db_unavailable", web::get().to(db_unavailable_error));
        })
        .build()
        .await;

    let cases = [
        ("/validation", "VALIDATION_ERROR", StatusCode::BAD_REQUEST, "Field validation failed"),
        ("/not_found", "NOT_FOUND", StatusCode::NOT_FOUND, "Resource not found"),
        ("/internal", "INTERNAL", StatusCode::INTERNAL_SERVER_ERROR, "Something broke"),
        ("/db_unavailable", "DB_UNAVAILABLE", StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable"),
    ];

    for (uri, code, status, detail) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem_details_from_service_response(resp, code, status, Some(detail)).await;
        assert_ne!(problem.trace_id, "unknown", "{uri} should carry a real trace id");
    }
}

#[actix_web::test]
async fn student_routes_without_database_report_db_unavailable() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/students").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "DB_UNAVAILABLE",
        StatusCode::INTERNAL_SERVER_ERROR,
        None,
    )
    .await;
}

#[actix_web::test]
async fn validation_runs_before_store_access() {
    // No database: a validation failure must still surface as 400.
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/students")
        .set_json(serde_json::json!({"name": "", "email": "ann@x.com", "course": "CS"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_NAME",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}
