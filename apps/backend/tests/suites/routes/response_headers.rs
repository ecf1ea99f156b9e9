use actix_web::test;
use serde_json::json;
use students_api::state::app_state::AppState;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn successful_responses_carry_trace_and_security_headers() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/students")
        .set_json(json!({"name": "Ann", "email": "ann@x.com", "course": "CS"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let headers = resp.headers();

    let trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header");
    assert_eq!(trace_id.len(), 36, "trace id should be a hyphenated uuid");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("cache-control").unwrap(), "no-store");

    Ok(())
}

#[actix_web::test]
async fn each_request_gets_a_fresh_trace_id() {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await;

    let mut seen = Vec::new();
    for _ in 0..3 {
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        let id = resp
            .headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .expect("x-trace-id header");
        assert!(!seen.contains(&id));
        seen.push(id);
    }
}
