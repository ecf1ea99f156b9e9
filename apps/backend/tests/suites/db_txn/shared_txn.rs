// A SharedTxn in request extensions is reused by with_txn, which then
// neither commits nor rolls back; the test owns the final rollback.

use actix_web::{test, HttpMessage};
use serde_json::{json, Value};
use students_api::db::require_db;
use students_api::db::txn::{with_txn, SharedTxn};
use students_api::repos::students;
use students_api::AppError;

use crate::support::factory::unique_fields;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn shared_txn_is_reused_and_rolled_back_by_owner() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let shared = SharedTxn::open(&db).await?;

    let req = test::TestRequest::default().to_http_request();
    shared.inject(&req);

    let created = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move {
            students::create(txn, unique_fields("CS"))
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    // Still visible through the same shared transaction.
    let id = created.id;
    let seen = with_txn(Some(&req), &state, |txn| {
        Box::pin(async move { students::find_by_id(txn, id).await.map_err(AppError::from) })
    })
    .await?;
    assert_eq!(seen, Some(created));

    SharedTxn::detach(&req);
    drop(req);
    shared.rollback().await?;

    assert!(students::list(&db).await?.is_empty());
    Ok(())
}

#[actix_web::test]
async fn rollback_fails_while_a_request_still_holds_the_txn() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let shared = SharedTxn::open(&db).await?;

    let req = test::TestRequest::default().to_http_request();
    shared.inject(&req);

    let err = shared.clone().rollback().await.expect_err("request still holds a clone");
    assert!(err.to_string().contains("still referenced"));

    assert!(SharedTxn::detach(&req).is_some());
    shared.rollback().await?;
    Ok(())
}

#[actix_web::test]
async fn http_scenario_inside_one_shared_txn() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?.clone();
    let app = create_test_app(state).with_prod_routes().build().await;
    let shared = SharedTxn::open(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/students")
        .set_json(json!({"name": "Ann", "email": "ann@x.com", "course": "CS"}))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().expect("id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{id}"))
        .to_request();
    req.extensions_mut().insert(shared.clone());
    let fetched: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched["name"], "Ann");

    // Dropping the service releases pooled requests and their extensions.
    drop(app);
    shared.rollback().await?;
    assert!(students::list(&db).await?.is_empty());
    Ok(())
}
