use sea_orm::DbErr;
use students_api::adapters::students_sea::{self, StudentCreate, StudentUpdate};
use students_api::db::require_db;

use crate::support::build_test_state;

#[tokio::test]
async fn create_assigns_sequential_ids_and_find_all_orders_by_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let ann = students_sea::create_student(db, StudentCreate::new("Ann", "ann@x.com", "CS")).await?;
    let bo = students_sea::create_student(db, StudentCreate::new("Bo", "bo@y.org", "Math")).await?;
    assert!(bo.id > ann.id);

    let all = students_sea::find_all(db).await?;
    assert_eq!(all, vec![ann.clone(), bo]);
    assert_eq!(students_sea::count_students(db).await?, 2);

    let found = students_sea::find_by_id(db, ann.id).await?;
    assert_eq!(found, Some(ann));
    Ok(())
}

#[tokio::test]
async fn update_overwrites_all_fields_but_keeps_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let row = students_sea::create_student(db, StudentCreate::new("Ann", "ann@x.com", "CS")).await?;
    let updated = students_sea::update_student(
        db,
        StudentUpdate::new(row.id, "Annie", "annie@x.com", "Physics"),
    )
    .await?;

    assert_eq!(updated.id, row.id);
    assert_eq!(updated.name, "Annie");
    assert_eq!(updated.email, "annie@x.com");
    assert_eq!(updated.course, "Physics");
    Ok(())
}

#[tokio::test]
async fn update_and_delete_of_missing_row_report_structured_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let err = students_sea::update_student(db, StudentUpdate::new(5, "A", "a@b.c", "C"))
        .await
        .expect_err("no row 5");
    assert!(matches!(err, DbErr::Custom(ref msg) if msg == "STUDENT_NOT_FOUND:5"));

    let err = students_sea::delete_student(db, 5).await.expect_err("no row 5");
    assert!(matches!(err, DbErr::Custom(ref msg) if msg == "STUDENT_NOT_FOUND:5"));

    assert!(students_sea::find_all(db).await?.is_empty());
    Ok(())
}
