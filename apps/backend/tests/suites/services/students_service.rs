use students_api::db::require_db;
use students_api::errors::domain::{DomainError, NotFoundKind};
use students_api::StudentService;

use crate::support::build_test_state;
use crate::support::factory::fields;

#[tokio::test]
async fn service_covers_the_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let service = StudentService;

    let ann = service.create_student(db, fields("Ann", "ann@x.com", "CS")).await?;
    assert_eq!(service.get_student(db, ann.id).await?, ann);

    let moved = service
        .update_student(db, ann.id, fields("Ann", "ann@x.com", "Math"))
        .await?;
    assert_eq!(moved.id, ann.id);
    assert_eq!(moved.course, "Math");
    assert_eq!(service.list_students(db).await?, vec![moved]);

    service.delete_student(db, ann.id).await?;
    let err = service.get_student(db, ann.id).await.expect_err("deleted");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Student, _)));
    assert!(service.list_students(db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_update_does_not_mutate_anything() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let service = StudentService;

    let ann = service.create_student(db, fields("Ann", "ann@x.com", "CS")).await?;
    let before = service.list_students(db).await?;

    let err = service
        .update_student(db, ann.id + 1, fields("Bo", "bo@y.org", "Art"))
        .await
        .expect_err("no such student");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Student, _)));

    assert_eq!(service.list_students(db).await?, before);
    Ok(())
}
