use students_api::db::require_db;
use students_api::errors::domain::{DomainError, NotFoundKind};
use students_api::repos::students;

use crate::support::build_test_state;
use crate::support::factory::{fields, seed_student};

fn is_student_not_found(err: &DomainError) -> bool {
    matches!(err, DomainError::NotFound(NotFoundKind::Student, _))
}

#[tokio::test]
async fn create_then_find_roundtrips_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let created = students::create(db, fields("Ann", "ann@x.com", "CS")).await?;
    let fetched = students::require_by_id(db, created.id).await?;
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Ann");
    assert_eq!(fetched.email, "ann@x.com");
    assert_eq!(fetched.course, "CS");
    Ok(())
}

#[tokio::test]
async fn missing_ids_are_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    assert_eq!(students::find_by_id(db, 999).await?, None);

    let err = students::require_by_id(db, 999).await.expect_err("absent");
    assert!(is_student_not_found(&err));
    assert!(err.to_string().contains("Student not found with id: 999"));

    let err = students::update(db, 999, fields("A", "a@b.c", "C")).await.expect_err("absent");
    assert!(is_student_not_found(&err));

    let err = students::delete(db, 999).await.expect_err("absent");
    assert!(is_student_not_found(&err));
    Ok(())
}

#[tokio::test]
async fn delete_removes_only_the_target() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let a = seed_student(db, "CS").await?;
    let b = seed_student(db, "Math").await?;
    let c = seed_student(db, "Art").await?;

    students::delete(db, b.id).await?;

    let err = students::require_by_id(db, b.id).await.expect_err("deleted");
    assert!(is_student_not_found(&err));
    assert_eq!(students::list(db).await?, vec![a, c]);
    Ok(())
}

#[tokio::test]
async fn list_count_tracks_creates_and_deletes() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(seed_student(db, "CS").await?.id);
    }
    assert_eq!(students::list(db).await?.len(), 5);
    assert_eq!(students::count(db).await?, 5);

    for id in ids.iter().take(2) {
        students::delete(db, *id).await?;
    }
    assert_eq!(students::list(db).await?.len(), 3);
    assert_eq!(students::count(db).await?, 3);
    Ok(())
}

#[tokio::test]
async fn duplicate_emails_are_allowed() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;

    let first = students::create(db, fields("Ann", "same@x.com", "CS")).await?;
    let second = students::create(db, fields("Bo", "same@x.com", "Math")).await?;
    assert_ne!(first.id, second.id);
    Ok(())
}
