//! Student repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::students_sea::{self as students_adapter, StudentCreate, StudentUpdate};
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Student domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
}

/// The mutable part of a student, as accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub email: String,
    pub course: String,
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    fields: StudentFields,
) -> Result<Student, DomainError> {
    let dto = StudentCreate::new(fields.name, fields.email, fields.course);
    let row = students_adapter::create_student(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Student::from(row))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<Student>, DomainError> {
    let rows = students_adapter::find_all(conn).await.map_err(map_db_err)?;
    Ok(rows.into_iter().map(Student::from).collect())
}

/// Number of stored students; also used by the health check.
pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    students_adapter::count_students(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Student>, DomainError> {
    let row = students_adapter::find_by_id(conn, id)
        .await
        .map_err(map_db_err)?;
    Ok(row.map(Student::from))
}

/// Like `find_by_id`, but absence is a `NotFound` error.
pub async fn require_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Student, DomainError> {
    find_by_id(conn, id)
        .await?
        .ok_or_else(|| DomainError::student_not_found(id))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    fields: StudentFields,
) -> Result<Student, DomainError> {
    let dto = StudentUpdate::new(id, fields.name, fields.email, fields.course);
    let row = students_adapter::update_student(conn, dto)
        .await
        .map_err(map_db_err)?;
    Ok(Student::from(row))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(conn: &C, id: i64) -> Result<(), DomainError> {
    students_adapter::delete_student(conn, id)
        .await
        .map_err(map_db_err)
}

impl From<crate::entities::students::Model> for Student {
    fn from(model: crate::entities::students::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            course: model.course,
        }
    }
}
