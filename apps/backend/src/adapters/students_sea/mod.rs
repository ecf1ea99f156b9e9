//! SeaORM adapter for the student repository.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::entities::students;

pub mod dto;

pub use dto::{StudentCreate, StudentUpdate};

// Adapter functions return DbErr; repos layer maps to DomainError via map_db_err.

/// Structured not-found error understood by `infra::db_errors::map_db_err`.
fn student_not_found(id: i64) -> sea_orm::DbErr {
    sea_orm::DbErr::Custom(format!("STUDENT_NOT_FOUND:{id}"))
}

pub async fn create_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StudentCreate,
) -> Result<students::Model, sea_orm::DbErr> {
    let active = students::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        email: Set(dto.email),
        course: Set(dto.course),
    };

    active.insert(conn).await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<students::Model>, sea_orm::DbErr> {
    students::Entity::find()
        .order_by_asc(students::Column::Id)
        .all(conn)
        .await
}

pub async fn count_students<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    students::Entity::find().count(conn).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<students::Model>, sea_orm::DbErr> {
    students::Entity::find_by_id(id).one(conn).await
}

/// Overwrite name/email/course of an existing row. The existence check and
/// the write run on the same connection, so callers passing a transaction
/// get both under one snapshot.
pub async fn update_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StudentUpdate,
) -> Result<students::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, dto.id)
        .await?
        .ok_or_else(|| student_not_found(dto.id))?;

    let mut active: students::ActiveModel = existing.into();
    active.name = Set(dto.name);
    active.email = Set(dto.email);
    active.course = Set(dto.course);

    active.update(conn).await
}

pub async fn delete_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<(), sea_orm::DbErr> {
    let result = students::Entity::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(student_not_found(id));
    }
    Ok(())
}
