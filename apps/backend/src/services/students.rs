use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::errors::domain::DomainError;
use crate::logging::pii::Redacted;
use crate::repos::students::{self, Student, StudentFields};

/// Student use-cases. Callers pass a transaction so that the existence check
/// and the write of update/delete commit or roll back together.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentService;

impl StudentService {
    pub async fn create_student<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        fields: StudentFields,
    ) -> Result<Student, DomainError> {
        let student = students::create(conn, fields).await?;
        info!(
            student_id = student.id,
            email = %Redacted(&student.email),
            "student.created"
        );
        Ok(student)
    }

    pub async fn list_students<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Student>, DomainError> {
        let all = students::list(conn).await?;
        debug!(count = all.len(), "student.listed");
        Ok(all)
    }

    pub async fn get_student<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<Student, DomainError> {
        students::require_by_id(conn, id).await
    }

    /// Overwrites all mutable fields. The id is never changed.
    pub async fn update_student<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
        fields: StudentFields,
    ) -> Result<Student, DomainError> {
        let student = students::update(conn, id, fields).await?;
        info!(student_id = id, "student.updated");
        Ok(student)
    }

    pub async fn delete_student<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: i64,
    ) -> Result<(), DomainError> {
        students::delete(conn, id).await?;
        info!(student_id = id, "student.deleted");
        Ok(())
    }
}
