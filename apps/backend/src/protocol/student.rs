//! Transfer object for the `/api/students` endpoints.
//!
//! Serialized form: `{ "id": integer|null, "name": string, "email": string, "course": string }`.
//! `id` is output-only: it is ignored on create, and on update the path id wins.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::students::{Student, StudentFields};

/// Dot-separated atoms, `@`, then one or more dot-separated DNS labels.
fn email_pattern() -> &'static Regex {
    static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        )
        .unwrap()
    });
    &EMAIL
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDto {
    #[serde(default)]
    pub id: Option<i64>,
    // Absent text fields deserialize as "" so they fail validation with a
    // field-specific code instead of a generic parse error.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub course: String,
}

impl StudentDto {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            course: course.into(),
        }
    }

    /// Checks name, email, course in that order and reports the first failure.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankName,
                "Name is required",
            ));
        }
        if !email_pattern().is_match(&self.email) {
            return Err(DomainError::validation(
                ValidationKind::InvalidEmail,
                "Email must be a valid email address",
            ));
        }
        if self.course.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::BlankCourse,
                "Course is required",
            ));
        }
        Ok(())
    }

    /// Validate and strip the id, yielding what the store may write.
    pub fn into_fields(self) -> Result<StudentFields, DomainError> {
        self.validate()?;
        Ok(StudentFields {
            name: self.name,
            email: self.email,
            course: self.course,
        })
    }
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            name: student.name,
            email: student.email,
            course: student.course,
        }
    }
}
