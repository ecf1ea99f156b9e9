//! DTOs for students_sea adapter.

/// Fields written on insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct StudentCreate {
    pub name: String,
    pub email: String,
    pub course: String,
}

impl StudentCreate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            course: course.into(),
        }
    }
}

/// Full overwrite of the mutable fields of an existing row.
#[derive(Debug, Clone)]
pub struct StudentUpdate {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: String,
}

impl StudentUpdate {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            course: course.into(),
        }
    }
}
