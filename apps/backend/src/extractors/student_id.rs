use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Student id taken from the `{id}` route segment. Must be a positive i64;
/// existence is checked later by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub i64);

impl StudentId {
    fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidStudentId,
                format!("Invalid student id: {raw}"),
            )
        })?;

        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidStudentId,
                format!("Student id must be positive, got: {id}"),
            ));
        }

        Ok(StudentId(id))
    }
}

impl FromRequest for StudentId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => StudentId::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidStudentId,
                "Missing id parameter",
            )),
        };
        ready(result)
    }
}
