//! Error codes for the students API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the students API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in the `code` field of problem details responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Student id in the path is not a positive integer
    InvalidStudentId,
    /// Student name is blank
    InvalidName,
    /// Student email does not look like an email address
    InvalidEmail,
    /// Student course is blank
    InvalidCourse,
    /// General validation error
    ValidationError,
    /// Malformed request (unparseable body, wrong field types)
    BadRequest,
    /// Request body exceeds the accepted size
    PayloadTooLarge,

    // Resource Not Found
    /// Student not found
    StudentNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,

    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidStudentId => "INVALID_STUDENT_ID",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidCourse => "INVALID_COURSE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        Self::InvalidStudentId,
        Self::InvalidName,
        Self::InvalidEmail,
        Self::InvalidCourse,
        Self::ValidationError,
        Self::BadRequest,
        Self::PayloadTooLarge,
        Self::StudentNotFound,
        Self::NotFound,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
