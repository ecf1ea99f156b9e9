//! Wire shapes exchanged with API clients.

pub mod student;

pub use student::StudentDto;
