//! Adapters for external dependencies.

pub mod students_sea;
