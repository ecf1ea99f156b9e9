#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod protocol;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;


pub use config::db::{db_url, DbKind, RuntimeEnv};
pub use db::txn::{with_txn, SharedTxn};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::student_id::StudentId;
pub use extractors::validated_json::ValidatedJson;
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use protocol::student::StudentDto;
pub use services::students::StudentService;
pub use state::app_state::AppState;

pub mod prelude {
    pub use super::config::db::*;
    pub use super::db::txn::*;
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::extractors::*;
    pub use super::middleware::*;
    pub use super::state::*;
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
