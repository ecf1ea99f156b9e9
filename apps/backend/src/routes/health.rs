//! `GET /` greeting and `GET /health` store report.
//!
//! Health counts the `students` table through the repository, so a missing
//! table or a dead pool shows up, not just an unreachable server. A failing
//! store turns the report `degraded` and the status 503.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::db::require_db;
use crate::repos::students;
use crate::state::app_state::AppState;

pub async fn root() -> HttpResponse {
    HttpResponse::Ok().body("Students API")
}

#[derive(Debug, Serialize)]
struct StoreReport {
    reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    students: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schema_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StoreReport {
    fn unreachable(error: String) -> Self {
        warn!(error = %error, "health check: student store unavailable");
        Self {
            reachable: false,
            students: None,
            schema_version: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    store: StoreReport,
    checked_at: String,
}

async fn check_store(state: &AppState) -> StoreReport {
    let db = match require_db(state) {
        Ok(db) => db,
        Err(e) => return StoreReport::unreachable(e.to_string()),
    };

    let count = match students::count(db).await {
        Ok(n) => n,
        Err(e) => return StoreReport::unreachable(e.to_string()),
    };

    // A failed version lookup does not make the store unhealthy.
    let schema_version = get_latest_migration_version(db).await.ok().flatten();

    StoreReport {
        reachable: true,
        students: Some(count),
        schema_version,
        error: None,
    }
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    let store = check_store(&state).await;
    let (status, http_status) = if store.reachable {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
        checked_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
    };

    HttpResponse::build(http_status).json(report)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
