use actix_web::web;

pub mod health;
pub mod students;

/// Explicit route table: (method, path) -> handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Students: /api/students/**
    cfg.service(web::scope("/api/students").configure(students::configure_routes));
}
