//! `/api/students` handlers.
//!
//! | Method | Path  | Success              |
//! |--------|-------|----------------------|
//! | POST   | /     | 201 + created record |
//! | GET    | /     | 200 + all records    |
//! | GET    | /{id} | 200 + record         |
//! | PUT    | /{id} | 200 + updated record |
//! | DELETE | /{id} | 200 + confirmation   |

use actix_web::{web, HttpRequest, HttpResponse};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{StudentId, ValidatedJson};
use crate::protocol::StudentDto;
use crate::services::StudentService;
use crate::state::app_state::AppState;

pub const DELETED_MESSAGE: &str = "Student deleted successfully.";

async fn create_student(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: ValidatedJson<StudentDto>,
) -> Result<HttpResponse, AppError> {
    // Validation runs before any store access.
    let fields = body.into_inner().into_fields()?;

    let created = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            StudentService
                .create_student(txn, fields)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(StudentDto::from(created)))
}

async fn list_students(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let students = with_txn(Some(&req), &app_state, |txn| {
        Box::pin(async move {
            StudentService
                .list_students(txn)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let body: Vec<StudentDto> = students.into_iter().map(StudentDto::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_student(
    req: HttpRequest,
    student_id: StudentId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = student_id.0;
    let student = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            StudentService
                .get_student(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(StudentDto::from(student)))
}

/// The path id is authoritative; an `id` in the body is ignored.
async fn update_student(
    req: HttpRequest,
    student_id: StudentId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<StudentDto>,
) -> Result<HttpResponse, AppError> {
    let id = student_id.0;
    let fields = body.into_inner().into_fields()?;

    let updated = with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            StudentService
                .update_student(txn, id, fields)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(StudentDto::from(updated)))
}

async fn delete_student(
    req: HttpRequest,
    student_id: StudentId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = student_id.0;
    with_txn(Some(&req), &app_state, move |txn| {
        Box::pin(async move {
            StudentService
                .delete_student(txn, id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(DELETED_MESSAGE))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_student))
            .route(web::get().to(list_students)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_student))
            .route(web::put().to(update_student))
            .route(web::delete().to(delete_student)),
    );
}
