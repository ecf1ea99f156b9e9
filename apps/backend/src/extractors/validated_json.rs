use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Largest body `ValidatedJson` buffers unless a [`JsonBodyLimit`] is
/// registered as app data.
pub const DEFAULT_BODY_LIMIT: usize = 256 * 1024;

/// Per-app override of the JSON body size cap, read from app data.
#[derive(Debug, Clone, Copy)]
pub struct JsonBodyLimit(pub usize);

impl Default for JsonBodyLimit {
    fn default() -> Self {
        Self(DEFAULT_BODY_LIMIT)
    }
}

/// JSON body extractor whose parse failures become problem-details 400s
/// (`BAD_REQUEST`) instead of actix's plain-text JSON errors.
///
/// Bodies larger than the configured [`JsonBodyLimit`] are rejected with
/// 413 `PAYLOAD_TOO_LARGE`, checked against `Content-Length` up front and
/// again while buffering chunks.
///
/// Only the body shape is checked here; field rules (blank name, email
/// format) are applied by the handler.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let mut payload = payload.take();

        // Read before the future so no request borrow crosses an await.
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("")
            .to_string();
        let limit = req
            .app_data::<JsonBodyLimit>()
            .copied()
            .unwrap_or_default()
            .0;
        let declared_len = req
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());

        Box::pin(async move {
            let trace_id = trace_ctx::trace_id();

            if let Some(len) = declared_len.filter(|len| *len > limit) {
                debug!(trace_id = %trace_id, content_length = len, limit, "Declared body too large");
                return Err(AppError::payload_too_large(limit));
            }

            let mut body = BytesMut::with_capacity(declared_len.unwrap_or(0).min(limit));
            while let Some(chunk) = payload.next().await {
                let chunk = chunk.map_err(|e| {
                    warn!(trace_id = %trace_id, error = %e, "Failed to read request body chunk");
                    AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
                })?;
                if body.len() + chunk.len() > limit {
                    debug!(trace_id = %trace_id, limit, "Streamed body too large");
                    return Err(AppError::payload_too_large(limit));
                }
                body.extend_from_slice(&chunk);
            }

            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                debug!(
                    trace_id = %trace_id,
                    error = %Redacted(&e.to_string()),
                    content_type = %content_type,
                    body_size = body.len(),
                    "JSON parsing failed"
                );
                AppError::bad_request(ErrorCode::BadRequest, classify_json_error(&e))
            })?;

            Ok(ValidatedJson(parsed))
        })
    }
}

/// Sanitized, client-facing description of a serde_json failure.
fn classify_json_error(error: &serde_json::Error) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => "Invalid JSON: wrong types for one or more fields".to_string(),
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}
