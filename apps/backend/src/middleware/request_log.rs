//! Per-request span plus a single `request_completed` event.
//!
//! The span carries the trace id that `RequestTrace` scoped into
//! `trace_ctx`, so this layer must be wrapped inside `RequestTrace`
//! (registered before it, since actix runs the last `.wrap()` outermost).
//! Handler and repo logs nest under the span and inherit its fields.

use std::future::{ready, Ready};
use std::time::{Duration, Instant};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error;
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument, Level};

use crate::trace_ctx;

/// Route label used when no resource matched (404s from the default service).
const UNMATCHED_ROUTE: &str = "unmatched";

pub struct RequestLog;

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware { service }))
    }
}

pub struct RequestLogMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());
        let path = req.path().to_string();
        let fut = self.service.call(req);

        // Polled inside RequestTrace's trace_ctx scope.
        Box::pin(async move {
            let started = Instant::now();
            let span = info_span!(
                "request",
                trace_id = %trace_ctx::trace_id(),
                method = %method,
                route = %route,
                path = %path,
            );

            let result = fut.instrument(span.clone()).await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            span.in_scope(|| log_completed(status, started.elapsed()));

            result
        })
    }
}

fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

fn log_completed(status: StatusCode, elapsed: Duration) {
    let status_code = status.as_u16();
    let duration_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);

    // The level macros take a constant level, hence one branch each.
    let level = completion_level(status);
    if level == Level::ERROR {
        tracing::error!(http.status_code = status_code, duration_us, "request_completed");
    } else if level == Level::WARN {
        tracing::warn!(http.status_code = status_code, duration_us, "request_completed");
    } else {
        tracing::info!(http.status_code = status_code, duration_us, "request_completed");
    }
}
