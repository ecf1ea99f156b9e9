pub mod cors;
pub mod request_log;
pub mod request_trace;
pub mod security_headers;

pub use cors::cors_middleware;
pub use request_log::RequestLog;
pub use request_trace::RequestTrace;
pub use security_headers::SecurityHeaders;
