pub mod error_shape;
pub mod healthcheck;
pub mod response_headers;
