//! Tower middleware for the REST API

pub mod auth;
pub mod request_id;

pub use auth::{AuthConfig, AuthLayer, Principal};
pub use request_id::{RequestId, RequestIdLayer};
