//! REST API DTOs
//!
//! The two action routes answer with the raw contract values (a JSON array
//! of actions, an empty accepted body); the envelope below is used by errors
//! and ambient routes.

use serde::Serialize;

/// Response envelope wrapper
#[derive(Serialize)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    pub data: T,
    pub metadata: ResponseMeta,
}

/// Response metadata
#[derive(Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidecar_id: Option<String>,
}
