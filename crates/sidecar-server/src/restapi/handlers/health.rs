//! Health check handlers

use crate::{
    dto::{ResponseEnvelope, ResponseMeta},
    middleware::request_id::RequestId,
    AppState,
};
use axum::{
    extract::{Extension, State},
    response::Json,
};
use serde_json::json;

/// GET /health
pub async fn health_check(
    State(_app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Json<ResponseEnvelope<serde_json::Value>> {
    let response = ResponseEnvelope {
        success: true,
        data: json!({
            "status": "healthy",
            "service": "sidecar-server",
            "version": env!("CARGO_PKG_VERSION")
        }),
        metadata: ResponseMeta { request_id: request_id.0, sidecar_id: None },
    };

    Json(response)
}
