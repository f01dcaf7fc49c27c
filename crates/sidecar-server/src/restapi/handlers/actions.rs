//! Collector action handlers
//!
//! The queued action list for a sidecar is fetched with GET and replaced
//! with PUT. An unknown sidecar id is answered with an empty list; "no
//! actions queued" and "never seen" are not distinguished here.

use crate::{
    error::{ErrorResponse, ServerError},
    middleware::{auth::Principal, request_id::RequestId},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use sidecar_core::{audit, permissions, types::is_valid_sidecar_id, CollectorAction};

/// GET /sidecar/action/{sidecar_id}
pub async fn get_actions(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(principal): Extension<Principal>,
    Path(sidecar_id): Path<String>,
) -> Result<Json<Vec<CollectorAction>>, (StatusCode, Json<ErrorResponse>)> {
    let req_id = request_id.0.clone();

    principal
        .require(permissions::SIDECARS_READ)
        .map_err(|e| e.to_http_response(req_id.clone()))?;
    let sidecar_id = validate_sidecar_id(&sidecar_id).map_err(|e| e.to_http_response(req_id.clone()))?;

    // The flag is fixed to false here: fetching through the REST surface
    // must not consume the queued document.
    let found = app_state
        .service
        .find_action_by_sidecar(sidecar_id, false)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(req_id))?;

    Ok(Json(found.map(|doc| doc.actions).unwrap_or_default()))
}

/// PUT /sidecar/action/{sidecar_id}
pub async fn put_actions(
    State(app_state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Extension(principal): Extension<Principal>,
    Path(sidecar_id): Path<String>,
    body: Result<Json<Vec<CollectorAction>>, JsonRejection>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let req_id = request_id.0.clone();

    principal
        .require(permissions::SIDECARS_UPDATE)
        .map_err(|e| e.to_http_response(req_id.clone()))?;
    let sidecar_id = validate_sidecar_id(&sidecar_id).map_err(|e| e.to_http_response(req_id.clone()))?;

    // Map body rejections to 400: the contract is "invalid action list",
    // not the framework's default unprocessable-entity answer.
    let Json(request) = body
        .map_err(|rejection| ServerError::InvalidInput(rejection.body_text()))
        .map_err(|e| e.to_http_response(req_id.clone()))?;
    if request.iter().any(|action| !action.is_valid()) {
        let err = ServerError::InvalidInput("collector_id must not be empty".to_string());
        return Err(err.to_http_response(req_id));
    }

    let collector_actions = app_state
        .service
        .from_request(sidecar_id, request)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(req_id.clone()))?;
    app_state
        .service
        .save_action(&collector_actions)
        .await
        .map_err(ServerError::from)
        .map_err(|e| e.to_http_response(req_id.clone()))?;

    app_state.audit.record(audit::AuditEvent::new(
        audit::ACTION_UPDATE,
        principal.name(),
        sidecar_id,
        req_id,
    ));

    Ok(StatusCode::ACCEPTED)
}

fn validate_sidecar_id(sidecar_id: &str) -> Result<&str, ServerError> {
    if is_valid_sidecar_id(sidecar_id) {
        Ok(sidecar_id.trim())
    } else {
        Err(ServerError::InvalidInput("sidecar id must not be empty".to_string()))
    }
}
