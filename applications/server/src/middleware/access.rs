/// Access guard middleware
use crate::{error::ServerError, services::AccessGuard};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Rejects mutating requests whose `Authorization` header does not carry the
/// configured secret. Runs before body extraction, so a rejected request never
/// reaches the store.
pub async fn access_guard_middleware(
    State(guard): State<Arc<AccessGuard>>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    if !AccessGuard::requires_credential(request.method()) {
        return Ok(next.run(request).await);
    }

    let presented = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Err(err) = guard.check(presented) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request with missing or invalid credential"
        );
        return Err(err);
    }

    Ok(next.run(request).await)
}
