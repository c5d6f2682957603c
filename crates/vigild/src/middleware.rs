//! Request middleware for body limits.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Maximum request body size: 64 KiB
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Reject requests whose declared Content-Length exceeds [`MAX_BODY_SIZE`].
pub async fn body_size_limit(request: Request, next: Next) -> Result<Response, StatusCode> {
    let declared = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());

    if let Some(length) = declared {
        if length > MAX_BODY_SIZE {
            warn!(
                "Rejecting request body of {} bytes (max {})",
                length, MAX_BODY_SIZE
            );
            return Err(StatusCode::PAYLOAD_TOO_LARGE);
        }
    }

    Ok(next.run(request).await)
}
