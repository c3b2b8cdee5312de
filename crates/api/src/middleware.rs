use axum::{
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};

use storefront_core::SessionId;

use crate::context::SessionContext;

/// Header carrying the visitor session id.
pub const SESSION_HEADER: &str = "x-session-id";

/// Attach a `SessionContext` to every request.
///
/// An unknown or missing header mints a fresh session id; the effective id is
/// echoed back on the response so clients can adopt it.
pub async fn session_middleware(mut req: Request<axum::body::Body>, next: Next) -> Response {
    let session_id = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<SessionId>().ok())
        .unwrap_or_else(SessionId::new);

    req.extensions_mut().insert(SessionContext::new(session_id));

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        res.headers_mut().insert(SESSION_HEADER, value);
    }
    res
}
