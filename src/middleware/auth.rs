use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::{
    error::{Error, Result},
    AppState,
};

pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Rejects the request with 401 unless `X-Admin-Password` matches the
/// configured secret. Runs before the handler, so nothing is written.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match verify_admin_password(req.headers(), &state.admin_password) {
        Ok(()) => next.run(req).await,
        Err(err) => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                reason = %err,
                "admin request rejected"
            );
            err.into_response()
        }
    }
}

pub fn verify_admin_password(headers: &HeaderMap, expected: &str) -> Result<()> {
    let Some(header) = headers.get(ADMIN_PASSWORD_HEADER) else {
        return Err(Error::Unauthorized("missing_admin_password".into()));
    };
    let provided = header
        .to_str()
        .map_err(|_| Error::Unauthorized("invalid_admin_password_header".into()))?;
    if ConstantTimeEq::ct_eq(provided.as_bytes(), expected.as_bytes()).into() {
        Ok(())
    } else {
        Err(Error::Unauthorized("invalid_admin_password".into()))
    }
}
