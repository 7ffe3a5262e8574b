use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use onbajet_core::SessionHints;

use crate::{error::AppError, state::AppState};

// Set by the identity layer in front of this service.
pub const GUEST_HEADER: HeaderName = HeaderName::from_static("x-onbajet-guest");
pub const SUBJECT_HEADER: HeaderName = HeaderName::from_static("x-onbajet-subject");
pub const PROVIDER_HEADER: HeaderName = HeaderName::from_static("x-onbajet-provider");
pub const EMAIL_HEADER: HeaderName = HeaderName::from_static("x-onbajet-email");

pub fn hints_from_headers(headers: &HeaderMap) -> SessionHints {
    let text = |name: &HeaderName| {
        headers
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    SessionHints {
        guest: matches!(
            text(&GUEST_HEADER).as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("1") | Some("true") | Some("yes")
        ),
        subject: text(&SUBJECT_HEADER),
        provider: text(&PROVIDER_HEADER),
        email: text(&EMAIL_HEADER),
    }
}

/// Resolve the viewer and refuse anonymous requests. The resolved
/// [`onbajet_core::Viewer`] is placed in the request extensions.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let hints = hints_from_headers(req.headers());
    let viewer = state.identity.resolve(&hints).await?;

    if !viewer.can_browse() {
        return Err(AppError::Unauthorized(
            "Sign in or continue as a guest".to_string(),
        ));
    }

    req.extensions_mut().insert(viewer);

    Ok(next.run(req).await)
}
