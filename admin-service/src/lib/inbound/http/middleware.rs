use auth::Subject;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub user_id: Subject,
    pub username: String,
}

/// Middleware that validates session tokens and attaches the principal to
/// the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token(req.headers(), &state.cookie.name).ok_or_else(|| {
        ApiError::Unauthorized("Missing authentication token".to_string()).into_response()
    })?;

    let principal = state.session_service.authorize(&token).map_err(|e| {
        tracing::warn!(error = %e, "Token validation failed");
        ApiError::from(e).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedAdmin {
        user_id: principal.user_id,
        username: principal.username,
    });

    Ok(next.run(req).await)
}

/// Locate a candidate token on the request.
///
/// Extraction order is a behavioral contract: the session cookie wins when
/// present and non-empty, even if its value later fails validation; the
/// bearer header is only consulted when the cookie is absent. The dual path
/// lets browser clients (cookie) and API clients (header) share one backend.
fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    bearer_token(headers)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::to_string)
}
