use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Clear the session cookie.
///
/// Idempotent and infallible: logging out without an active cookie is not
/// an error. Tokens are stateless, so there is no server-side session to
/// tear down; an already-issued token stays valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<LogoutResponseData>) {
    // Removal attributes must match the ones the cookie was set with.
    let removal = Cookie::build((state.cookie.name.clone(), ""))
        .path("/")
        .build();

    (
        jar.remove(removal),
        ApiSuccess::new(
            StatusCode::OK,
            LogoutResponseData {
                message: "Logout successful".to_string(),
            },
        ),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
