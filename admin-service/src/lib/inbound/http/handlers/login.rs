use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;
use serde::Serialize;
use time::Duration;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::session::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    // Field validation happens before the core and is reported as a client
    // input error, not an authentication failure.
    let credentials = Credentials::new(body.username, body.password)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    // On failure no cookie is set; the jar is dropped with the error.
    let issued = state.session_service.login(&credentials)?;

    let cookie = session_cookie(&state, issued.access_token);

    // The token travels only in the cookie, never in the body.
    Ok((
        jar.add(cookie),
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login successful".to_string(),
            },
        ),
    ))
}

fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((state.cookie.name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(state.cookie.secure)
        .same_site(SameSite::Strict)
        .max_age(Duration::hours(state.cookie.max_age_hours))
        .build()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
}
