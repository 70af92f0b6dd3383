use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_session::get_session;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::middleware::authenticate as auth_middleware;
use crate::domain::session::service::SessionService;
use crate::outbound::password::Argon2Verifier;

#[derive(Clone)]
pub struct AppState {
    pub session_service: Arc<SessionService<Argon2Verifier>>,
    pub cookie: CookieSettings,
}

/// Session cookie attributes shared by login, logout, and token extraction.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    /// Secure flag; on only in production-like environments
    pub secure: bool,
    /// Mirrors the token lifetime
    pub max_age_hours: i64,
}

pub fn create_router(
    session_service: Arc<SessionService<Argon2Verifier>>,
    cookie: CookieSettings,
) -> Router {
    let state = AppState {
        session_service,
        cookie,
    };

    let public_routes = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout));

    let protected_routes = Router::new()
        .route("/api/auth/session", get(get_session))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
