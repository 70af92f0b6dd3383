use std::sync::Arc;

use admin_service::config::Config;
use admin_service::domain::session::models::AdminIdentity;
use admin_service::domain::session::service::SessionService;
use admin_service::inbound::http::router::create_router;
use admin_service::inbound::http::router::CookieSettings;
use admin_service::outbound::password::Argon2Verifier;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "admin-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // Secrets and hashes stay out of the logs.
    tracing::info!(
        http_port = config.server.http_port,
        cookie_name = %config.cookie.name,
        secure_cookies = config.cookie.secure,
        admin_username = %config.admin.username,
        token_expiration_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    if config.jwt.secret.is_empty() {
        anyhow::bail!("jwt.secret must not be empty");
    }

    // A malformed stored hash is a configuration error: refuse to boot
    // instead of failing every login at runtime.
    let identity = AdminIdentity::new(
        config.admin.username.clone(),
        config.admin.password_hash.clone(),
    )?;

    let session_service = Arc::new(SessionService::new(
        identity,
        Argon2Verifier::new(),
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let cookie = CookieSettings {
        name: config.cookie.name.clone(),
        secure: config.cookie.secure,
        max_age_hours: config.jwt.expiration_hours,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(session_service, cookie);
    axum::serve(http_listener, application).await?;

    Ok(())
}
