use std::sync::Arc;

use admin_service::domain::session::models::AdminIdentity;
use admin_service::domain::session::service::SessionService;
use admin_service::inbound::http::router::create_router;
use admin_service::inbound::http::router::CookieSettings;
use admin_service::outbound::password::Argon2Verifier;
use auth::JwtHandler;
use auth::PasswordHasher;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    pub cookie_name: String,
}

impl TestApp {
    pub const ADMIN_USERNAME: &'static str = "admin";
    pub const ADMIN_PASSWORD: &'static str = "password";

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let password_hash = PasswordHasher::new()
            .hash(Self::ADMIN_PASSWORD)
            .expect("Failed to hash admin password");
        let identity = AdminIdentity::new(Self::ADMIN_USERNAME.to_string(), password_hash)
            .expect("Failed to build admin identity");

        let session_service = Arc::new(SessionService::new(
            identity,
            Argon2Verifier::new(),
            JWT_SECRET,
            24,
        ));

        let cookie_name = "access_token".to_string();
        let router = create_router(
            session_service,
            CookieSettings {
                name: cookie_name.clone(),
                secure: false,
                max_age_hours: 24,
            },
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            // No automatic cookie store: every test states its cookie and
            // header handling explicitly.
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            cookie_name,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Log in with the fixture credentials and return the issued token,
    /// extracted from the set-cookie header.
    pub async fn login_and_capture_token(&self) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "username": Self::ADMIN_USERNAME,
                "password": Self::ADMIN_PASSWORD,
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(reqwest::header::SET_COOKIE)
            .expect("Login response carries no set-cookie header")
            .to_str()
            .expect("set-cookie header is not valid UTF-8");

        parse_cookie_value(set_cookie, &self.cookie_name)
            .expect("set-cookie header does not contain the session cookie")
    }
}

/// Extract a cookie value from a `Set-Cookie` header line.
pub fn parse_cookie_value(set_cookie: &str, name: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?;
    let (cookie_name, value) = pair.split_once('=')?;
    (cookie_name.trim() == name).then(|| value.to_string())
}
