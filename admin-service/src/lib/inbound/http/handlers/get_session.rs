use auth::Subject;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAdmin;

/// Return the principal the authentication middleware reconstructed from
/// the presented token.
pub async fn get_session(
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> ApiSuccess<SessionData> {
    ApiSuccess::new(
        StatusCode::OK,
        SessionData {
            user_id: admin.user_id,
            username: admin.username,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    /// Subject claim, serialized with its original JSON type
    pub user_id: Subject,
    pub username: String,
}
