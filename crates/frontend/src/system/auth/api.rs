use contracts::system::auth::LoginRequest;

use crate::shared::api::{post_empty, ApiError};

/// Login with email and password; the session lives in a cookie
pub async fn login(request: &LoginRequest) -> Result<(), ApiError> {
    post_empty("/api/auth/login", Some(request)).await
}

/// Logout (ends the cookie session)
pub async fn logout() -> Result<(), ApiError> {
    post_empty("/api/auth/logout", Some(&serde_json::json!({}))).await
}
