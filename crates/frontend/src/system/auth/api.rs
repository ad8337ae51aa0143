use contracts::system::auth::{LoginRequest, RegisterRequest, RegisterResponse, TokenResponse};
use contracts::system::users::User;

use crate::shared::api_utils::{get_json, post_json, ApiResult};

/// Login with email and password
pub async fn login(email: String, password: String) -> ApiResult<TokenResponse> {
    let request = LoginRequest { email, password };
    post_json("/auth/login/json", &request).await
}

/// Create an account; the caller logs in afterwards
pub async fn register(request: &RegisterRequest) -> ApiResult<RegisterResponse> {
    post_json("/auth/register", request).await
}

/// Get current user info
pub async fn get_current_user() -> ApiResult<User> {
    get_json("/auth/me").await
}
