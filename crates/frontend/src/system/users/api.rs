use contracts::system::users::{PasswordChangeRequest, ProfileUpdate, User};

use crate::shared::api_utils::{put_json, ApiResult};

/// Update own profile
pub async fn update_profile(update: &ProfileUpdate) -> ApiResult<User> {
    put_json("/users/me", update).await
}

/// Change own password
pub async fn change_password(request: &PasswordChangeRequest) -> ApiResult<User> {
    put_json("/users/me/password", request).await
}
