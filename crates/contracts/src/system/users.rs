use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Server-side lower bound for passwords.
pub const MIN_PASSWORD_LEN: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parses_rfc3339_timestamps() {
        let json = r#"{
            "id":"6f1f1c2e-9f9a-4e51-8d4c-3c2b1a0f9e8d",
            "email":"ana@example.com",
            "name":"Ana",
            "is_active":true,
            "created_at":"2024-03-01T10:00:00Z",
            "updated_at":"2024-03-02T11:30:00+00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Ana");
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let body = ProfileUpdate {
            name: Some("Ana Souza".into()),
            avatar_url: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"name":"Ana Souza"}"#
        );
    }
}
