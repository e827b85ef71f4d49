use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/login`: the email the identity provider vouched for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub google_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Backend user profile. Only a few keys are read by the client,
/// everything else is carried along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Name for greetings: full name, then email, then id.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Body of `POST /auth/password/otp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordOtpRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_request_uses_google_email_key() {
        let body = serde_json::to_value(LoginRequest {
            google_email: "ada@example.com".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "googleEmail": "ada@example.com" }));
    }

    #[test]
    fn login_response_with_minimal_user() {
        let resp: LoginResponse =
            serde_json::from_value(json!({ "user": { "id": "u1" }, "token": "t1" })).unwrap();
        assert_eq!(resp.user.id, "u1");
        assert_eq!(resp.token, "t1");
        assert!(resp.user.extra.is_empty());
    }

    #[test]
    fn user_profile_keeps_unknown_keys() {
        let user: UserProfile = serde_json::from_value(json!({
            "_id": "64f0",
            "fullName": "Ada Obi",
            "googleEmail": "ada@example.com",
            "isVerified": true
        }))
        .unwrap();
        assert_eq!(user.id, "64f0");
        assert_eq!(user.display_name(), "Ada Obi");
        assert_eq!(user.extra.get("isVerified"), Some(&json!(true)));
    }

    #[test]
    fn display_name_falls_back_to_email_then_id() {
        let mut user = UserProfile {
            id: "u1".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "u1");
        user.email = Some("a@b.c".into());
        assert_eq!(user.display_name(), "a@b.c");
        user.full_name = Some("  ".into());
        assert_eq!(user.display_name(), "a@b.c");
    }
}
