use contracts::shared::api::MessageResponse;
use contracts::system::auth::{LoginRequest, LoginResponse, PasswordOtpRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json, ApiError};

/// Exchange the identity provider's email for an application session
pub async fn login(google_email: &str) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        google_email: google_email.to_string(),
    };

    let response = Request::post(&api_url("/auth/login"))
        .json(&request)?
        .send()
        .await?;

    read_json(response).await
}

/// Ask the backend to email a password-reset OTP
pub async fn request_password_otp(email: &str) -> Result<MessageResponse, ApiError> {
    let request = PasswordOtpRequest {
        email: email.to_string(),
    };

    let response = Request::post(&api_url("/auth/password/otp"))
        .json(&request)?
        .send()
        .await?;

    read_json(response).await
}
