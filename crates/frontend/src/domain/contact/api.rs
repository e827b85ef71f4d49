use contracts::domain::contact::ContactRequest;
use contracts::shared::api::MessageResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer, read_json, ApiError};

/// Send the contact form
pub async fn create_contact(
    body: ContactRequest,
    token: Option<String>,
) -> Result<MessageResponse, ApiError> {
    let response = Request::post(&api_url("/contact/create"))
        .header("Authorization", &bearer(token.as_deref()))
        .json(&body)?
        .send()
        .await?;

    read_json(response).await
}
