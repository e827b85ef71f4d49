use contracts::domain::request::{fields, RequestRecord, RequestSearchQuery, RequestType};
use contracts::shared::api::{DataEnvelope, MessageResponse};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::model::RequestSubmission;
use crate::shared::api_utils::{api_url, bearer, read_json, ApiError};

fn js_err(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Serialize(format!("{:?}", e))
}

fn multipart(body: &RequestSubmission<File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_err)?;
    for (name, value) in &body.fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    for file in &body.files {
        form.append_with_blob_and_filename(fields::DOCUMENTS, file, &file.name())
            .map_err(js_err)?;
    }
    Ok(form)
}

/// Submit a new request with its attachments
pub async fn create_request(
    body: RequestSubmission<File>,
    token: Option<String>,
) -> Result<MessageResponse, ApiError> {
    let form = multipart(&body)?;

    let response = Request::post(&api_url("/request/create"))
        .header("Authorization", &bearer(token.as_deref()))
        .body(form)?
        .send()
        .await?;

    read_json(response).await
}

/// Fetch all requests
pub async fn fetch_requests(token: Option<String>) -> Result<Vec<RequestRecord>, ApiError> {
    let response = Request::get(&api_url("/request"))
        .header("Authorization", &bearer(token.as_deref()))
        .send()
        .await?;

    read_json(response).await
}

/// Path and query for a search; no type means no parameter.
pub fn search_path(request_type: Option<RequestType>) -> String {
    let query = serde_qs::to_string(&RequestSearchQuery { request_type }).unwrap_or_default();
    if query.is_empty() {
        "/request/search".to_string()
    } else {
        format!("/request/search?{}", query)
    }
}

/// Search requests, optionally by type
pub async fn search_requests(
    request_type: Option<RequestType>,
    token: Option<String>,
) -> Result<Vec<RequestRecord>, ApiError> {
    let response = Request::get(&api_url(&search_path(request_type)))
        .header("Authorization", &bearer(token.as_deref()))
        .send()
        .await?;

    read_json::<DataEnvelope<RequestRecord>>(response)
        .await
        .map(|envelope| envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_with_and_without_type() {
        assert_eq!(search_path(None), "/request/search");
        assert_eq!(
            search_path(Some(RequestType::Development)),
            "/request/search?requestType=development"
        );
    }
}
