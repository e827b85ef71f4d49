use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of joint-venture request. Lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    #[default]
    Land,
    Development,
    Partnership,
    Other,
}

impl RequestType {
    pub const ALL: [RequestType; 4] = [
        RequestType::Land,
        RequestType::Development,
        RequestType::Partnership,
        RequestType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Land => "land",
            RequestType::Development => "development",
            RequestType::Partnership => "partnership",
            RequestType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestType::Land => "Land",
            RequestType::Development => "Development",
            RequestType::Partnership => "Partnership",
            RequestType::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Open,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Open => "Open",
            RequestStatus::Unknown => "Unknown",
        }
    }
}

/// Request as stored by the backend. The client only renders these.
///
/// Decoding is lenient: `null` reads as the field default, an
/// unrecognised `requestType` as `None` and a malformed date as `None`, so
/// one odd document never fails a whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestRecord {
    #[serde(alias = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    pub user_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub budget: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timeline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_request_type")]
    pub request_type: Option<RequestType>,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub documents: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: RequestStatus,
    #[serde(deserialize_with = "lenient_date")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_date")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_request_type<'de, D>(deserializer: D) -> Result<Option<RequestType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|s| RequestType::parse(&s)))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|s| s.parse().ok()))
}

/// Text part names of the multipart body sent to `POST /request/create`.
pub mod fields {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const REQUEST_TYPE: &str = "requestType";
    pub const LOCATION: &str = "location";
    pub const BUDGET: &str = "budget";
    pub const TIMELINE: &str = "timeline";
    pub const DESCRIPTION: &str = "description";
    /// Repeated once per attached file.
    pub const DOCUMENTS: &str = "documents";
}

/// Query of `GET /request/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequestSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_from_mongo_style_document() {
        let rec: RequestRecord = serde_json::from_value(json!({
            "_id": "r1",
            "fullName": "Ada Obi",
            "requestType": "development",
            "budget": "₦50m",
            "location": "Lekki",
            "description": "Mixed-use build",
            "documents": ["https://cdn/x.pdf"],
            "status": "approved",
            "createdAt": "2024-03-15T14:02:26.123Z"
        }))
        .unwrap();
        assert_eq!(rec.id, "r1");
        assert_eq!(rec.request_type, Some(RequestType::Development));
        assert_eq!(rec.status, RequestStatus::Approved);
        assert_eq!(rec.documents.len(), 1);
        assert!(rec.created_at.is_some());
        assert_eq!(rec.timeline, "");
    }

    #[test]
    fn unknown_status_does_not_fail() {
        let rec: RequestRecord =
            serde_json::from_value(json!({ "id": "r2", "status": "archived" })).unwrap();
        assert_eq!(rec.status, RequestStatus::Unknown);
        assert_eq!(rec.request_type, None);
    }

    #[test]
    fn request_type_parse_is_case_insensitive() {
        assert_eq!(RequestType::parse("Land"), Some(RequestType::Land));
        assert_eq!(RequestType::parse(" partnership "), Some(RequestType::Partnership));
        assert_eq!(RequestType::parse("All"), None);
    }

    #[test]
    fn nulls_read_as_defaults() {
        let list: Vec<RequestRecord> = serde_json::from_value(json!([
            { "_id": "r1", "fullName": "Ada Obi", "phoneNumber": "0803" },
            {
                "_id": "r2",
                "fullName": "Bola Ade",
                "phoneNumber": null,
                "documents": null,
                "status": null,
                "requestType": null,
                "createdAt": null
            }
        ]))
        .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].phone_number, "");
        assert!(list[1].documents.is_empty());
        assert_eq!(list[1].status, RequestStatus::Pending);
        assert_eq!(list[1].request_type, None);
        assert_eq!(list[1].created_at, None);
    }

    #[test]
    fn request_type_is_parsed_leniently() {
        let list: Vec<RequestRecord> = serde_json::from_value(json!([
            { "id": "r1", "requestType": "Land" },
            { "id": "r2", "requestType": "joint venture" },
            { "id": "r3", "requestType": "partnership", "createdAt": "yesterday" }
        ]))
        .unwrap();
        assert_eq!(list[0].request_type, Some(RequestType::Land));
        assert_eq!(list[1].request_type, None);
        assert_eq!(list[2].request_type, Some(RequestType::Partnership));
        assert_eq!(list[2].created_at, None);
    }
}
