use serde::{Deserialize, Serialize};

/// Options offered by the contact form's consultation select.
pub const CONSULTATION_TYPES: [&str; 4] = [
    "General Inquiry",
    "Landowner Consultation",
    "Investor/Developer Consultation",
    "Mandate Consultation",
];

/// Body of `POST /contact/create`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: String,
    pub email_address: String,
    pub phone_number: String,
    /// Empty when the visitor did not pick an option.
    pub consultation_type: String,
    pub subject: String,
    pub message: String,
}
