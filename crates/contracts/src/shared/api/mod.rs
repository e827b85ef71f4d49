use serde::{Deserialize, Serialize};

/// Generic `{ message }` body returned by the backend on success and on
/// most errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope used by the search endpoints: `{ data: [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Default for DataEnvelope<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_is_optional() {
        let m: MessageResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(m.message, None);
        let m: MessageResponse = serde_json::from_value(json!({ "message": "sent" })).unwrap();
        assert_eq!(m.message.as_deref(), Some("sent"));
    }

    #[test]
    fn missing_data_is_empty_list() {
        let env: DataEnvelope<u32> = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(env.data.is_empty());
    }
}
