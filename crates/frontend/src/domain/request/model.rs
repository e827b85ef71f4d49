use contracts::domain::request::{fields, RequestType};

use crate::shared::form::{is_blank, FormDraft};

/// Draft of the request-submission form. `F` is the attachment type
/// (`web_sys::File` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDraft<F = web_sys::File> {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub request_type: RequestType,
    pub location: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
    pub files: Vec<F>,
}

impl<F> Default for RequestDraft<F> {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            request_type: RequestType::default(),
            location: String::new(),
            budget: String::new(),
            timeline: String::new(),
            description: String::new(),
            files: Vec::new(),
        }
    }
}

impl<F> RequestDraft<F> {
    /// Append attachments after the ones already picked.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = F>) {
        self.files.extend(files);
    }

    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }
}

/// Multipart payload: ordered text parts plus one `documents` part per file.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSubmission<F> {
    pub fields: Vec<(&'static str, String)>,
    pub files: Vec<F>,
}

impl<F: Clone> FormDraft for RequestDraft<F> {
    type Body = RequestSubmission<F>;

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.full_name),
            ("Email", &self.email),
            ("Description", &self.description),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| label)
        .collect()
    }

    fn to_body(&self) -> RequestSubmission<F> {
        RequestSubmission {
            fields: vec![
                (fields::FULL_NAME, self.full_name.clone()),
                (fields::EMAIL, self.email.clone()),
                (fields::PHONE_NUMBER, self.phone_number.clone()),
                (fields::REQUEST_TYPE, self.request_type.as_str().to_string()),
                (fields::LOCATION, self.location.clone()),
                (fields::BUDGET, self.budget.clone()),
                (fields::TIMELINE, self.timeline.clone()),
                (fields::DESCRIPTION, self.description.clone()),
            ],
            files: self.files.clone(),
        }
    }
}
