//! Client-side narrowing of a loaded request list.

use contracts::domain::request::{RequestRecord, RequestType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RequestType),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        RequestType::parse(value)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn value(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(t) => t.as_str(),
        }
    }

    /// `(value, label)` pairs for a select.
    pub fn options() -> Vec<(String, String)> {
        std::iter::once(("all".to_string(), "All".to_string()))
            .chain(
                RequestType::ALL
                    .iter()
                    .map(|t| (t.as_str().to_string(), t.label().to_string())),
            )
            .collect()
    }

    pub fn request_type(&self) -> Option<RequestType> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(t) => Some(*t),
        }
    }
}

fn record_type(record: &RequestRecord) -> Option<RequestType> {
    record
        .request_type
        .or_else(|| RequestType::parse(&record.category))
}

pub fn matches(record: &RequestRecord, term: &str, category: CategoryFilter) -> bool {
    let in_category = match category {
        CategoryFilter::All => true,
        CategoryFilter::Only(t) => record_type(record) == Some(t),
    };
    if !in_category {
        return false;
    }

    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    let type_label = record_type(record).map(|t| t.as_str()).unwrap_or_default();
    [
        record.description.as_str(),
        record.location.as_str(),
        record.full_name.as_str(),
        record.category.as_str(),
        type_label,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_requests<'a>(
    records: &'a [RequestRecord],
    term: &str,
    category: CategoryFilter,
) -> Vec<&'a RequestRecord> {
    records
        .iter()
        .filter(|r| matches(r, term, category))
        .collect()
}
