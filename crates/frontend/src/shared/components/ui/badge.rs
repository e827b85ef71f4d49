use contracts::domain::request::RequestStatus;
use leptos::prelude::*;

/// Colour class for a request status
pub fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge badge--warning",
        RequestStatus::Approved | RequestStatus::Open => "badge badge--success",
        RequestStatus::Rejected => "badge badge--error",
        RequestStatus::Unknown => "badge badge--neutral",
    }
}

#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! {
        <span class=status_class(status)>{status.label()}</span>
    }
}
