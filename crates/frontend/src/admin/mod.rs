pub mod dashboard;
pub mod requests;

pub use dashboard::AdminDashboard;
pub use requests::AdminRequests;

use contracts::domain::request::RequestType;
use leptos::prelude::*;

use crate::domain::request::filter::CategoryFilter;
use crate::shared::components::ui::Select;

/// Request-type selector shared by the admin screens; `on_pick` gets
/// `None` for "All".
#[component]
fn TypeSelector(
    #[prop(into)] value: Signal<CategoryFilter>,
    on_pick: Callback<Option<RequestType>>,
) -> impl IntoView {
    view! {
        <Select
            id="requestType"
            label="Request type"
            value=Signal::derive(move || value.get().value().to_string())
            on_change=Callback::new(move |v: String| on_pick.run(CategoryFilter::parse(&v).request_type()))
            options=CategoryFilter::options()
        />
    }
}
