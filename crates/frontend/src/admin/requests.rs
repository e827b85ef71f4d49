use contracts::domain::request::RequestType;
use leptos::prelude::*;

use super::TypeSelector;
use crate::domain::request::filter::CategoryFilter;
use crate::domain::request::ui::search::RequestSearch;
use crate::shared::components::ui::{Spinner, StatusBadge};
use crate::shared::date_utils::format_optional_date;
use crate::system::auth::session::use_session;

#[component]
pub fn AdminRequests() -> impl IntoView {
    let search = RequestSearch::new(use_session());
    let selected = RwSignal::new(CategoryFilter::All);

    search.search(None);

    let on_pick = Callback::new(move |request_type: Option<RequestType>| {
        selected.set(request_type.map_or(CategoryFilter::All, CategoryFilter::Only));
        search.search(request_type);
    });

    view! {
        <section class="page page--admin-requests">
            <header class="page__header">
                <h1>"Requests"</h1>
                <TypeSelector value=selected on_pick=on_pick />
            </header>

            {move || search.results.with(|slot| {
                let r = slot.current();
                if let Some(message) = r.error() {
                    view! { <p class="banner banner--error">{message.to_string()}</p> }.into_any()
                } else if let Some(list) = r.ready() {
                    let rows = list.clone();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Type"</th>
                                    <th>"Location"</th>
                                    <th>"Budget"</th>
                                    <th>"Submitted"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.is_empty().then(|| view! {
                                    <tr><td colspan="7" class="table__empty">"No requests found."</td></tr>
                                })}
                                {rows
                                    .into_iter()
                                    .map(|r| {
                                        let kind = r
                                            .request_type
                                            .map(|t| t.label().to_string())
                                            .unwrap_or_else(|| r.category.clone());
                                        view! {
                                            <tr>
                                                <td>{r.full_name}</td>
                                                <td>{r.email}</td>
                                                <td>{kind}</td>
                                                <td>{r.location}</td>
                                                <td>{r.budget}</td>
                                                <td>{format_optional_date(r.created_at.as_ref())}</td>
                                                <td><StatusBadge status=r.status /></td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                } else {
                    view! { <Spinner label="Loading requests..." /> }.into_any()
                }
            })}
        </section>
    }
}
