use contracts::domain::request::RequestRecord;
use leptos::prelude::*;

use crate::domain::request::api;
use crate::domain::request::filter::{filter_requests, CategoryFilter};
use crate::shared::components::ui::{Select, Spinner, StatusBadge};
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use crate::shared::remote::{fetch_into, reload_page, RemoteSlot};
use crate::system::auth::session::use_session;

const LOAD_FAILURE: &str = "Failed to load requests. Please try again later.";

#[component]
pub fn BrowseRequestsPage() -> impl IntoView {
    let session = use_session();
    let requests: RwSignal<RemoteSlot<Vec<RequestRecord>>> = RwSignal::new(RemoteSlot::default());
    let search_term = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);

    // one fetch per mount
    fetch_into(requests, api::fetch_requests(session.token()), LOAD_FAILURE);

    let visible = move || {
        requests.with(|r| {
            r.current()
                .ready()
                .map(|list| {
                    filter_requests(list, &search_term.get(), category.get())
                        .into_iter()
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        {move || match requests.with(|r| r.current().error().map(str::to_string)) {
            Some(message) => view! {
                <section class="page page--error">
                    <h2>"Error"</h2>
                    <p>{message}</p>
                    <button class="button button--primary" on:click=move |_| reload_page()>
                        "Retry"
                    </button>
                </section>
            }.into_any(),
            None if requests.with(|r| r.current().is_loading()) => view! {
                <section class="page page--loading">
                    <Spinner label="Loading requests..." />
                </section>
            }.into_any(),
            None => view! {
                <section class="page page--browse">
                    <header class="page__header">
                        <h1>"Browse Requests"</h1>
                        <p>"Find joint-venture opportunities that match what you bring."</p>
                    </header>

                    <div class="filters">
                        <div class="form__group filters__search">
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Search requests..."
                                prop:value=move || search_term.get()
                                on:input=move |ev| search_term.set(event_target_value(&ev))
                            />
                        </div>
                        <Select
                            id="category"
                            value=Signal::derive(move || category.get().value().to_string())
                            on_change=Callback::new(move |v: String| category.set(CategoryFilter::parse(&v)))
                            options=CategoryFilter::options()
                        />
                    </div>

                    <div class="request-grid">
                        {move || {
                            let list = visible();
                            if list.is_empty() {
                                view! {
                                    <p class="request-grid__empty">"No requests found matching your criteria."</p>
                                }.into_any()
                            } else {
                                list.into_iter()
                                    .map(|record| view! { <RequestCard record=record /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </section>
            }.into_any(),
        }}
    }
}

#[component]
fn RequestCard(record: RequestRecord) -> impl IntoView {
    let title = record
        .request_type
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| record.category.clone());
    let duration = if record.duration.is_empty() {
        record.timeline.clone()
    } else {
        record.duration.clone()
    };

    view! {
        <article class="card request-card">
            <div class="request-card__head">
                <StatusBadge status=record.status />
            </div>
            <h3 class="request-card__title">{title}</h3>
            <p class="request-card__description">{record.description.clone()}</p>
            <ul class="request-card__meta">
                <li>"Budget: " {record.budget.clone()}</li>
                <li>{icon("location")} {record.location.clone()}</li>
                <li>{icon("clock")} "Duration: " {duration}</li>
                <li>{icon("user")} "Posted by: " {record.full_name.clone()}</li>
                <li>{format_optional_date(record.created_at.as_ref())}</li>
            </ul>
        </article>
    }
}
