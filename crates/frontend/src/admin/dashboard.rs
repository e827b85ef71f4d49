use contracts::domain::request::{RequestRecord, RequestStatus, RequestType};
use leptos::prelude::*;
use leptos_router::components::A;

use super::TypeSelector;
use crate::domain::request::filter::CategoryFilter;
use crate::domain::request::ui::search::RequestSearch;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{Spinner, StatusBadge};
use crate::shared::date_utils::format_optional_date;
use crate::system::auth::session::use_session;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally(records: &[RequestRecord]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut acc, r| {
                match r.status {
                    RequestStatus::Pending => acc.pending += 1,
                    RequestStatus::Approved => acc.approved += 1,
                    RequestStatus::Rejected => acc.rejected += 1,
                    RequestStatus::Open | RequestStatus::Unknown => {}
                }
                acc
            },
        )
    }
}

/// Newest first; records without a creation date go last.
pub fn recent(records: &[RequestRecord], limit: usize) -> Vec<RequestRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let search = RequestSearch::new(use_session());
    let selected = RwSignal::new(CategoryFilter::All);

    search.search(None);

    let on_pick = Callback::new(move |request_type: Option<RequestType>| {
        selected.set(request_type.map_or(CategoryFilter::All, CategoryFilter::Only));
        search.search(request_type);
    });

    let counts = Memo::new(move |_| {
        search
            .results
            .with(|slot| slot.current().ready().map(|list| StatusCounts::tally(list)))
    });
    let count = move |pick: fn(&StatusCounts) -> usize| {
        Signal::derive(move || counts.get().map(|c| pick(&c)))
    };

    view! {
        <section class="page page--admin-dashboard">
            <header class="page__header">
                <h1>"Dashboard"</h1>
                <TypeSelector value=selected on_pick=on_pick />
            </header>

            <div class="stat-grid">
                <StatCard label="Total Requests" icon_name="requests" value=count(|c| c.total) tone=StatTone::Neutral />
                <StatCard label="Pending" icon_name="pending" value=count(|c| c.pending) tone=StatTone::Warning />
                <StatCard label="Approved" icon_name="approved" value=count(|c| c.approved) tone=StatTone::Good />
                <StatCard label="Rejected" icon_name="rejected" value=count(|c| c.rejected) tone=StatTone::Bad />
            </div>

            <div class="card">
                <div class="card__header">
                    <h2>"Recent Requests"</h2>
                    <A href="/admin/requests">"View all"</A>
                </div>
                {move || search.results.with(|slot| {
                    let r = slot.current();
                    if let Some(message) = r.error() {
                        view! { <p class="banner banner--error">{message.to_string()}</p> }.into_any()
                    } else if let Some(list) = r.ready() {
                        let items = recent(list, RECENT_LIMIT);
                        if items.is_empty() {
                            view! { <p class="card__empty">"No requests yet."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="recent-list">
                                    {items
                                        .into_iter()
                                        .map(|record| view! { <RequestItem record=record /> })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }
                    } else {
                        view! { <Spinner label="Loading..." /> }.into_any()
                    }
                })}
            </div>
        </section>
    }
}

#[component]
fn RequestItem(record: RequestRecord) -> impl IntoView {
    let kind = record
        .request_type
        .map(|t| t.label().to_string())
        .unwrap_or_else(|| record.category.clone());

    view! {
        <li class="recent-list__item">
            <div>
                <strong>{record.full_name.clone()}</strong>
                <span class="recent-list__meta">{kind} " · " {record.location.clone()}</span>
            </div>
            <span class="recent-list__date">{format_optional_date(record.created_at.as_ref())}</span>
            <StatusBadge status=record.status />
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, status: RequestStatus, day: Option<u32>) -> RequestRecord {
        RequestRecord {
            id: id.to_string(),
            status,
            created_at: day.map(|d| Utc.with_ymd_and_hms(2024, 5, d, 9, 0, 0).unwrap()),
            ..RequestRecord::default()
        }
    }

    #[test]
    fn tally_counts_each_status() {
        let records = vec![
            record("a", RequestStatus::Pending, None),
            record("b", RequestStatus::Pending, None),
            record("c", RequestStatus::Approved, None),
            record("d", RequestStatus::Rejected, None),
            record("e", RequestStatus::Open, None),
        ];
        assert_eq!(
            StatusCounts::tally(&records),
            StatusCounts {
                total: 5,
                pending: 2,
                approved: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn recent_is_newest_first_and_limited() {
        let records = vec![
            record("old", RequestStatus::Pending, Some(1)),
            record("undated", RequestStatus::Pending, None),
            record("new", RequestStatus::Pending, Some(20)),
            record("mid", RequestStatus::Pending, Some(10)),
        ];
        let ids: Vec<_> = recent(&records, 3).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
