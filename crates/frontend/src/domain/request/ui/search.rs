use contracts::domain::request::{RequestRecord, RequestType};
use leptos::prelude::*;

use crate::domain::request::api;
use crate::shared::remote::{fetch_into, RemoteSlot};
use crate::system::auth::session::SessionContext;

pub const SEARCH_FAILURE: &str = "An error occurred while fetching requests";

/// `GET /request/search` bound to a [`RemoteSlot`] signal. Each `search`
/// replaces the previous result in full; only the latest search lands.
#[derive(Clone, Copy)]
pub struct RequestSearch {
    pub results: RwSignal<RemoteSlot<Vec<RequestRecord>>>,
    session: SessionContext,
}

impl RequestSearch {
    pub fn new(session: SessionContext) -> Self {
        Self {
            results: RwSignal::new(RemoteSlot::default()),
            session,
        }
    }

    pub fn search(&self, request_type: Option<RequestType>) {
        let token = self.session.token();
        fetch_into(
            self.results,
            api::search_requests(request_type, token),
            SEARCH_FAILURE,
        );
    }
}
