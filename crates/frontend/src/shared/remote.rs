//! Result of a one-shot fetch, rendered by list pages.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Loading
    }
}

impl<T> Remote<T> {
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(e) => Remote::Failed(e.user_message(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// A [`Remote`] that may be refetched. Every fetch takes a ticket and only
/// the latest ticket may settle, so a slow older response never replaces
/// a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteSlot<T> {
    current: Remote<T>,
    issued: u64,
}

impl<T> Default for RemoteSlot<T> {
    fn default() -> Self {
        Self {
            current: Remote::Loading,
            issued: 0,
        }
    }
}

impl<T> RemoteSlot<T> {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.current = Remote::Loading;
        self.issued
    }

    /// Returns `false` (and keeps the current value) for a stale ticket.
    pub fn settle(&mut self, ticket: u64, value: Remote<T>) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.current = value;
        true
    }

    pub fn current(&self) -> &Remote<T> {
        &self.current
    }
}

/// Put `target` into `Loading`, run `fetch`, then replace the whole value
/// with the outcome unless a later fetch has started meanwhile.
pub fn fetch_into<T, Fut>(target: RwSignal<RemoteSlot<T>>, fetch: Fut, fallback: &'static str)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(ticket) = target.try_update(|slot| slot.begin()) else {
        return;
    };
    spawn_local(async move {
        let result = fetch.await;
        if let Err(e) = &result {
            log::error!("Fetch failed: {}", e);
        }
        let settled = target.try_update(|slot| slot.settle(ticket, Remote::from_result(result, fallback)));
        if settled == Some(false) {
            log::debug!("Dropped stale response for fetch #{}", ticket);
        }
    });
}

/// "Retry" on a failed page: reload the whole document.
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
