//! Inline success/error banners that clear themselves.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a banner stays on screen, in milliseconds.
pub const BANNER_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Success(t) | Banner::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Banner::Error(_))
    }

    fn css_class(&self) -> &'static str {
        match self {
            Banner::Success(_) => "banner banner--success",
            Banner::Error(_) => "banner banner--error",
        }
    }
}

/// At most one banner; every `show` hands out a ticket and only the
/// matching ticket may expire it, so an older timer never clears a newer
/// banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerSlot {
    current: Option<(u64, Banner)>,
    issued: u64,
}

impl BannerSlot {
    pub fn show(&mut self, banner: Banner) -> u64 {
        self.issued += 1;
        self.current = Some((self.issued, banner));
        self.issued
    }

    /// Returns `true` if the banner for `ticket` was still showing.
    pub fn expire(&mut self, ticket: u64) -> bool {
        match &self.current {
            Some((t, _)) if *t == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref().map(|(_, b)| b)
    }
}

/// Schedule removal of the banner behind `ticket` after [`BANNER_TTL_MS`].
/// `expire` runs inside the signal update; a disposed signal is ignored.
pub fn schedule_expiry<F>(ticket: u64, expire: F)
where
    F: FnOnce(u64) + 'static,
{
    spawn_local(expire_after(TimeoutFuture::new(BANNER_TTL_MS), ticket, expire));
}

/// Wait for `delay`, then hand `ticket` to `expire`.
pub async fn expire_after<D, F>(delay: D, ticket: u64, expire: F)
where
    D: Future,
    F: FnOnce(u64),
{
    delay.await;
    expire(ticket);
}

/// Show `banner` in a standalone slot and clear it after the TTL.
pub fn flash(slot: RwSignal<BannerSlot>, banner: Banner) {
    let Some(ticket) = slot.try_update(|s| s.show(banner)) else {
        return;
    };
    schedule_expiry(ticket, move |ticket| {
        slot.try_update(|s| s.expire(ticket));
    });
}

#[component]
pub fn BannerView(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    view! {
        {move || banner.get().map(|b| view! {
            <div class=b.css_class() role=if b.is_error() { "alert" } else { "status" }>
                <span>{b.text().to_string()}</span>
            </div>
        })}
    }
}
