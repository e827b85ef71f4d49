use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::banner::{flash, Banner, BannerSlot, BannerView};
use crate::system::auth::identity::{use_identity, IdentityError, IdentityProvider};
use crate::system::auth::session::{use_session, SyncPhase};

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = use_identity();
    let session = use_session();
    let navigate = use_navigate();
    let banner = RwSignal::new(BannerSlot::default());
    let (popup_open, set_popup_open) = signal(false);

    // back to the landing page once the backend session exists
    Effect::new(move |_| {
        if session.phase() == SyncPhase::Synced {
            navigate("/", Default::default());
        }
    });

    let busy = move || popup_open.get() || session.phase() == SyncPhase::Syncing;

    let on_google = move |_| {
        set_popup_open.set(true);
        spawn_local(async move {
            match identity.sign_in().await {
                Ok(_) => log::info!("Identity provider sign-in completed"),
                Err(IdentityError::Cancelled) => log::debug!("Sign-in popup closed"),
                Err(e) => {
                    log::error!("Sign-in failed: {}", e);
                    flash(banner, Banner::Error("Google sign-in failed. Please try again.".into()));
                }
            }
            set_popup_open.try_set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box card">
                <h1>"Welcome Back"</h1>
                <p>"Sign in to submit and track joint-venture requests."</p>

                <BannerView banner=Signal::derive(move || banner.with(|b| b.current().cloned())) />

                <button
                    type="button"
                    class="button button--primary login-box__google"
                    disabled=busy
                    on:click=on_google
                >
                    {move || if busy() { "Signing in..." } else { "Continue with Google" }}
                </button>

                <div class="login-box__links">
                    <A href="/forgot-password">"Forgot password?"</A>
                    <span>"Don't have an account? " <A href="/register">"Register"</A></span>
                </div>
            </div>
        </div>
    }
}
