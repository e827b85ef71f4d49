use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::system::auth::identity::{use_identity, IdentityProvider};
use crate::system::auth::session::use_session;

const LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/browse-requests", "Browse Requests"),
    ("/submit-request", "Submit Request"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let identity = use_identity();
    let (menu_open, set_menu_open) = signal(false);

    // Clearing the session follows from the identity status change.
    let sign_out = move |_| {
        spawn_local(async move {
            if let Err(e) = identity.sign_out().await {
                log::error!("Sign-out failed: {}", e);
            }
        });
    };

    let user_name = move || {
        session
            .user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href="/" attr:class="header__title">"JV Market"</A>
                <button
                    class="button button--ghost header__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|v| *v = !*v)
                >
                    {"☰"}
                </button>
                <nav
                    class="header__nav"
                    class:header__nav--open=move || menu_open.get()
                    on:click=move |_| set_menu_open.set(false)
                >
                    {LINKS
                        .iter()
                        .map(|(href, label)| view! {
                            <A href=*href>{*label}</A>
                        })
                        .collect_view()}
                </nav>
            </div>
            <div class="header__actions">
                <Show
                    when=move || session.is_signed_in()
                    fallback=|| view! {
                        <A href="/login" attr:class="button button--primary">"Sign In"</A>
                    }
                >
                    <span class="header__user">{user_name}</span>
                    <button class="button button--ghost" on:click=sign_out>"Sign Out"</button>
                </Show>
            </div>
        </header>
    }
}
