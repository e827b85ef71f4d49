pub mod chrome;
pub mod footer;
pub mod header;
pub mod left;
pub mod toast_service;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use chrome::chrome_for;
use toast_service::ToastHost;

/// Public site frame.
///
/// ```text
/// +------------------------------+
/// |   Navbar (public paths)      |
/// +------------------------------+
/// |   page content               |
/// +------------------------------+
/// |   Footer (public paths)      |
/// +------------------------------+
/// ```
///
/// Sign-in pages and the admin area render without navbar and footer.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let location = use_location();
    let chrome = Memo::new(move |_| chrome_for(&location.pathname.get()));

    view! {
        <div class="app-layout">
            <Show when=move || chrome.get().navbar>
                <header::Navbar />
            </Show>
            <main class="app-main">
                {children()}
            </main>
            <Show when=move || chrome.get().footer>
                <footer::Footer />
            </Show>
            <ToastHost />
        </div>
    }
}

/// Admin frame: sidebar plus the nested admin route.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <div class="admin-layout">
            <aside class="app-sidebar">
                <left::Sidebar />
            </aside>
            <div class="admin-layout__content">
                <Outlet />
            </div>
        </div>
    }
}
