use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div>
                    <h4>"JV Market"</h4>
                    <p>"Connecting landowners, developers and investors."</p>
                </div>
                <nav class="footer__links">
                    <A href="/browse-requests">"Browse Requests"</A>
                    <A href="/submit-request">"Submit Request"</A>
                    <A href="/contact">"Contact"</A>
                </nav>
            </div>
            <div class="footer__bottom">{format!("© {} JV Market. All rights reserved.", year)}</div>
        </footer>
    }
}
