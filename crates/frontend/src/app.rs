use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::system::auth::identity::FirebaseIdentity;
use crate::system::auth::session::create_session_store;
use crate::system::auth::sync::AuthSync;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Readers get the session through context; the writer stays with AuthSync.
    let (session, writer) = create_session_store();
    provide_context(session);

    provide_context(ToastService::new());
    provide_context(FirebaseIdentity::init(&config().firebase));

    view! {
        <AuthSync writer=writer />
        <AppRoutes />
    }
}
