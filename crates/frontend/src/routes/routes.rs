use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::admin::{AdminDashboard, AdminRequests};
use crate::domain::contact::ui::ContactPage;
use crate::domain::request::ui::{BrowseRequestsPage, SubmitRequestPage};
use crate::layout::{AdminLayout, Shell};
use crate::system::pages::forgot_password::{ForgotPasswordPage, VerifyOtpPage};
use crate::system::pages::home::{HomePage, NotFoundPage};
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/submit-request") view=SubmitRequestPage />
                    <Route path=path!("/browse-requests") view=BrowseRequestsPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=|| view! { <RegisterPage /> } />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/forgot-password/verify-otp") view=VerifyOtpPage />
                    <ParentRoute path=path!("/admin") view=AdminLayout>
                        <Route path=path!("") view=AdminDashboard />
                        <Route path=path!("requests") view=AdminRequests />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
