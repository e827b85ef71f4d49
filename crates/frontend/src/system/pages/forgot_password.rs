use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::shared::banner::BannerView;
use crate::shared::components::ui::{Input, SubmitButton};
use crate::shared::form::{bind_text, create_form, is_blank, submit_form, FormDraft};
use crate::system::auth::api;

pub const VERIFY_OTP_PATH: &str = "/forgot-password/verify-otp";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordDraft {
    pub email: String,
}

impl FormDraft for ForgotPasswordDraft {
    type Body = String;

    fn missing_required(&self) -> Vec<&'static str> {
        if is_blank(&self.email) {
            vec!["Email Address"]
        } else {
            Vec::new()
        }
    }

    fn required_message(&self, _missing: &[&'static str]) -> String {
        "Please enter your email address".to_string()
    }

    fn to_body(&self) -> String {
        self.email.trim().to_string()
    }
}

/// Where the OTP step lives for `email`
pub fn verify_otp_path(email: &str) -> String {
    format!("{}?email={}", VERIFY_OTP_PATH, urlencoding::encode(email))
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = create_form::<ForgotPasswordDraft>();
    let (email, set_email) = bind_text(form, |d| &d.email, |d| &mut d.email);

    let busy = Signal::derive(move || form.with(|f| f.submitting));
    let banner = Signal::derive(move || form.with(|f| f.banner.current().cloned()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        submit_form(
            form,
            move |email: String| async move {
                let response = api::request_password_otp(&email).await?;
                log::info!("Password OTP requested");
                navigate(&verify_otp_path(&email), Default::default());
                Ok(response)
            },
            |resp| resp.message.unwrap_or_else(|| "Code sent".to_string()),
        );
    };

    view! {
        <div class="login-container">
            <div class="login-box card">
                <h1>"Forgot Password"</h1>
                <p>"Enter the email address on your account and we will send you a one-time code."</p>

                <form class="form" on:submit=on_submit>
                    <BannerView banner=banner />
                    <Input
                        id="email"
                        label="Email Address"
                        input_type="email"
                        required=true
                        autocomplete="email"
                        value=email
                        on_input=set_email
                    />
                    <SubmitButton busy=busy>"Send Code"</SubmitButton>
                </form>

                <p class="login-box__links">
                    <A href="/login">"Back to Sign In"</A>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let query = use_query_map();
    let email = move || query.with(|q| q.get("email")).unwrap_or_default();

    view! {
        <div class="login-container">
            <div class="login-box card">
                <h1>"Check Your Inbox"</h1>
                <p>
                    "We sent a verification code to "
                    <strong>{email}</strong>
                    ". Enter it to reset your password."
                </p>
                <p class="login-box__links">
                    <A href="/forgot-password">"Use a different email"</A>
                </p>
            </div>
        </div>
    }
}
