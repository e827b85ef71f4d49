use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::banner::{schedule_expiry, BannerView};
use crate::shared::components::ui::{Input, SubmitButton};
use crate::shared::form::{bind_text, create_form, is_blank, FormDraft, SubmitBlocked};

pub const DEFAULT_ROLE: &str = "Mandate";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormDraft for RegisterDraft {
    type Body = ();

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.full_name),
            ("Email Address", &self.email),
            ("Password", &self.password),
            ("Confirm Password", &self.confirm_password),
        ]
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(label, _)| label)
        .collect()
    }

    fn extra_validation(&self) -> Result<(), String> {
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(())
    }

    fn to_body(&self) {}
}

#[component]
pub fn RegisterPage(#[prop(optional, into)] role: MaybeProp<String>) -> impl IntoView {
    let navigate = use_navigate();
    let form = create_form::<RegisterDraft>();
    let role = move || role.get().unwrap_or_else(|| DEFAULT_ROLE.to_string());
    let (show_password, set_show_password) = signal(false);
    let (show_confirm, set_show_confirm) = signal(false);

    let (full_name, set_full_name) = bind_text(form, |d| &d.full_name, |d| &mut d.full_name);
    let (email, set_email) = bind_text(form, |d| &d.email, |d| &mut d.email);
    let (password, set_password) = bind_text(form, |d| &d.password, |d| &mut d.password);
    let (confirm, set_confirm) =
        bind_text(form, |d| &d.confirm_password, |d| &mut d.confirm_password);

    let busy = Signal::derive(move || form.with(|f| f.submitting));
    let banner = Signal::derive(move || form.with(|f| f.banner.current().cloned()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let attempt = form.try_update(|f| f.begin_submit());
        match attempt {
            Some(Ok(())) => {
                log::info!("Registration submitted as {}", role());
                form.update(|f| {
                    f.finish_ok("Account created");
                });
                navigate("/", Default::default());
            }
            Some(Err(SubmitBlocked::Invalid(message))) => {
                if let Some(ticket) = form.try_update(|f| f.reject(message)) {
                    schedule_expiry(ticket, move |ticket| {
                        form.try_update(|f| f.banner.expire(ticket));
                    });
                }
            }
            Some(Err(SubmitBlocked::InFlight)) | None => {}
        }
    };

    let password_type = move |shown: ReadSignal<bool>| {
        Signal::derive(move || if shown.get() { "text".to_string() } else { "password".to_string() })
    };

    view! {
        <div class="login-container">
            <div class="login-box card">
                <h1>"Create Account"</h1>
                <p>"Registering as a " <strong>{role}</strong></p>

                <form class="form" on:submit=on_submit>
                    <BannerView banner=banner />
                    <Input id="fullName" label="Full Name" required=true value=full_name on_input=set_full_name />
                    <Input id="email" label="Email Address" input_type="email" required=true value=email on_input=set_email />
                    <div class="form__password">
                        <Input
                            id="password"
                            label="Password"
                            input_type=password_type(show_password)
                            required=true
                            autocomplete="new-password"
                            value=password
                            on_input=set_password
                        />
                        <button
                            type="button"
                            class="button button--ghost"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <div class="form__password">
                        <Input
                            id="confirmPassword"
                            label="Confirm Password"
                            input_type=password_type(show_confirm)
                            required=true
                            autocomplete="new-password"
                            value=confirm
                            on_input=set_confirm
                        />
                        <button
                            type="button"
                            class="button button--ghost"
                            on:click=move |_| set_show_confirm.update(|v| *v = !*v)
                        >
                            {move || if show_confirm.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <SubmitButton busy=busy>"Create Account"</SubmitButton>
                </form>

                <p class="login-box__links">
                    "Already have an account? " <A href="/login">"Sign In"</A>
                </p>
            </div>
        </div>
    }
}
