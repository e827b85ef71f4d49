use contracts::domain::contact::{ContactRequest, CONSULTATION_TYPES};
use leptos::prelude::*;

use crate::domain::contact::api;
use crate::shared::banner::BannerView;
use crate::shared::components::ui::{Input, Select, SubmitButton, Textarea};
use crate::shared::form::{bind_text, create_form, submit_form};
use crate::system::auth::session::use_session;

const SENT_FALLBACK: &str = "Your message has been sent.";

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <header class="page__header">
                <h1>"Get in Touch"</h1>
                <p>"Questions about a joint venture, a plot, or a mandate? Send us a message."</p>
            </header>
            <ContactForm />
        </section>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let session = use_session();
    let form = create_form::<ContactRequest>();

    let (full_name, set_full_name) = bind_text(form, |d| &d.full_name, |d| &mut d.full_name);
    let (email, set_email) = bind_text(form, |d| &d.email_address, |d| &mut d.email_address);
    let (phone, set_phone) = bind_text(form, |d| &d.phone_number, |d| &mut d.phone_number);
    let (consultation, set_consultation) =
        bind_text(form, |d| &d.consultation_type, |d| &mut d.consultation_type);
    let (subject, set_subject) = bind_text(form, |d| &d.subject, |d| &mut d.subject);
    let (message, set_message) = bind_text(form, |d| &d.message, |d| &mut d.message);

    let busy = Signal::derive(move || form.with(|f| f.submitting));
    let banner = Signal::derive(move || form.with(|f| f.banner.current().cloned()));

    let consultation_options = {
        let mut options = vec![(String::new(), "Select an option".to_string())];
        options.extend(
            CONSULTATION_TYPES
                .iter()
                .map(|t| (t.to_string(), t.to_string())),
        );
        options
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = session.token();
        submit_form(
            form,
            move |body| api::create_contact(body, token),
            |resp| resp.message.unwrap_or_else(|| SENT_FALLBACK.to_string()),
        );
    };

    view! {
        <form class="card form form--contact" on:submit=on_submit>
            <h2 class="form__title">"Send us a Message"</h2>
            <BannerView banner=banner />

            <Input id="fullName" label="Full Name" required=true value=full_name on_input=set_full_name />
            <Input
                id="emailAddress"
                label="Email Address"
                input_type="email"
                required=true
                value=email
                on_input=set_email
            />
            <div class="form__row">
                <Input id="phoneNumber" label="Phone Number" input_type="tel" value=phone on_input=set_phone />
                <Select
                    id="consultationType"
                    label="Consultation Type"
                    value=consultation
                    on_change=set_consultation
                    options=consultation_options
                />
            </div>
            <Input
                id="subject"
                label="Subject"
                required=true
                placeholder="e.g. Joint Venture Consultation Request"
                value=subject
                on_input=set_subject
            />
            <Textarea
                id="message"
                label="Message"
                required=true
                placeholder="Tell us about your project, requirements, or questions..."
                value=message
                on_input=set_message
            />

            <SubmitButton busy=busy class="form__submit">
                "Send Message"
            </SubmitButton>
        </form>
    }
}
