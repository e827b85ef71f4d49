use contracts::domain::request::RequestType;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen::JsCast;

use crate::domain::request::api;
use crate::domain::request::model::RequestDraft;
use crate::shared::banner::BannerView;
use crate::shared::components::ui::{Input, Select, SubmitButton, Textarea};
use crate::shared::date_utils::format_size;
use crate::shared::form::{bind_text, create_form, submit_form};
use crate::shared::icons::icon;
use crate::system::auth::session::use_session;

#[component]
pub fn SubmitRequestPage() -> impl IntoView {
    let session = use_session();
    let form = create_form::<RequestDraft>();

    let (full_name, set_full_name) = bind_text(form, |d| &d.full_name, |d| &mut d.full_name);
    let (email, set_email) = bind_text(form, |d| &d.email, |d| &mut d.email);
    let (phone, set_phone) = bind_text(form, |d| &d.phone_number, |d| &mut d.phone_number);
    let (location, set_location) = bind_text(form, |d| &d.location, |d| &mut d.location);
    let (budget, set_budget) = bind_text(form, |d| &d.budget, |d| &mut d.budget);
    let (timeline, set_timeline) = bind_text(form, |d| &d.timeline, |d| &mut d.timeline);
    let (description, set_description) =
        bind_text(form, |d| &d.description, |d| &mut d.description);

    let request_type = Signal::derive(move || form.with(|f| f.draft.request_type.as_str().to_string()));
    let set_request_type = Callback::new(move |v: String| {
        if let Some(t) = RequestType::parse(&v) {
            form.update(|f| f.draft.request_type = t);
        }
    });
    let type_options: Vec<(String, String)> = RequestType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();

    let busy = Signal::derive(move || form.with(|f| f.submitting));
    let banner = Signal::derive(move || form.with(|f| f.banner.current().cloned()));
    let succeeded = move || form.with(|f| f.succeeded);

    let on_files = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(list) = input.files() {
            let picked: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
            log::debug!("Attached {} file(s)", picked.len());
            form.update(|f| f.draft.add_files(picked));
        }
        // allow picking the same file again
        input.set_value("");
    };

    let attachments = move || {
        form.with(|f| {
            f.draft
                .files
                .iter()
                .map(|file| (file.name(), file.size()))
                .collect::<Vec<_>>()
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = session.token();
        submit_form(
            form,
            move |body| api::create_request(body, token),
            |resp| {
                resp.message
                    .unwrap_or_else(|| "Request submitted successfully".to_string())
            },
        );
    };

    view! {
        <Show
            when=move || !succeeded()
            fallback=|| view! {
                <section class="page page--submitted card">
                    <div class="page__icon">{icon("approved")}</div>
                    <h1>"Request Submitted Successfully!"</h1>
                    <p>
                        "Thank you for submitting your request. Our team will review your information and get back to you within 24-48 hours."
                    </p>
                    <A href="/" attr:class="button button--primary">
                        "Return to Home" {icon("arrow-right")}
                    </A>
                </section>
            }
        >
            <section class="page page--submit-request">
                <header class="page__header">
                    <h1>"Submit a Request"</h1>
                    <p>"Tell us what you have or what you are looking for and we will match you with the right partner."</p>
                </header>

                <form class="card form" on:submit=on_submit>
                    <BannerView banner=banner />

                    <div class="form__row">
                        <Input id="fullName" label="Full Name" required=true value=full_name on_input=set_full_name />
                        <Input id="email" label="Email" input_type="email" required=true value=email on_input=set_email />
                    </div>
                    <div class="form__row">
                        <Input id="phoneNumber" label="Phone Number" input_type="tel" value=phone on_input=set_phone />
                        <Input id="location" label="Location" value=location on_input=set_location />
                    </div>
                    <div class="form__row">
                        <Input id="budget" label="Budget" value=budget on_input=set_budget />
                        <Input id="timeline" label="Timeline" value=timeline on_input=set_timeline />
                    </div>
                    <Select
                        id="requestType"
                        label="Request Type"
                        value=request_type
                        on_change=set_request_type
                        options=type_options.clone()
                    />
                    <Textarea
                        id="description"
                        label="Description"
                        required=true
                        rows=5
                        value=description
                        on_input=set_description
                    />

                    <div class="form__group">
                        <label class="form__label upload" for="document">
                            {icon("upload")}
                            <span>"Upload supporting documents"</span>
                            <small>"PDF, DOC, JPG, PNG up to 10MB"</small>
                        </label>
                        <input id="document" name="document" type="file" multiple class="upload__input" on:change=on_files />
                        <ul class="upload__list">
                            {move || attachments().into_iter().enumerate().map(|(index, (name, size))| view! {
                                <li class="upload__item">
                                    <span class="upload__name">{name}</span>
                                    <span class="upload__size">{format_size(size)}</span>
                                    <button
                                        type="button"
                                        class="button button--ghost"
                                        aria-label="Remove file"
                                        on:click=move |_| {
                                            form.update(|f| {
                                                f.draft.remove_file(index);
                                            });
                                        }
                                    >
                                        {icon("remove")}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <SubmitButton busy=busy class="form__submit">
                        "Submit Request"
                    </SubmitButton>
                </form>
            </section>
        </Show>
    }
}
