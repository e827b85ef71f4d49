//! Shared submission flow for the site's forms.
//!
//! A form keeps its draft in a [`FormState`]; `begin_submit` is the only
//! way to obtain a request body, so a draft with an empty required field
//! or a form that is already submitting never reaches the network.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::banner::{schedule_expiry, Banner, BannerSlot};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Field values of one form
pub trait FormDraft: Default {
    type Body;

    /// Labels of required fields that are still blank.
    fn missing_required(&self) -> Vec<&'static str>;

    /// Banner text when required fields are blank.
    fn required_message(&self, missing: &[&'static str]) -> String {
        format!("Please fill in: {}", missing.join(", "))
    }

    /// Checks beyond "required" (e.g. matching passwords).
    fn extra_validation(&self) -> Result<(), String> {
        Ok(())
    }

    fn to_body(&self) -> Self::Body;
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(String),
}

#[derive(Debug, Clone, Default)]
pub struct FormState<D> {
    pub draft: D,
    pub submitting: bool,
    /// Set by a successful submission, cleared by the next attempt.
    pub succeeded: bool,
    pub banner: BannerSlot,
}

impl<D: FormDraft> FormState<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            submitting: false,
            succeeded: false,
            banner: BannerSlot::default(),
        }
    }

    pub fn begin_submit(&mut self) -> Result<D::Body, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let missing = self.draft.missing_required();
        if !missing.is_empty() {
            return Err(SubmitBlocked::Invalid(
                self.draft.required_message(&missing),
            ));
        }
        self.draft
            .extra_validation()
            .map_err(SubmitBlocked::Invalid)?;
        self.submitting = true;
        self.succeeded = false;
        self.banner.clear();
        Ok(self.draft.to_body())
    }

    /// Successful submission: fields reset, success banner shown.
    pub fn finish_ok(&mut self, message: impl Into<String>) -> u64 {
        self.submitting = false;
        self.succeeded = true;
        self.draft = D::default();
        self.banner.show(Banner::Success(message.into()))
    }

    /// Failed submission: fields kept, error banner shown.
    pub fn finish_err(&mut self, message: impl Into<String>) -> u64 {
        self.submitting = false;
        self.banner.show(Banner::Error(message.into()))
    }

    /// Validation failure reported without touching `submitting`.
    pub fn reject(&mut self, message: impl Into<String>) -> u64 {
        self.banner.show(Banner::Error(message.into()))
    }
}

/// Signal holding a form. Local storage because drafts may own browser
/// objects such as `web_sys::File`.
pub type FormSignal<D> = RwSignal<FormState<D>, LocalStorage>;

pub fn create_form<D: FormDraft + 'static>() -> FormSignal<D> {
    RwSignal::new_local(FormState::new())
}

fn expire_later<D: FormDraft + 'static>(form: FormSignal<D>, ticket: u64) {
    schedule_expiry(ticket, move |ticket| {
        form.try_update(|f| f.banner.expire(ticket));
    });
}

/// Run one submission of `form`.
///
/// `send` receives the request body and is only called when the draft
/// passed validation and no other submission is in flight. The banner
/// text comes from `success_text` or, on failure, from the backend
/// message with [`GENERIC_FAILURE`] as fallback.
pub fn submit_form<D, T, F, Fut, S>(form: FormSignal<D>, send: F, success_text: S)
where
    D: FormDraft + 'static,
    F: FnOnce(D::Body) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) -> String + 'static,
{
    let Some(attempt) = form.try_update(|f| f.begin_submit()) else {
        return;
    };
    let body = match attempt {
        Ok(body) => body,
        Err(SubmitBlocked::InFlight) => return,
        Err(SubmitBlocked::Invalid(message)) => {
            if let Some(ticket) = form.try_update(|f| f.reject(message)) {
                expire_later(form, ticket);
            }
            return;
        }
    };

    spawn_local(async move {
        let ticket = match send(body).await {
            Ok(value) => {
                let text = success_text(value);
                form.try_update(|f| f.finish_ok(text))
            }
            Err(e) => {
                log::warn!("Form submission failed: {}", e);
                form.try_update(|f| f.finish_err(e.user_message(GENERIC_FAILURE)))
            }
        };
        if let Some(ticket) = ticket {
            expire_later(form, ticket);
        }
    });
}

/// Two-way binding of one text field of a form draft.
pub fn bind_text<D: FormDraft + 'static>(
    form: FormSignal<D>,
    get: fn(&D) -> &String,
    set: fn(&mut D) -> &mut String,
) -> (Signal<String>, Callback<String>) {
    let value = Signal::derive(move || form.with(|f| get(&f.draft).clone()));
    let on_input = Callback::new(move |v: String| form.update(|f| *set(&mut f.draft) = v));
    (value, on_input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Draft {
        name: String,
        note: String,
    }

    impl FormDraft for Draft {
        type Body = String;

        fn missing_required(&self) -> Vec<&'static str> {
            if is_blank(&self.name) {
                vec!["Name"]
            } else {
                vec![]
            }
        }

        fn to_body(&self) -> String {
            format!("{}|{}", self.name, self.note)
        }
    }

    #[test]
    fn blank_required_field_blocks_body() {
        let mut form = FormState::<Draft>::new();
        form.draft.name = "   ".into();
        assert_eq!(
            form.begin_submit(),
            Err(SubmitBlocked::Invalid("Please fill in: Name".into()))
        );
        assert!(!form.submitting);
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut form = FormState::<Draft>::new();
        form.draft.name = "Ada".into();
        assert_eq!(form.begin_submit(), Ok("Ada|".into()));
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        form.finish_err("nope");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn success_resets_draft_and_shows_banner() {
        let mut form = FormState::<Draft>::new();
        form.draft = Draft {
            name: "Ada".into(),
            note: "hi".into(),
        };
        form.begin_submit().unwrap();
        let ticket = form.finish_ok("Message sent");
        assert_eq!(form.draft, Draft::default());
        assert!(form.succeeded);
        assert!(!form.submitting);
        assert_eq!(
            form.banner.current(),
            Some(&Banner::Success("Message sent".into()))
        );
        assert!(form.banner.expire(ticket));
    }

    #[test]
    fn failure_keeps_draft() {
        let mut form = FormState::<Draft>::new();
        form.draft.name = "Ada".into();
        form.begin_submit().unwrap();
        form.finish_err(GENERIC_FAILURE);
        assert_eq!(form.draft.name, "Ada");
        assert!(!form.succeeded);
        assert!(form.banner.current().unwrap().is_error());
    }

    #[test]
    fn submission_banner_clears_after_expiry() {
        use crate::shared::banner::expire_after;
        use futures::executor::block_on;

        let mut form = FormState::<Draft>::new();
        form.draft.name = "Ada".into();
        form.begin_submit().unwrap();
        let ticket = form.finish_ok("Message sent");
        let form = std::cell::RefCell::new(form);

        block_on(expire_after(async {}, ticket, |t| {
            form.borrow_mut().banner.expire(t);
        }));
        assert!(form.borrow().banner.current().is_none());
    }
}
