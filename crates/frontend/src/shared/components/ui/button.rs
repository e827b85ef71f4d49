use leptos::prelude::*;

use super::spinner::Spinner;

/// Form submit button; disabled and showing a spinner while `busy`
#[component]
pub fn SubmitButton(
    /// Submission in flight
    #[prop(into)]
    busy: Signal<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="submit"
            class=move || format!(
                "button button--primary {} {}",
                if busy.get() { "button--busy" } else { "" },
                additional_class()
            )
            disabled=move || busy.get()
            aria-busy=move || busy.get().to_string()
        >
            {move || if busy.get() {
                view! { <Spinner /> }.into_any()
            } else {
                children().into_any()
            }}
        </button>
    }
}
