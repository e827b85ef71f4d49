use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: MaybeProp<String>) -> impl IntoView {
    view! {
        <span class="spinner" role="status">
            <span class="spinner__circle"></span>
            {move || label.get().map(|l| view! { <span class="spinner__label">{l}</span> })}
        </span>
    }
}
