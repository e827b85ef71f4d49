use leptos::prelude::*;

/// Labelled textarea bound to a string signal
#[component]
pub fn Textarea(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let textarea_id = move || id.get().unwrap_or_default();
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(4);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=textarea_id>
                    {if required { format!("{} *", l) } else { l }}
                </label>
            })}
            <textarea
                id=textarea_id
                name=textarea_id
                class="form__textarea"
                placeholder=textarea_placeholder
                disabled=move || disabled.get()
                required=required
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            ></textarea>
        </div>
    }
}
