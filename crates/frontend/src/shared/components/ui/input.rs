use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "password", "email", "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Required attribute; also appends " *" to the label
    #[prop(optional)]
    required: bool,
    /// ID and name of the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let input_autocomplete = move || autocomplete.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {if required { format!("{} *", l) } else { l }}
                </label>
            })}
            <input
                id=input_id
                name=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get()
                required=required
                autocomplete=input_autocomplete
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
