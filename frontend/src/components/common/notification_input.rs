use leptos::prelude::*;
use subway_shared::validate::ErrorMessage;

/// Controlled input with an inline validation message underneath.
#[component]
pub fn NotificationInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] message: Signal<Option<ErrorMessage>>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                placeholder=placeholder
                class="input input-bordered w-full"
                class:input-error=move || message.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <label class="label">
                <span class="label-text-alt text-error">
                    {move || message.get().map(|m| m.text()).unwrap_or_default()}
                </span>
            </label>
        </div>
    }
}
