use leptos::prelude::*;
use subway_shared::Palette;

use crate::components::form_state::is_color_available;

/// One radio per palette color. Colors in `used` are disabled.
///
/// `on_select` receives the raw `value` of the clicked input; callers parse
/// it back into a [`Palette`].
#[component]
pub fn ColorRadioGroup(
    group_name: &'static str,
    #[prop(into)] selected: Signal<Option<Palette>>,
    #[prop(into)] used: Signal<Vec<Palette>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let radios = Palette::ALL
        .into_iter()
        .map(|color| {
            let disabled = move || used.with(|used| !is_color_available(color, used));
            view! {
                <label class="cursor-pointer" title=color.as_str()>
                    <input
                        type="radio"
                        class="radio"
                        name=group_name
                        value=color.as_str()
                        style=format!("background-color: {}", color.hex())
                        prop:checked=move || selected.get() == Some(color)
                        disabled=disabled
                        on:change=move |ev| on_select.run(event_target_value(&ev))
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="form-control">
            <span class="label-text">"Color"</span>
            <div class="grid grid-cols-8 gap-2 py-2">{radios}</div>
        </div>
    }
}
