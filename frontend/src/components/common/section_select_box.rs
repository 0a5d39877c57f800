use leptos::prelude::*;
use subway_shared::Station;
use subway_shared::validate::ErrorMessage;

#[component]
fn StationSelect(
    label: &'static str,
    #[prop(into)] stations: Signal<Vec<Station>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="select select-bordered w-full"
            aria-label=label
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>{label}</option>
            {move || {
                stations
                    .get()
                    .into_iter()
                    .map(|station| {
                        let id = station.id.to_string();
                        let option_id = id.clone();
                        view! {
                            <option value=id selected=move || value.get() == option_id>
                                {station.name}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// Up/down station pickers sharing one error line.
#[component]
pub fn SectionSelectBox(
    #[prop(into)] stations: Signal<Vec<Station>>,
    #[prop(into)] up_station_id: Signal<String>,
    #[prop(into)] down_station_id: Signal<String>,
    #[prop(into)] on_change_up: Callback<String>,
    #[prop(into)] on_change_down: Callback<String>,
    #[prop(into)] error: Signal<Option<ErrorMessage>>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <div class="grid grid-cols-2 gap-4">
                <StationSelect label="Up station" stations=stations value=up_station_id on_change=on_change_up />
                <StationSelect label="Down station" stations=stations value=down_station_id on_change=on_change_down />
            </div>
            <label class="label">
                <span class="label-text-alt text-error">
                    {move || error.get().map(|m| m.text()).unwrap_or_default()}
                </span>
            </label>
        </div>
    }
}
