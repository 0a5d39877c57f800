//! 车站管理页面

use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;

use super::common::{CardTemplate, NotificationInput, Snackbar};
use super::form_state::StationDraft;
use super::layout::AppShell;
use crate::store::use_store;
use crate::web;

#[component]
pub fn StationsPage() -> impl IntoView {
    let store = use_store();
    let draft = RwSignal::new(StationDraft::default());

    store.load_stations();

    let is_loading = move || store.station.with(|s| s.request.is_loading);
    let is_empty = move || store.station.with(|s| s.stations.is_empty());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(StationDraft::to_name) {
            Ok(name) => {
                store.add_station(name);
                draft.set(StationDraft::default());
            }
            Err(message) => web::alert(message.text()),
        }
    };

    view! {
        <AppShell>
            <CardTemplate color="#6366f1" title="Stations">
                <form class="flex items-start gap-2" on:submit=on_submit>
                    <div class="flex-1">
                        <NotificationInput
                            label="Station name"
                            placeholder="강남"
                            value=Signal::derive(move || draft.with(|d| d.name.clone()))
                            on_input=move |value: String| draft.update(|d| d.name = value)
                            message=Signal::derive(move || draft.with(StationDraft::name_error))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary mt-9">"Add"</button>
                </form>

                <ul class="divide-y divide-base-300">
                    <Show when=move || is_empty() && !is_loading()>
                        <li class="py-6 text-center text-base-content/50">"No stations yet."</li>
                    </Show>
                    <For
                        each=move || store.station.with(|s| s.stations.clone())
                        key=|station| station.id
                        children=move |station| {
                            let id = station.id;
                            view! {
                                <li class="flex items-center justify-between py-3">
                                    <span>{station.name}</span>
                                    <button class="btn btn-ghost btn-sm text-error" on:click=move |_| store.delete_station(id)>
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <Show when=is_loading>
                    <span class="loading loading-spinner loading-md mx-auto"></span>
                </Show>
            </CardTemplate>
            <Snackbar message=Signal::derive(move || store.station.with(|s| s.request.error_message.clone())) />
        </AppShell>
    }
}
