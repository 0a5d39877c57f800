//! 区间管理页面
//!
//! Shows the stations of one selected line in travel order. Adding or
//! removing a section re-fetches that line, so the list follows the server.

use leptos::ev::Event;
use leptos::prelude::*;
use subway_shared::LineId;

use super::common::{CardTemplate, Snackbar};
use super::layout::AppShell;
use super::modal::ModalState;
use super::section_add_modal::SectionAddModal;
use crate::store::use_store;

#[component]
pub fn SectionsPage() -> impl IntoView {
    let store = use_store();
    let selected = RwSignal::new(Option::<LineId>::None);
    let add_modal = RwSignal::new(ModalState::Closed);

    store.load_lines();

    let selected_line = move || {
        let id = selected.get()?;
        store.line.with(|s| s.find(id).cloned())
    };
    let swatch = move || {
        selected_line()
            .map(|line| format!("background-color: {}", line.color.hex()))
            .unwrap_or_default()
    };

    let on_line_change = move |ev: Event| {
        selected.set(event_target_value(&ev).parse::<LineId>().ok());
    };

    view! {
        <AppShell>
            <CardTemplate color="#f59e0b" title="Sections">
                <div class="flex items-center gap-2">
                    <span class="inline-block h-4 w-4 rounded-full" style=swatch></span>
                    <select class="select select-bordered flex-1" aria-label="Line" on:change=on_line_change>
                        <option value="" selected=move || selected.get().is_none()>"Select a line"</option>
                        {move || {
                            store
                                .line
                                .with(|s| s.lines.clone())
                                .into_iter()
                                .map(|line| {
                                    let id = line.id;
                                    view! {
                                        <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                            {line.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                    <button
                        class="btn btn-primary btn-sm"
                        disabled=move || selected.get().is_none()
                        on:click=move |_| add_modal.update(ModalState::open)
                    >
                        "Add section"
                    </button>
                </div>

                <ul class="divide-y divide-base-300">
                    {move || {
                        let Some(line) = selected_line() else {
                            return view! {
                                <li class="py-6 text-center text-base-content/50">"Pick a line to see its stations."</li>
                            }
                            .into_any();
                        };
                        let line_id = line.id;
                        line.stations
                            .into_iter()
                            .map(|station| {
                                let station_id = station.id;
                                view! {
                                    <li class="flex items-center justify-between py-3">
                                        <span>{station.name}</span>
                                        <button
                                            class="btn btn-ghost btn-sm text-error"
                                            on:click=move |_| store.delete_section(line_id, station_id)
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
            </CardTemplate>

            {move || {
                add_modal
                    .get()
                    .is_open()
                    .then(|| selected.get())
                    .flatten()
                    .map(|line_id| view! { <SectionAddModal line_id=line_id state=add_modal /> })
            }}
            <Snackbar message=Signal::derive(move || store.line.with(|s| s.request.error_message.clone())) />
        </AppShell>
    }
}
