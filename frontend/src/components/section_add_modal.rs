use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use subway_shared::LineId;

use super::common::{NotificationInput, SectionSelectBox};
use super::form_state::SectionDraft;
use super::modal::{Modal, ModalState, submit_modal};
use crate::store::use_store;
use crate::web;

#[component]
pub fn SectionAddModal(line_id: LineId, state: RwSignal<ModalState>) -> impl IntoView {
    let store = use_store();
    let draft = RwSignal::new(SectionDraft::default());

    if store.station.with_untracked(|s| s.stations.is_empty()) {
        store.load_stations();
    }

    let line_name = move || {
        store
            .line
            .with(|s| s.find(line_id).map(|line| line.name.clone()))
            .unwrap_or_default()
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = draft.with_untracked(|d| d.to_request(line_id));
        if let Err(message) = submit_modal(state, request, |req| store.add_section(req)) {
            web::alert(message.text());
        }
    };

    view! {
        <Modal title="Add section" on_close=move |_| state.update(ModalState::cancel)>
            <p class="py-2 text-base-content/70">{line_name}</p>
            <form class="space-y-2" on:submit=on_submit>
                <SectionSelectBox
                    stations=Signal::derive(move || store.station.with(|s| s.stations.clone()))
                    up_station_id=Signal::derive(move || draft.with(|d| d.up_station_id.clone()))
                    down_station_id=Signal::derive(move || draft.with(|d| d.down_station_id.clone()))
                    on_change_up=move |id: String| draft.update(|d| d.up_station_id = id)
                    on_change_down=move |id: String| draft.update(|d| d.down_station_id = id)
                    error=Signal::derive(move || draft.with(SectionDraft::section_error))
                />
                <NotificationInput
                    label="Distance"
                    input_type="number"
                    value=Signal::derive(move || draft.with(|d| d.distance.clone()))
                    on_input=move |value: String| draft.update(|d| d.distance = value)
                    message=Signal::derive(move || draft.with(SectionDraft::distance_error))
                />
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| state.update(ModalState::cancel)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Confirm"</button>
                </div>
            </form>
        </Modal>
    }
}
