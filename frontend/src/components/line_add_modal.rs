//! 添加线路模态框
//!
//! The draft lives only as long as the modal is mounted, so every open
//! starts from an empty form.

use leptos::logging::error;
use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use subway_shared::Palette;

use super::common::{ColorRadioGroup, NotificationInput, SectionSelectBox};
use super::form_state::LineDraft;
use super::modal::{Modal, ModalState, submit_modal};
use crate::store::use_store;
use crate::web;

#[component]
pub fn LineAddModal(state: RwSignal<ModalState>) -> impl IntoView {
    let store = use_store();
    let draft = RwSignal::new(LineDraft::default());

    if store.station.with_untracked(|s| s.stations.is_empty()) {
        store.load_stations();
    }

    let stations = Signal::derive(move || store.station.with(|s| s.stations.clone()));
    let used = Signal::derive(move || store.line.with(|s| s.used_colors()));

    let on_select_color = move |raw: String| match Palette::try_from(raw.as_str()) {
        Ok(color) => {
            let used = used.get_untracked();
            draft.update(|d| {
                d.select_color(color, &used);
            });
        }
        Err(err) => error!("[LineAddModal] {}", err),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let used = used.get_untracked();
        let request = draft.with_untracked(|d| d.to_request(&used));
        if let Err(message) = submit_modal(state, request, |req| store.add_line(req)) {
            web::alert(message.text());
        }
    };

    view! {
        <Modal title="Add line" on_close=move |_| state.update(ModalState::cancel)>
            <form class="space-y-2 pt-4" on:submit=on_submit>
                <NotificationInput
                    label="Line name"
                    placeholder="신분당선"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=move |value: String| draft.update(|d| d.name = value)
                    message=Signal::derive(move || draft.with(LineDraft::name_error))
                />
                <SectionSelectBox
                    stations=stations
                    up_station_id=Signal::derive(move || draft.with(|d| d.section.up_station_id.clone()))
                    down_station_id=Signal::derive(move || draft.with(|d| d.section.down_station_id.clone()))
                    on_change_up=move |id: String| draft.update(|d| d.section.up_station_id = id)
                    on_change_down=move |id: String| draft.update(|d| d.section.down_station_id = id)
                    error=Signal::derive(move || draft.with(|d| d.section.section_error()))
                />
                <NotificationInput
                    label="Distance"
                    input_type="number"
                    value=Signal::derive(move || draft.with(|d| d.section.distance.clone()))
                    on_input=move |value: String| draft.update(|d| d.section.distance = value)
                    message=Signal::derive(move || draft.with(|d| d.section.distance_error()))
                />
                <ColorRadioGroup
                    group_name="line-add-color"
                    selected=Signal::derive(move || draft.with(|d| d.color))
                    used=used
                    on_select=on_select_color
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
