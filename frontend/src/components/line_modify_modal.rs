use leptos::logging::error;
use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use subway_shared::{Line, Palette};

use super::common::{ColorRadioGroup, NotificationInput};
use super::form_state::{LineModifyDraft, ModifyLineError};
use super::modal::{Modal, ModalState, submit_modal};
use crate::store::use_store;
use crate::web;

/// Edits the name and color of `line`. The line's own color stays
/// selectable.
#[component]
pub fn LineModifyModal(line: Line, state: RwSignal<ModalState>) -> impl IntoView {
    let store = use_store();
    let id = line.id;
    let own_color = line.color;
    let draft = RwSignal::new(LineModifyDraft::new(&line.name, line.color));

    let used = Signal::derive(move || {
        store.line.with(|s| {
            s.used_colors()
                .into_iter()
                .filter(|color| *color != own_color)
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let used = used.get_untracked();
        let request = draft.with_untracked(|d| d.to_request(id, &used));
        match submit_modal(state, request, |req| store.modify_line(req)) {
            Ok(()) => {}
            Err(ModifyLineError::Color(err)) => error!("[LineModifyModal] {}", err),
            Err(ModifyLineError::Invalid(message)) => web::alert(message.text()),
        }
    };

    view! {
        <Modal title="Modify line" on_close=move |_| state.update(ModalState::cancel)>
            <form class="space-y-2 pt-4" on:submit=on_submit>
                <NotificationInput
                    label="Line name"
                    value=Signal::derive(move || draft.with(|d| d.name.clone()))
                    on_input=move |value: String| draft.update(|d| d.name = value)
                    message=Signal::derive(move || draft.with(LineModifyDraft::name_error))
                />
                <ColorRadioGroup
                    group_name="line-modify-color"
                    selected=Signal::derive(move || draft.with(|d| Palette::try_from(d.color.as_str()).ok()))
                    used=used
                    on_select=move |raw: String| draft.update(|d| d.color = raw)
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
