//! 线路管理页面

use leptos::prelude::*;
use subway_shared::Line;

use super::common::{CardTemplate, Snackbar};
use super::layout::AppShell;
use super::line_add_modal::LineAddModal;
use super::line_modify_modal::LineModifyModal;
use super::modal::ModalState;
use crate::store::use_store;

#[component]
pub fn LinesPage() -> impl IntoView {
    let store = use_store();
    let add_modal = RwSignal::new(ModalState::Closed);
    let modify_modal = RwSignal::new(ModalState::Closed);
    let modify_target = RwSignal::new(Option::<Line>::None);

    store.load_lines();

    let is_empty = move || store.line.with(|s| s.lines.is_empty());
    let is_loading = move || store.line.with(|s| s.request.is_loading);

    let open_modify = move |line: Line| {
        modify_target.set(Some(line));
        modify_modal.update(ModalState::open);
    };

    view! {
        <AppShell>
            <CardTemplate color="#14b8a6" title="Lines">
                <div class="flex justify-end">
                    <button class="btn btn-primary btn-sm" on:click=move |_| add_modal.update(ModalState::open)>
                        "Add line"
                    </button>
                </div>
                <ul class="divide-y divide-base-300">
                    <Show when=move || is_empty() && !is_loading()>
                        <li class="py-6 text-center text-base-content/50">"No lines yet."</li>
                    </Show>
                    <For
                        each=move || store.line.with(|s| s.lines.clone())
                        key=|line| (line.id, line.name.clone(), line.color)
                        children=move |line| {
                            let id = line.id;
                            let target = line.clone();
                            view! {
                                <li class="flex items-center gap-3 py-3">
                                    <span
                                        class="inline-block h-4 w-4 rounded-full"
                                        style=format!("background-color: {}", line.color.hex())
                                    ></span>
                                    <span class="flex-1">{line.name}</span>
                                    <button class="btn btn-ghost btn-sm" on:click=move |_| open_modify(target.clone())>
                                        "Edit"
                                    </button>
                                    <button class="btn btn-ghost btn-sm text-error" on:click=move |_| store.delete_line(id)>
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </CardTemplate>

            <Show when=move || add_modal.get().is_open()>
                <LineAddModal state=add_modal />
            </Show>
            {move || {
                modify_modal
                    .get()
                    .is_open()
                    .then(|| modify_target.get())
                    .flatten()
                    .map(|line| view! { <LineModifyModal line=line state=modify_modal /> })
            }}
            <Snackbar message=Signal::derive(move || store.line.with(|s| s.request.error_message.clone())) />
        </AppShell>
    }
}
