//! 通用模态框
//!
//! [`ModalState`] is the lifecycle of one modal instance: `Closed -> Open
//! -> Closed`, either by cancel or by a valid submit. A submit closes right
//! after the intent is dispatched, without waiting for the request.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open)
    }

    pub fn open(&mut self) {
        *self = ModalState::Open;
    }

    pub fn cancel(&mut self) {
        *self = ModalState::Closed;
    }

    /// Dispatches the validated draft and closes. An invalid draft leaves
    /// the modal open and returns the error for the caller to surface.
    pub fn submit<T, E>(&mut self, draft: Result<T, E>, dispatch: impl FnOnce(T)) -> Result<(), E> {
        let value = draft?;
        dispatch(value);
        *self = ModalState::Closed;
        Ok(())
    }
}

/// Runs [`ModalState::submit`] against a signal-held state.
pub fn submit_modal<T, E>(
    state: RwSignal<ModalState>,
    draft: Result<T, E>,
    dispatch: impl FnOnce(T),
) -> Result<(), E> {
    let mut current = state.get_untracked();
    let result = current.submit(draft, dispatch);
    state.set(current);
    result
}

/// Overlay shell with a title and a close button. Clicking the dimmed
/// backdrop also closes.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">{title}</h3>
                    <button
                        type="button"
                        class="btn btn-sm btn-circle btn-ghost"
                        aria-label="close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                {children()}
            </div>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn cancel_closes_without_dispatch() {
        let mut state = ModalState::default();
        state.open();
        assert!(state.is_open());
        state.cancel();
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn valid_submit_dispatches_once_and_closes() {
        let mut state = ModalState::Open;
        let calls = Cell::new(0);
        let result: Result<(), &str> = state.submit(Ok(5), |v| {
            assert_eq!(v, 5);
            calls.set(calls.get() + 1);
        });
        assert!(result.is_ok());
        assert_eq!(calls.get(), 1);
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn invalid_submit_stays_open() {
        let mut state = ModalState::Open;
        let result = state.submit(Err::<u8, _>("incomplete"), |_| panic!("must not dispatch"));
        assert_eq!(result, Err("incomplete"));
        assert_eq!(state, ModalState::Open);
    }
}
