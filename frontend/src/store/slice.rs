//! Slice building blocks shared by every domain slice.
//!
//! An async intent goes through [`Phase::Pending`] and then exactly one of
//! [`Phase::Fulfilled`] or [`Phase::Rejected`]. [`RequestState`] keeps the
//! `is_loading`/`error_message` pair in step with those phases.

use std::future::Future;

use leptos::logging::warn;
use subway_shared::ErrorMessageResponse;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Pending,
    Fulfilled(T),
    Rejected(ErrorMessageResponse),
}

/// Loading/error bookkeeping for one slice.
///
/// `is_loading` is only true between a request's dispatch and its
/// resolution. `error_message` is cleared whenever a new request starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    pub is_loading: bool,
    pub error_message: String,
}

impl RequestState {
    /// Applies the bookkeeping for `phase` and hands back the payload of a
    /// fulfilled request.
    pub fn settle<T>(&mut self, phase: Phase<T>) -> Option<T> {
        match phase {
            Phase::Pending => {
                self.is_loading = true;
                self.error_message.clear();
                None
            }
            Phase::Fulfilled(payload) => {
                self.is_loading = false;
                Some(payload)
            }
            Phase::Rejected(error) => {
                self.is_loading = false;
                self.error_message = error.error_message;
                None
            }
        }
    }
}

/// A slice state that changes only through its named actions.
pub trait Reducer {
    type Action;

    fn reduce(&mut self, action: Self::Action);
}

/// Runs one async intent: dispatches `Pending`, awaits `request`, then
/// dispatches the outcome.
///
/// `request` is lazy, so nothing goes over the wire before `Pending` has
/// been applied. Returns whether the request was fulfilled.
pub async fn run_thunk<T, A>(
    type_name: &str,
    dispatch: &impl Fn(A),
    wrap: impl Fn(Phase<T>) -> A,
    request: impl Future<Output = Result<T, ApiError>>,
) -> bool {
    dispatch(wrap(Phase::Pending));
    match request.await {
        Ok(payload) => {
            dispatch(wrap(Phase::Fulfilled(payload)));
            true
        }
        Err(e) => {
            warn!("[{}] rejected: {}", type_name, e);
            dispatch(wrap(Phase::Rejected(e.into())));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_clears_previous_error() {
        let mut state = RequestState {
            is_loading: false,
            error_message: "old".into(),
        };
        assert_eq!(state.settle::<()>(Phase::Pending), None);
        assert!(state.is_loading);
        assert_eq!(state.error_message, "");
    }

    #[test]
    fn fulfilled_returns_payload() {
        let mut state = RequestState::default();
        state.settle::<u8>(Phase::Pending);
        assert_eq!(state.settle(Phase::Fulfilled(7u8)), Some(7));
        assert!(!state.is_loading);
        assert_eq!(state.error_message, "");
    }

    #[test]
    fn rejected_records_message() {
        let mut state = RequestState::default();
        state.settle::<u8>(Phase::Pending);
        let out = state.settle::<u8>(Phase::Rejected(ErrorMessageResponse::new("boom")));
        assert_eq!(out, None);
        assert!(!state.is_loading);
        assert_eq!(state.error_message, "boom");
    }
}
