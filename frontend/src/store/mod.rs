//! 全局状态
//!
//! One [`Store`] is created at the root of the app and shared through
//! context. Each slice sits in its own signal and changes only through the
//! intents below. Async intents are spawned and never awaited by the
//! caller, so a modal can close before its request resolves; the outcome
//! still lands in the slice.
//!
//! Overlapping requests of the same kind are not sequenced. Whichever
//! resolves last writes last.

pub mod api_owner;
pub mod line;
pub mod login;
pub mod slice;
pub mod station;

use leptos::prelude::*;
use leptos::task::spawn_local;
use subway_shared::protocol::{AddSectionRequest, CreateLineRequest, ModifyLineRequest};
use subway_shared::{LineId, StationId};

use crate::api::{ApiClient, FetchHttpClient};
use crate::config::ApiOwner;
use crate::session::{SessionStore, browser_session};
use crate::web::BrowserStorage;
use api_owner::ApiOwnerState;
use line::{LineAction, LineState};
use login::LoginState;
use slice::Reducer;
use station::{StationAction, StationState};

/// Applies actions to a slice signal. A disposed signal drops the action.
fn dispatcher<S>(signal: RwSignal<S>) -> impl Fn(S::Action)
where
    S: Reducer + Send + Sync + 'static,
{
    move |action| {
        signal.try_update(|state| state.reduce(action));
    }
}

#[derive(Clone, Copy)]
pub struct Store {
    pub api_owner: RwSignal<ApiOwnerState>,
    pub station: RwSignal<StationState>,
    pub line: RwSignal<LineState>,
    pub login: RwSignal<LoginState>,
    session: SessionStore<BrowserStorage>,
    preferences: BrowserStorage,
}

impl Store {
    pub fn new() -> Self {
        let session = browser_session();
        let preferences = BrowserStorage::Local;
        Self {
            api_owner: RwSignal::new(ApiOwnerState::from_storage(&preferences)),
            station: RwSignal::new(StationState::default()),
            line: RwSignal::new(LineState::default()),
            login: RwSignal::new(LoginState::from_session(&session)),
            session,
            preferences,
        }
    }

    pub fn is_login_signal(&self) -> Signal<bool> {
        let login = self.login;
        Signal::derive(move || login.with(|state| state.is_login))
    }

    fn api(&self) -> ApiClient<FetchHttpClient> {
        let owner = self.api_owner.with_untracked(|state| state.owner);
        ApiClient::new(owner.endpoint(), FetchHttpClient)
            .with_access_token(self.session.access_token())
    }

    // --- api owner ---

    pub fn select_owner(&self, owner: ApiOwner) {
        api_owner::select_owner(&self.preferences, owner, &dispatcher(self.api_owner));
    }

    // --- login ---

    pub fn login(&self, email: String, password: String) {
        let api = self.api();
        let session = self.session;
        let signal = self.login;
        spawn_local(async move {
            login::login(&api, &session, &email, &password, &dispatcher(signal)).await;
        });
    }

    pub fn logout(&self) {
        login::logout(&self.session, &dispatcher(self.login));
        self.clear_stations();
        self.clear_lines();
    }

    // --- stations ---

    pub fn load_stations(&self) {
        let api = self.api();
        let signal = self.station;
        spawn_local(async move {
            station::load_stations(&api, &dispatcher(signal)).await;
        });
    }

    pub fn add_station(&self, name: String) {
        let api = self.api();
        let signal = self.station;
        spawn_local(async move {
            station::add_station(&api, &name, &dispatcher(signal)).await;
        });
    }

    pub fn delete_station(&self, id: StationId) {
        let api = self.api();
        let signal = self.station;
        spawn_local(async move {
            station::delete_station(&api, id, &dispatcher(signal)).await;
        });
    }

    pub fn clear_stations(&self) {
        dispatcher(self.station)(StationAction::Clear);
    }

    // --- lines ---

    pub fn load_lines(&self) {
        let api = self.api();
        let signal = self.line;
        spawn_local(async move {
            line::load_lines(&api, &dispatcher(signal)).await;
        });
    }

    pub fn add_line(&self, req: CreateLineRequest) {
        let api = self.api();
        let signal = self.line;
        spawn_local(async move {
            line::add_line(&api, req, &dispatcher(signal)).await;
        });
    }

    pub fn modify_line(&self, req: ModifyLineRequest) {
        let api = self.api();
        let signal = self.line;
        spawn_local(async move {
            line::modify_line(&api, req, &dispatcher(signal)).await;
        });
    }

    pub fn delete_line(&self, id: LineId) {
        let api = self.api();
        let signal = self.line;
        spawn_local(async move {
            line::delete_line(&api, id, &dispatcher(signal)).await;
        });
    }

    pub fn add_section(&self, req: AddSectionRequest) {
        let api = self.api();
        let signal = self.line;
        spawn_local(async move {
            line::add_section(&api, req, &dispatcher(signal)).await;
        });
    }

    pub fn delete_section(&self, line_id: LineId, station_id: StationId) {
        let api = self.api();
        let signal = self.line;
        spawn_local(async move {
            line::delete_section(&api, line_id, station_id, &dispatcher(signal)).await;
        });
    }

    pub fn clear_lines(&self) {
        dispatcher(self.line)(LineAction::Clear);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取全局状态
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store should be provided")
}

// =========================================================
// 测试辅助
// =========================================================

#[cfg(test)]
pub(crate) use recorder::Recorder;

#[cfg(test)]
mod recorder {
    use super::Reducer;
    use std::cell::RefCell;

    /// Plays the role of the store in tests: applies every action and keeps
    /// a snapshot of the state after each one.
    pub(crate) struct Recorder<S> {
        state: RefCell<S>,
        snapshots: RefCell<Vec<S>>,
    }

    impl<S: Reducer + Clone> Recorder<S> {
        pub(crate) fn new(state: S) -> Self {
            Self {
                state: RefCell::new(state),
                snapshots: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn dispatcher(&self) -> impl Fn(S::Action) + '_ {
            move |action| {
                self.state.borrow_mut().reduce(action);
                let snapshot = self.state.borrow().clone();
                self.snapshots.borrow_mut().push(snapshot);
            }
        }

        pub(crate) fn state(&self) -> S {
            self.state.borrow().clone()
        }

        pub(crate) fn snapshots(&self) -> Vec<S> {
            self.snapshots.borrow().clone()
        }
    }
}
