use leptos::logging::warn;
use subway_shared::API_OWNER_KEY;

use super::slice::Reducer;
use crate::config::ApiOwner;
use crate::web::KeyValueStorage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiOwnerState {
    pub owner: ApiOwner,
}

impl ApiOwnerState {
    /// Restores the last selected owner, falling back to the default.
    pub fn from_storage<S: KeyValueStorage>(storage: &S) -> Self {
        let owner = match storage.get(API_OWNER_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("[api] {}, using default owner", e);
                ApiOwner::default()
            }),
            None => ApiOwner::default(),
        };
        Self { owner }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOwnerAction {
    Select(ApiOwner),
}

impl Reducer for ApiOwnerState {
    type Action = ApiOwnerAction;

    fn reduce(&mut self, action: ApiOwnerAction) {
        match action {
            ApiOwnerAction::Select(owner) => self.owner = owner,
        }
    }
}

pub fn select_owner<S: KeyValueStorage>(
    storage: &S,
    owner: ApiOwner,
    dispatch: &impl Fn(ApiOwnerAction),
) {
    storage.set(API_OWNER_KEY, owner.as_str());
    dispatch(ApiOwnerAction::Select(owner));
}
