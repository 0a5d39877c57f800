//! 登录状态
//!
//! `is_login` mirrors the presence of the access token in the session
//! store. The token itself only lives in storage.

use super::slice::{Phase, Reducer, RequestState, run_thunk};
use crate::api::{self, ApiClient, ApiError, HttpClient};
use crate::session::SessionStore;
use crate::web::KeyValueStorage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub request: RequestState,
    pub is_login: bool,
}

impl LoginState {
    pub fn from_session<S: KeyValueStorage>(session: &SessionStore<S>) -> Self {
        Self {
            request: RequestState::default(),
            is_login: session.is_logged_in(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginAction {
    Login(Phase<()>),
    Logout,
}

impl Reducer for LoginState {
    type Action = LoginAction;

    fn reduce(&mut self, action: LoginAction) {
        match action {
            LoginAction::Login(phase) => {
                if self.request.settle(phase).is_some() {
                    self.is_login = true;
                }
            }
            LoginAction::Logout => {
                self.is_login = false;
                self.request = RequestState::default();
            }
        }
    }
}

pub async fn login<C: HttpClient, S: KeyValueStorage>(
    api: &ApiClient<C>,
    session: &SessionStore<S>,
    email: &str,
    password: &str,
    dispatch: &impl Fn(LoginAction),
) -> bool {
    run_thunk("login/login", dispatch, LoginAction::Login, async move {
        let token = api::login::request_token(api, email, password).await?;
        if !session.save_access_token(&token.access_token) {
            return Err(ApiError::SessionUnavailable);
        }
        Ok(())
    })
    .await
}

pub fn logout<S: KeyValueStorage>(session: &SessionStore<S>, dispatch: &impl Fn(LoginAction)) {
    session.clear_access_token();
    dispatch(LoginAction::Logout);
}
