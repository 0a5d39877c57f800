//! 路由定义模块 - 领域模型
//!
//! Pure routing rules, independent of the DOM.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    Stations,
    Lines,
    Sections,
    NotFound,
}

impl AppRoute {
    /// Pages shown in the navigation bar, in order.
    pub const NAVIGATION: [AppRoute; 3] = [AppRoute::Stations, AppRoute::Lines, AppRoute::Sections];

    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/login" => Self::Login,
            "/stations" => Self::Stations,
            "/lines" => Self::Lines,
            "/sections" => Self::Sections,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Stations => "/stations",
            Self::Lines => "/lines",
            Self::Sections => "/sections",
            Self::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Stations => "Stations",
            Self::Lines => "Lines",
            Self::Sections => "Sections",
            Self::NotFound => "Not found",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Stations | Self::Lines | Self::Sections)
    }

    /// 已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    pub fn auth_success_redirect() -> Self {
        Self::Stations
    }

    /// Where a navigation to `self` actually ends up for the given auth state.
    pub fn guard(self, is_authenticated: bool) -> Self {
        if self.requires_auth() && !is_authenticated {
            Self::auth_failure_redirect()
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            Self::auth_success_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
