//! 路由服务模块 - 核心引擎
//!
//! Owns every interaction with `window.history`. Navigation runs through
//! [`AppRoute::guard`] before the history entry is written, and a change of
//! the injected login signal re-runs the guard for the current page.

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial = requested.guard(is_authenticated.get_untracked());
        if initial != requested {
            write_history(initial.to_path(), false);
        }
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, push: bool) {
        let resolved = target.guard(self.is_authenticated.get_untracked());
        if resolved != target {
            log!("[Router] {} is not reachable, redirecting to {}", target, resolved);
        }
        write_history(resolved.to_path(), push);
        self.set_route.set(resolved);
    }

    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let resolved = target.guard(is_authenticated.get_untracked());
            if resolved != target {
                write_history(resolved.to_path(), false);
            }
            set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// Re-checks the current page whenever the login state flips.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();
            let resolved = route.guard(is_auth);
            if resolved != route {
                log!(
                    "[Router] login state changed ({}), redirecting to {}",
                    if is_auth { "logged in" } else { "logged out" },
                    resolved
                );
                write_history(resolved.to_path(), true);
                set_route.set(resolved);
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

#[component]
pub fn Router(is_authenticated: Signal<bool>, children: Children) -> impl IntoView {
    provide_router(is_authenticated);
    children()
}

#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// In-app link that navigates without a page load.
#[component]
pub fn Link(to: AppRoute, children: Children) -> impl IntoView {
    let router = use_router();
    let is_active = move || router.current_route().get() == to;

    view! {
        <a
            href=to.to_path()
            class:active=is_active
            on:click=move |ev| {
                ev.prevent_default();
                router.navigate(to.to_path());
            }
        >
            {children()}
        </a>
    }
}
