//! Subway Admin 前端应用
//!
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `store`: 全局状态与异步意图
//! - `components`: UI 组件层

mod api;
mod components {
    mod common;
    mod form_state;
    mod layout;
    mod line_add_modal;
    mod line_modify_modal;
    pub mod lines;
    pub mod login;
    mod modal;
    mod section_add_modal;
    pub mod sections;
    pub mod stations;
}
mod config;
mod session;
mod store;
mod web;

use crate::components::lines::LinesPage;
use crate::components::login::LoginPage;
use crate::components::sections::SectionsPage;
use crate::components::stations::StationsPage;
use crate::store::Store;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Stations => view! { <StationsPage /> }.into_any(),
        AppRoute::Lines => view! { <LinesPage /> }.into_any(),
        AppRoute::Sections => view! { <SectionsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    provide_context(store);

    view! {
        // 登录状态注入路由守卫
        <Router is_authenticated=store.is_login_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
