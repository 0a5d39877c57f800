use leptos::prelude::*;

use crate::store::use_store;
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// Navigation bar shared by the authenticated pages.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let store = use_store();

    let links = AppRoute::NAVIGATION
        .into_iter()
        .map(|route| {
            view! {
                <li>
                    <Link to=route>{route.title()}</Link>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm">
                <div class="flex-1">
                    <span class="text-xl font-bold px-4">"Subway Admin"</span>
                </div>
                <ul class="menu menu-horizontal px-1">{links}</ul>
                <button class="btn btn-ghost" on:click=move |_| store.logout()>
                    "Log out"
                </button>
            </div>
            <main class="container mx-auto max-w-3xl p-6 space-y-6">{children()}</main>
        </div>
    }
}
