use leptos::ev::Event;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::web_sys::SubmitEvent;
use subway_shared::validate::ErrorMessage;

use crate::config::ApiOwner;
use crate::store::use_store;

/// Successful login flips the login signal; the router then moves away
/// from this page on its own.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (form_error, set_form_error) = signal(Option::<ErrorMessage>::None);

    let is_submitting = move || store.login.with(|s| s.request.is_loading);
    let message = move || match form_error.get() {
        Some(err) => Some(err.text().to_string()),
        None => store.login.with(|s| {
            let message = &s.request.error_message;
            (!message.is_empty()).then(|| message.clone())
        }),
    };
    let current_owner = move || store.api_owner.with(|s| s.owner);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            set_form_error.set(Some(ErrorMessage::IncompleteForm));
            return;
        }
        set_form_error.set(None);
        store.login(email, password);
    };

    let on_owner_change = move |ev: Event| match event_target_value(&ev).parse::<ApiOwner>() {
        Ok(owner) => store.select_owner(owner),
        Err(err) => warn!("[LoginPage] {}", err),
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Subway Admin"</h1>
                    <p class="text-base-content/70">"Log in to manage stations and lines"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || message().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || message().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="api-owner">
                                <span class="label-text">"Server"</span>
                            </label>
                            <select id="api-owner" class="select select-bordered" on:change=on_owner_change>
                                {ApiOwner::ALL
                                    .into_iter()
                                    .map(|owner| {
                                        view! {
                                            <option value=owner.as_str() selected=move || current_owner() == owner>
                                                {owner.display_name()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="admin@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=is_submitting>
                                {move || if is_submitting() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Log in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
