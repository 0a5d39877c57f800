use leptos::prelude::*;

/// Bordered card whose top edge takes the given color.
#[component]
pub fn CardTemplate(
    #[prop(into)] color: String,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl border-t-4" style=format!("border-top-color: {color}")>
            <div class="card-body">
                {title.map(|t| view! { <h2 class="card-title">{t}</h2> })}
                {children()}
            </div>
        </div>
    }
}
