use leptos::prelude::*;
use std::time::Duration;

const SNACKBAR_DURATION: Duration = Duration::from_secs(3);

/// Visibility of the current message. Every new message takes a fresh
/// ticket, and a timer only hides the message whose ticket it holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Toast {
    ticket: u64,
    expired: bool,
}

impl Toast {
    fn show(&mut self) -> u64 {
        self.ticket += 1;
        self.expired = false;
        self.ticket
    }

    fn expire(&mut self, ticket: u64) {
        if ticket == self.ticket {
            self.expired = true;
        }
    }

    fn is_visible(&self, message: &str) -> bool {
        !message.is_empty() && !self.expired
    }
}

/// Shows a non-empty message for a few seconds.
#[component]
pub fn Snackbar(#[prop(into)] message: Signal<String>) -> impl IntoView {
    let toast = RwSignal::new(Toast::default());

    Effect::new(move |_| {
        let is_empty = message.with(String::is_empty);
        let Some(ticket) = toast.try_update(Toast::show) else {
            return;
        };
        if !is_empty {
            set_timeout(
                move || {
                    toast.try_update(|t| t.expire(ticket));
                },
                SNACKBAR_DURATION,
            );
        }
    });

    let visible = move || message.with(|m| toast.with(|t| t.is_visible(m)));

    view! {
        <Show when=visible>
            <div class="toast toast-top toast-end z-50">
                <div class="alert alert-error shadow-lg">
                    <span>{move || message.get()}</span>
                </div>
            </div>
        </Show>
    }
}
