//! Dismissable message banners.

use dioxus::prelude::*;

/// Confirmation after a successful action.
#[component]
pub fn NoticeBanner(message: Signal<Option<String>>) -> Element {
    let mut message = message;
    rsx! {
        if let Some(text) = message() {
            div { class: "notice-banner",
                span { "{text}" }
                button {
                    onclick: move |_| message.set(None),
                    "×"
                }
            }
        }
    }
}

/// Error from a failed write or invalid form.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> Element {
    let mut message = message;
    rsx! {
        if let Some(err) = message() {
            div { class: "error-banner",
                span { "{err}" }
                button {
                    onclick: move |_| message.set(None),
                    "×"
                }
            }
        }
    }
}
