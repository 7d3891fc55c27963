// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;
use storage::Storage;

use ui::provider::ProviderPage;
use ui::seeker::SeekerPage;
use ui::{Footer, Navbar};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
        #[route("/")]
        Seeker {},
        #[route("/provider")]
        Provider {},
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    dioxus::launch(App);
}

/// Storage selected by `STORAGE_BACKEND` and friends, falling back to memory
/// so a bad config never keeps the window from opening.
fn open_storage() -> Storage {
    match Storage::from_env() {
        Ok(storage) => {
            tracing::info!("Using {} storage", storage.kind_str());
            storage
        }
        Err(e) => {
            tracing::warn!("Storage config rejected, using in-memory storage: {}", e);
            Storage::memory()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(open_storage);

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Seeker {},
                "Find work"
            }
            Link {
                to: Route::Provider {},
                "Post jobs"
            }
        }

        Outlet::<Route> {}

        Footer {}
    }
}

#[component]
fn Seeker() -> Element {
    rsx! {
        SeekerPage {}
    }
}

#[component]
fn Provider() -> Element {
    rsx! {
        ProviderPage {}
    }
}
