// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use dioxus::prelude::*;
use storage::{Storage, StorageConfig};

use ui::provider::ProviderPage;
use ui::seeker::SeekerPage;
use ui::{Footer, Navbar};
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
        #[route("/")]
        Home {},
        #[route("/seeker")]
        Seeker {},
        #[route("/provider")]
        Provider {},
}

fn main() {
    dioxus::launch(App);
}

/// Browser storage, or a throwaway in-memory store when `localStorage` is
/// unavailable (private mode, non-wasm builds).
fn open_storage() -> Storage {
    match Storage::new(StorageConfig::browser()) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!("localStorage unavailable, data will not persist: {}", e);
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

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Home {},
                "Home"
            }
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
