use dioxus::prelude::*;

use crate::Route;

/// Landing page pointing at the two sides of the board.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { class: "page-title", "Local shifts, matched to your week" }
                p { class: "page-description",
                    "Seekers save the hours they are free. Providers post jobs with the hours they need. "
                    "A job shows up for a seeker when at least one of its slots overlaps their availability."
                }
            }
            div { class: "two-column",
                section { class: "card",
                    h3 { "Looking for work?" }
                    p { "Record your weekly availability and browse matching jobs." }
                    Link { to: Route::Seeker {}, class: "btn btn-mint", "Find work" }
                }
                section { class: "card",
                    h3 { "Need a hand?" }
                    p { "Post a job with the slots you need covered and track applications." }
                    Link { to: Route::Provider {}, class: "btn btn-primary", "Post jobs" }
                }
            }
        }
    }
}
