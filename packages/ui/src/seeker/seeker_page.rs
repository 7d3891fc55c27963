use dioxus::prelude::*;

use crate::{ErrorBanner, NoticeBanner};

use super::{JobFeed, ProfileForm};

/// Seeker page: save availability on the left, browse matches on the right.
#[component]
pub fn SeekerPage() -> Element {
    let notice = use_signal(|| None::<String>);
    let error = use_signal(|| None::<String>);
    // Bumped after every write so the feed re-reads the store.
    let mut revision = use_signal(|| 0u32);

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { class: "page-title", "Find work that fits your week" }
                p { class: "page-description",
                    "Save when you are free and see jobs whose hours overlap."
                }
            }

            NoticeBanner { message: notice }
            ErrorBanner { message: error }

            div { class: "two-column",
                ProfileForm {
                    notice,
                    error,
                    on_saved: move |_| *revision.write() += 1,
                }
                JobFeed { revision, notice, error }
            }
        }
    }
}
