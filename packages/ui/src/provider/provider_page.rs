use db::ProviderBoard;
use dioxus::prelude::*;
use shift_core::Job;
use storage::Storage;

use crate::{ErrorBanner, JobCard, NoticeBanner};

use super::JobForm;

/// Provider page: publish jobs and manage the ones already posted.
#[component]
pub fn ProviderPage() -> Element {
    let storage = use_context::<Storage>();
    let mut notice = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut revision = use_signal(|| 0u32);

    // Counts are recomputed from the application log on every render.
    let _ = revision();
    let listings = ProviderBoard::new(&storage).listings();

    let on_delete = use_callback(move |job: Job| {
        match ProviderBoard::new(&storage).delete(&job.id) {
            Ok(event) => {
                error.set(None);
                notice.set(Some(event.notice().to_string()));
                *revision.write() += 1;
            }
            Err(e) => {
                notice.set(None);
                error.set(Some(format!("Failed to delete job: {}", e)));
            }
        }
    });

    rsx! {
        div { class: "page-container",
            div { class: "page-header",
                h1 { class: "page-title", "Post shifts" }
                p { class: "page-description",
                    "Publish jobs with the hours you need covered and see who applied."
                }
            }

            NoticeBanner { message: notice }
            ErrorBanner { message: error }

            div { class: "two-column",
                JobForm {
                    notice,
                    error,
                    on_published: move |_| *revision.write() += 1,
                }

                section { class: "card provider-jobs",
                    div { class: "feed-header",
                        h3 { "Your jobs" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| *revision.write() += 1,
                            "Refresh"
                        }
                    }

                    if listings.is_empty() {
                        div { class: "empty-state",
                            p { "No jobs posted yet" }
                        }
                    } else {
                        div { class: "job-list",
                            for listing in listings {
                                JobCard {
                                    key: "{listing.job.id}",
                                    job: listing.job.clone(),
                                    applications: listing.applications,
                                    action_label: "Delete",
                                    action_class: "btn-ghost",
                                    on_action: on_delete,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
