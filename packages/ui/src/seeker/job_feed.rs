use db::SeekerBoard;
use dioxus::prelude::*;
use shift_core::form::parse_max_distance;
use shift_core::{Job, JobQuery};
use storage::Storage;

use crate::JobCard;

/// Props for JobFeed component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFeedProps {
    /// Store revision; any change re-reads jobs and profile.
    pub revision: Signal<u32>,
    pub notice: Signal<Option<String>>,
    pub error: Signal<Option<String>>,
}

/// Jobs matching the saved availability, with title and distance filters.
#[component]
pub fn JobFeed(props: JobFeedProps) -> Element {
    let storage = use_context::<Storage>();
    let mut title = use_signal(String::new);
    let mut max_distance = use_signal(String::new);
    let mut revision = props.revision;
    let mut notice = props.notice;
    let mut error = props.error;

    // Reading the signals here re-renders the feed whenever they change.
    let _ = revision();
    let query = JobQuery::new(title(), parse_max_distance(&max_distance()));
    let jobs = SeekerBoard::new(&storage).visible_jobs(&query);

    let on_apply = use_callback(move |job: Job| {
        match SeekerBoard::new(&storage).apply(&job) {
            Ok(event) => {
                error.set(None);
                notice.set(Some(event.notice().to_string()));
            }
            Err(e) => {
                notice.set(None);
                error.set(Some(format!("Could not submit application: {}", e)));
            }
        }
    });

    rsx! {
        section { class: "card job-feed",
            div { class: "feed-header",
                h3 { "Matching jobs" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| *revision.write() += 1,
                    "Refresh"
                }
            }

            div { class: "filters",
                input {
                    placeholder: "Search title",
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
                input {
                    r#type: "number",
                    min: "0",
                    placeholder: "Max distance (km)",
                    value: "{max_distance}",
                    oninput: move |e| max_distance.set(e.value()),
                }
            }

            if jobs.is_empty() {
                div { class: "empty-state",
                    p { "No matching jobs yet. Add more availability or clear the filters." }
                }
            } else {
                div { class: "job-list",
                    for job in jobs {
                        JobCard {
                            key: "{job.id}",
                            job: job.clone(),
                            action_label: "Apply",
                            on_action: on_apply,
                        }
                    }
                }
            }
        }
    }
}
