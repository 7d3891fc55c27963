//! Job card shared by the seeker feed and the provider listing.

use dioxus::prelude::*;
use shift_core::Job;

/// Props for JobCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    /// The job to display.
    pub job: Job,
    /// Application count, shown on the provider side only.
    #[props(default)]
    pub applications: Option<usize>,
    /// Label of the card's single action button.
    #[props(into)]
    pub action_label: String,
    /// Extra class for the action button.
    #[props(into, default = "btn-mint".to_string())]
    pub action_class: String,
    /// Callback when the action button is clicked.
    pub on_action: EventHandler<Job>,
}

#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = props.job.clone();
    let job_for_action = job.clone();

    rsx! {
        article { class: "job",
            h4 { "{job.title}" }
            div { class: "meta",
                span { class: "chip", "{job.business}" }
                span { class: "chip", "{job.location}" }
                span { class: "chip", "{job.pay_label()}" }
                span { class: "chip", "{job.distance_label()}" }
                span { class: "chip", "{job.seats_label()}" }
                if let Some(count) = props.applications {
                    span { class: "chip", "Applications: {count}" }
                }
            }
            p { "{job.description}" }
            div { class: "meta",
                for slot in job.slots.iter() {
                    span { class: "chip", "{slot}" }
                }
            }
            div { class: "actions",
                button {
                    class: "btn {props.action_class}",
                    onclick: move |_| props.on_action.call(job_for_action.clone()),
                    "{props.action_label}"
                }
            }
        }
    }
}
