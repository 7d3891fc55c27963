//! Create job form component.

use db::ProviderBoard;
use dioxus::prelude::*;
use shift_core::form::{JobDraft, SlotDraft};
use storage::Storage;

use crate::SlotEditor;

/// Props for JobForm component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFormProps {
    pub notice: Signal<Option<String>>,
    pub error: Signal<Option<String>>,
    /// Callback when a job is published.
    pub on_published: EventHandler<()>,
}

/// Form component for publishing a new job.
#[component]
pub fn JobForm(props: JobFormProps) -> Element {
    let storage = use_context::<Storage>();

    let mut business = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut pay = use_signal(String::new);
    let mut distance = use_signal(String::new);
    let mut seats = use_signal(|| "1".to_string());
    let mut slots = use_signal(|| vec![SlotDraft::default()]);

    let mut notice = props.notice;
    let mut error = props.error;

    let submit = move |_| {
        let draft = JobDraft {
            business: business(),
            location: location(),
            title: title(),
            description: description(),
            pay: pay(),
            distance: distance(),
            seats: seats(),
            slots: slots(),
        };

        match ProviderBoard::new(&storage).publish(draft) {
            Ok((_job, event)) => {
                error.set(None);
                notice.set(Some(event.notice().to_string()));

                // Reset the form to a single default slot row
                let blank = JobDraft::default();
                business.set(blank.business);
                location.set(blank.location);
                title.set(blank.title);
                description.set(blank.description);
                pay.set(blank.pay);
                distance.set(blank.distance);
                seats.set("1".to_string());
                slots.set(blank.slots);

                props.on_published.call(());
            }
            Err(e) => {
                notice.set(None);
                error.set(Some(format!("Failed to publish job: {}", e)));
            }
        }
    };

    rsx! {
        section { class: "card create-job-form",
            h3 { "Post a job" }

            div { class: "form-group",
                label { "Business" }
                input {
                    value: "{business}",
                    oninput: move |e| business.set(e.value()),
                }
            }
            div { class: "form-group",
                label { "Location" }
                input {
                    value: "{location}",
                    oninput: move |e| location.set(e.value()),
                }
            }
            div { class: "form-group",
                label { "Title" }
                input {
                    value: "{title}",
                    oninput: move |e| title.set(e.value()),
                }
            }
            div { class: "form-group",
                label { "Description" }
                textarea {
                    rows: 3,
                    value: "{description}",
                    oninput: move |e| description.set(e.value()),
                }
            }
            div { class: "form-row",
                div { class: "form-group",
                    label { "Pay (₹/hr)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{pay}",
                        oninput: move |e| pay.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Distance (km)" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.1",
                        value: "{distance}",
                        oninput: move |e| distance.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { "Seats" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{seats}",
                        oninput: move |e| seats.set(e.value()),
                    }
                }
            }

            label { "Required slots" }
            SlotEditor { rows: slots }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    onclick: submit,
                    "Publish job"
                }
            }
        }
    }
}
