use db::SeekerBoard;
use dioxus::prelude::*;
use shift_core::form::ProfileDraft;
use storage::Storage;

use crate::SlotEditor;

/// Props for ProfileForm component.
#[derive(Props, Clone, PartialEq)]
pub struct ProfileFormProps {
    pub notice: Signal<Option<String>>,
    pub error: Signal<Option<String>>,
    /// Callback after the profile was written.
    pub on_saved: EventHandler<()>,
}

/// Profile and availability form, prefilled from the store.
#[component]
pub fn ProfileForm(props: ProfileFormProps) -> Element {
    let storage = use_context::<Storage>();
    let saved = use_hook(|| ProfileDraft::from_profile(&SeekerBoard::new(&storage).profile()));

    let mut name = use_signal(|| saved.name.clone());
    let mut location = use_signal(|| saved.location.clone());
    let mut skills = use_signal(|| saved.skills.clone());
    let slots = use_signal(|| saved.slots.clone());

    let mut notice = props.notice;
    let mut error = props.error;

    let submit = move |_| {
        let draft = ProfileDraft {
            name: name(),
            location: location(),
            skills: skills(),
            slots: slots(),
        };

        match SeekerBoard::new(&storage).save_profile(draft) {
            Ok(event) => {
                error.set(None);
                notice.set(Some(event.notice().to_string()));
                props.on_saved.call(());
            }
            Err(e) => {
                notice.set(None);
                error.set(Some(format!("Could not save availability: {}", e)));
            }
        }
    };

    rsx! {
        section { class: "card profile-form",
            h3 { "Your availability" }

            div { class: "form-group",
                label { "Name" }
                input {
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
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
                label { "Skills" }
                textarea {
                    rows: 3,
                    value: "{skills}",
                    oninput: move |e| skills.set(e.value()),
                }
            }

            SlotEditor { rows: slots }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    onclick: submit,
                    "Save availability"
                }
            }
        }
    }
}
