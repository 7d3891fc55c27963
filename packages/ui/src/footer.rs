use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();
    rsx! {
        footer { class: "site-footer",
            "© {year} ShiftMatch · data stays on this device"
        }
    }
}
