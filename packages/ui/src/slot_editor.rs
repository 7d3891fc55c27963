//! Editable list of day + start/end rows.

use dioxus::prelude::*;
use shift_core::Weekday;
use shift_core::form::SlotDraft;

/// Slot rows bound to a signal owned by the form.
#[component]
pub fn SlotEditor(rows: Signal<Vec<SlotDraft>>) -> Element {
    let mut rows = rows;

    rsx! {
        div { class: "slot-editor",
            for (index, row) in rows().into_iter().enumerate() {
                SlotRow { key: "{index}", index, row, rows }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| rows.write().push(SlotDraft::default()),
                "Add slot"
            }
        }
    }
}

#[component]
fn SlotRow(index: usize, row: SlotDraft, rows: Signal<Vec<SlotDraft>>) -> Element {
    let mut rows = rows;

    rsx! {
        div { class: "slot",
            label { "Day"
                select {
                    class: "slot-day",
                    value: "{row.day}",
                    onchange: move |e| {
                        if let Some(draft) = rows.write().get_mut(index) {
                            draft.day = e.value();
                        }
                    },
                    for day in Weekday::ALL {
                        option {
                            value: "{day}",
                            selected: day.as_str() == row.day,
                            "{day}"
                        }
                    }
                }
            }
            label { "Start"
                input {
                    class: "slot-start",
                    r#type: "time",
                    value: "{row.start}",
                    oninput: move |e| {
                        if let Some(draft) = rows.write().get_mut(index) {
                            draft.start = e.value();
                        }
                    },
                }
            }
            label { "End"
                input {
                    class: "slot-end",
                    r#type: "time",
                    value: "{row.end}",
                    oninput: move |e| {
                        if let Some(draft) = rows.write().get_mut(index) {
                            draft.end = e.value();
                        }
                    },
                }
            }
            button {
                class: "btn btn-ghost remove",
                r#type: "button",
                onclick: move |_| {
                    let mut list = rows.write();
                    if index < list.len() {
                        list.remove(index);
                    }
                },
                "Remove"
            }
        }
    }
}
