#![allow(dead_code)]

use shift_core::form::{JobDraft, SlotDraft};
use shift_core::AvailabilitySlot;
use storage::Storage;

pub fn setup_storage() -> Storage {
    Storage::memory()
}

pub fn slot(day: &str, start: &str, end: &str) -> AvailabilitySlot {
    AvailabilitySlot::parse(day, start, end).unwrap()
}

pub fn slot_row(day: &str, start: &str, end: &str) -> SlotDraft {
    SlotDraft {
        day: day.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

pub fn job_draft(title: &str, distance: &str, slots: Vec<SlotDraft>) -> JobDraft {
    JobDraft {
        business: "Corner Store".to_string(),
        location: "Kothrud".to_string(),
        title: title.to_string(),
        description: "Help around the shop".to_string(),
        pay: "100".to_string(),
        distance: distance.to_string(),
        seats: "1".to_string(),
        slots,
    }
}
