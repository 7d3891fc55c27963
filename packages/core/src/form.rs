//! Raw form input and its conversion into domain values.
//!
//! Blank fields fall back to defaults instead of failing; only slot rows can
//! reject a submission.

use crate::{AvailabilitySlot, Job, JobId, SeekerProfile, SlotError};

/// One editable slot row as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDraft {
    pub day: String,
    pub start: String,
    pub end: String,
}

impl Default for SlotDraft {
    fn default() -> Self {
        Self {
            day: "Mon".to_string(),
            start: "16:00".to_string(),
            end: "20:00".to_string(),
        }
    }
}

impl From<&AvailabilitySlot> for SlotDraft {
    fn from(slot: &AvailabilitySlot) -> Self {
        Self {
            day: slot.day.to_string(),
            start: slot.interval.start().to_string(),
            end: slot.interval.end().to_string(),
        }
    }
}

impl SlotDraft {
    pub fn parse(&self) -> Result<AvailabilitySlot, SlotError> {
        AvailabilitySlot::parse(&self.day, &self.start, &self.end)
    }
}

/// Parse every row, failing on the first bad one.
pub fn parse_slots(rows: &[SlotDraft]) -> Result<Vec<AvailabilitySlot>, SlotError> {
    rows.iter().map(SlotDraft::parse).collect()
}

/// Rows to show for saved slots; an empty list still gets one default row.
pub fn slot_rows(slots: &[AvailabilitySlot]) -> Vec<SlotDraft> {
    if slots.is_empty() {
        vec![SlotDraft::default()]
    } else {
        slots.iter().map(SlotDraft::from).collect()
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Hourly pay: blank means zero, anything unreadable is left unset.
pub fn parse_pay(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        Some(0.0)
    } else {
        parse_number(text)
    }
}

/// Distance in km: blank or unreadable is unknown.
pub fn parse_distance(text: &str) -> Option<f64> {
    parse_number(text)
}

/// Seat count: anything but a positive integer means one seat.
pub fn parse_seats(text: &str) -> u32 {
    text.trim().parse::<u32>().ok().filter(|n| *n >= 1).unwrap_or(1)
}

/// Max-distance filter: blank or unreadable means no limit.
pub fn parse_max_distance(text: &str) -> Option<f64> {
    parse_number(text)
}

/// The seeker's profile form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub location: String,
    pub skills: String,
    pub slots: Vec<SlotDraft>,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::from_profile(&SeekerProfile::default())
    }
}

impl ProfileDraft {
    /// Fill the form from a saved profile.
    pub fn from_profile(profile: &SeekerProfile) -> Self {
        Self {
            name: profile.name.clone(),
            location: profile.location.clone(),
            skills: profile.skills.clone(),
            slots: slot_rows(&profile.slots),
        }
    }

    pub fn into_profile(self) -> Result<SeekerProfile, SlotError> {
        Ok(SeekerProfile {
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            skills: self.skills.trim().to_string(),
            slots: parse_slots(&self.slots)?,
        })
    }
}

/// The provider's job form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub business: String,
    pub location: String,
    pub title: String,
    pub description: String,
    pub pay: String,
    pub distance: String,
    pub seats: String,
    pub slots: Vec<SlotDraft>,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            business: String::new(),
            location: String::new(),
            title: String::new(),
            description: String::new(),
            pay: String::new(),
            distance: String::new(),
            seats: String::new(),
            slots: vec![SlotDraft::default()],
        }
    }
}

impl JobDraft {
    /// Build the job to publish under `id`.
    pub fn into_job(self, id: JobId) -> Result<Job, SlotError> {
        let slots = parse_slots(&self.slots)?;
        let mut job = Job::new(self.business.trim(), self.location.trim(), self.title.trim())
            .with_description(self.description.trim())
            .with_seats(parse_seats(&self.seats))
            .with_slots(slots);
        job.id = id;
        job.pay = parse_pay(&self.pay);
        job.distance = parse_distance(&self.distance);
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Weekday;

    #[test]
    fn default_row_is_monday_evening() {
        let slot = SlotDraft::default().parse().unwrap();
        assert_eq!(slot.day, Weekday::Mon);
        assert_eq!(slot.to_string(), "Mon 16:00–20:00");
    }

    #[test]
    fn empty_profile_gets_one_row() {
        assert_eq!(ProfileDraft::default().slots, vec![SlotDraft::default()]);
    }

    #[test]
    fn saved_slots_become_rows() {
        let profile = SeekerProfile {
            slots: vec![
                AvailabilitySlot::parse("Tue", "09:00", "12:00").unwrap(),
                AvailabilitySlot::parse("Sat", "10:00", "11:30").unwrap(),
            ],
            ..Default::default()
        };
        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.slots.len(), 2);
        assert_eq!(draft.slots[1].end, "11:30");
        assert_eq!(draft.into_profile().unwrap(), profile);
    }

    #[test]
    fn profile_fields_are_trimmed() {
        let draft = ProfileDraft {
            name: "  Asha ".into(),
            location: " Pune".into(),
            skills: "cooking ".into(),
            slots: vec![],
        };
        let profile = draft.into_profile().unwrap();
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.location, "Pune");
        assert_eq!(profile.skills, "cooking");
    }

    #[test]
    fn bad_slot_row_rejects_form() {
        let mut draft = ProfileDraft::default();
        draft.slots.push(SlotDraft {
            day: "Tue".into(),
            start: "".into(),
            end: "12:00".into(),
        });
        assert!(matches!(draft.into_profile(), Err(SlotError::InvalidTime(_))));
    }

    #[test]
    fn blank_numbers_use_defaults() {
        assert_eq!(parse_pay(""), Some(0.0));
        assert_eq!(parse_distance("  "), None);
        assert_eq!(parse_seats(""), 1);
        assert_eq!(parse_max_distance(""), None);
    }

    #[test]
    fn unreadable_numbers_are_unset() {
        assert_eq!(parse_pay("lots"), None);
        assert_eq!(parse_distance("near"), None);
        assert_eq!(parse_distance("NaN"), None);
        assert_eq!(parse_seats("0"), 1);
        assert_eq!(parse_seats("-2"), 1);
        assert_eq!(parse_seats("2.5"), 1);
        assert_eq!(parse_max_distance("inf"), None);
    }

    #[test]
    fn readable_numbers_parse() {
        assert_eq!(parse_pay(" 150.5 "), Some(150.5));
        assert_eq!(parse_distance("3"), Some(3.0));
        assert_eq!(parse_seats("4"), 4);
        assert_eq!(parse_max_distance("7.5"), Some(7.5));
    }

    #[test]
    fn job_draft_builds_job() {
        let id = JobId::new();
        let draft = JobDraft {
            business: " Corner Store ".into(),
            location: "Kothrud".into(),
            title: "Cashier".into(),
            description: "Evening shift".into(),
            pay: "90".into(),
            distance: "".into(),
            seats: "2".into(),
            slots: vec![SlotDraft {
                day: "Tue".into(),
                start: "09:00".into(),
                end: "12:00".into(),
            }],
        };
        let job = draft.into_job(id.clone()).unwrap();
        assert_eq!(job.id, id);
        assert_eq!(job.business, "Corner Store");
        assert_eq!(job.pay, Some(90.0));
        assert_eq!(job.distance, None);
        assert_eq!(job.seats, 2);
        assert_eq!(job.slots.len(), 1);
    }
}
