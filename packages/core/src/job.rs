//! Job postings published by providers.

use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

use crate::AvailabilitySlot;

/// Opaque identifier for a job.
///
/// New ids are ULIDs so they sort by creation time, but any non-empty string
/// is accepted when reading stored records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Create a new unique job ID.
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create an ID that differs from every ID in `taken`.
    pub fn fresh<'a>(taken: impl IntoIterator<Item = &'a JobId> + Clone) -> Self {
        loop {
            let candidate = Self::new();
            if !taken.clone().into_iter().any(|id| *id == candidate) {
                return candidate;
            }
        }
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        if id.is_empty() {
            return Err(serde::de::Error::custom("job id must not be empty"));
        }
        Ok(Self(id))
    }
}

fn default_seats() -> u32 {
    1
}

/// Missing, `null` and zero seat counts all read as one.
fn lenient_seats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let seats = Option::<u32>::deserialize(deserializer)?;
    Ok(seats.filter(|n| *n >= 1).unwrap_or_else(default_seats))
}

/// A posted job with the time slots it needs covered.
///
/// Jobs are never edited after publication; the provider deletes and
/// republishes instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub business: String,
    pub location: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Hourly rate; `None` when the provider left it unreadable.
    #[serde(default)]
    pub pay: Option<f64>,
    /// Distance in km; `None` when unknown.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default = "default_seats", deserialize_with = "lenient_seats")]
    pub seats: u32,
    #[serde(default)]
    pub slots: Vec<AvailabilitySlot>,
}

impl Job {
    /// Create a job with a new ID and no optional details.
    pub fn new(
        business: impl Into<String>,
        location: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: JobId::new(),
            business: business.into(),
            location: location.into(),
            title: title.into(),
            description: String::new(),
            pay: None,
            distance: None,
            seats: default_seats(),
            slots: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_pay(mut self, pay: f64) -> Self {
        self.pay = Some(pay);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Set the number of seats; zero is raised to one.
    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = seats.max(1);
        self
    }

    pub fn with_slots(mut self, slots: Vec<AvailabilitySlot>) -> Self {
        self.slots = slots;
        self
    }

    pub fn pay_label(&self) -> String {
        match self.pay {
            Some(pay) if pay.is_finite() => format!("₹{pay} / hr"),
            _ => "₹- / hr".to_string(),
        }
    }

    pub fn distance_label(&self) -> String {
        match self.distance {
            Some(km) if km.is_finite() => format!("{km} km"),
            _ => "? km".to_string(),
        }
    }

    pub fn seats_label(&self) -> String {
        format!("{} seat(s)", self.seats)
    }
}
