//! Weekly availability slots: a day of the week plus a time-of-day range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in one day; the largest value a [`TimeOfDay`] may hold.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors raised when turning user input or stored text into slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("unknown day: {0:?} (expected Mon..Sun)")]
    UnknownDay(String),
    #[error("invalid time {0:?} (expected HH:MM)")]
    InvalidTime(String),
    #[error("end {end} must be after start {start}")]
    EmptyInterval { start: TimeOfDay, end: TimeOfDay },
}

/// Day of the week a slot applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Parse a three-letter day name.
    pub fn parse(s: &str) -> Result<Self, SlotError> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s.trim())
            .ok_or_else(|| SlotError::UnknownDay(s.to_string()))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A clock time stored as minutes since midnight.
///
/// `24:00` is representable so that a range can end at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Build from minutes since midnight, rejecting anything past `24:00`.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if minutes >= 60 {
            return None;
        }
        Self::from_minutes(hours.checked_mul(60)?.checked_add(minutes)?)
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Parse `"HH:MM"` clock text (single-digit hours are accepted).
    pub fn parse(s: &str) -> Result<Self, SlotError> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if h.is_empty() || h.len() > 2 || m.len() != 2 || !digits(h) || !digits(m) {
            return Err(invalid());
        }
        let hours: u16 = h.parse().map_err(|_| invalid())?;
        let minutes: u16 = m.parse().map_err(|_| invalid())?;
        Self::from_hm(hours, minutes).ok_or_else(invalid)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// A `[start, end)` time-of-day range within a single day.
///
/// Overnight ranges are not supported: `start < end` always holds for values
/// built through [`TimeInterval::new`] or deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, SlotError> {
        if start >= end {
            return Err(SlotError::EmptyInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse a pair of `"HH:MM"` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, SlotError> {
        Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Strict overlap: ranges that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", self.start, self.end)
    }
}

/// A block of availability (seeker) or required presence (job) on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SlotRecord", into = "SlotRecord")]
pub struct AvailabilitySlot {
    pub day: Weekday,
    pub interval: TimeInterval,
}

impl AvailabilitySlot {
    pub fn new(day: Weekday, interval: TimeInterval) -> Self {
        Self { day, interval }
    }

    /// Parse the three text fields a slot row is made of.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self, SlotError> {
        Ok(Self::new(Weekday::parse(day)?, TimeInterval::parse(start, end)?))
    }

    /// Same day and overlapping interval.
    pub fn intersects(&self, other: &AvailabilitySlot) -> bool {
        self.day == other.day && self.interval.overlaps(&other.interval)
    }
}

impl std::fmt::Display for AvailabilitySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.interval)
    }
}

/// Stored form of a slot: `{ "day": "Tue", "start": "09:00", "end": "12:00" }`.
#[derive(Serialize, Deserialize)]
struct SlotRecord {
    day: Weekday,
    start: String,
    end: String,
}

impl TryFrom<SlotRecord> for AvailabilitySlot {
    type Error = SlotError;

    fn try_from(record: SlotRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            record.day,
            TimeInterval::parse(&record.start, &record.end)?,
        ))
    }
}

impl From<AvailabilitySlot> for SlotRecord {
    fn from(slot: AvailabilitySlot) -> Self {
        Self {
            day: slot.day,
            start: slot.interval.start.to_string(),
            end: slot.interval.end.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn interval(start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(start, end).unwrap()
    }

    #[test]
    fn parses_clock_text() {
        assert_eq!(TimeOfDay::parse("09:30").unwrap().minutes(), 570);
        assert_eq!(TimeOfDay::parse("9:05").unwrap().minutes(), 545);
        assert_eq!(TimeOfDay::parse("24:00").unwrap(), TimeOfDay::END_OF_DAY);
        assert_eq!(TimeOfDay::parse("00:00").unwrap(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn rejects_malformed_clock_text() {
        for bad in ["", "9", "09:5", "09:60", "24:01", "25:00", "ab:cd", "09-30", "009:00", "+9:00"] {
            assert!(
                matches!(TimeOfDay::parse(bad), Err(SlotError::InvalidTime(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn formats_clock_text() {
        assert_eq!(TimeOfDay::from_hm(7, 5).unwrap().to_string(), "07:05");
        assert_eq!(interval("09:00", "12:00").to_string(), "09:00–12:00");
    }

    #[test]
    fn rejects_empty_and_reversed_intervals() {
        assert!(matches!(
            TimeInterval::parse("12:00", "12:00"),
            Err(SlotError::EmptyInterval { .. })
        ));
        assert!(matches!(
            TimeInterval::parse("22:00", "02:00"),
            Err(SlotError::EmptyInterval { .. })
        ));
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let morning = interval("10:00", "12:00");
        let afternoon = interval("12:00", "14:00");
        assert!(!morning.overlaps(&afternoon));
        assert!(!afternoon.overlaps(&morning));
    }

    #[test]
    fn partial_and_nested_intervals_overlap() {
        assert!(interval("09:00", "12:00").overlaps(&interval("11:00", "13:00")));
        assert!(interval("08:00", "18:00").overlaps(&interval("12:00", "12:30")));
    }

    #[test]
    fn slot_intersection_requires_same_day() {
        let tue = AvailabilitySlot::parse("Tue", "09:00", "12:00").unwrap();
        let wed = AvailabilitySlot::parse("Wed", "09:00", "12:00").unwrap();
        assert!(tue.intersects(&tue));
        assert!(!tue.intersects(&wed));
    }

    #[test]
    fn weekday_parse() {
        assert_eq!(Weekday::parse("Sun").unwrap(), Weekday::Sun);
        assert!(matches!(Weekday::parse("Sunday"), Err(SlotError::UnknownDay(_))));
    }

    #[test]
    fn slot_uses_flat_wire_shape() {
        let slot = AvailabilitySlot::parse("Tue", "09:00", "12:00").unwrap();
        let json = serde_json::to_value(slot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "day": "Tue", "start": "09:00", "end": "12:00" })
        );
    }

    #[test]
    fn slot_deserialization_validates_times() {
        let bad = serde_json::json!({ "day": "Tue", "start": "13:00", "end": "12:00" });
        assert!(serde_json::from_value::<AvailabilitySlot>(bad).is_err());
        let garbage = serde_json::json!({ "day": "Tue", "start": "noon", "end": "12:00" });
        assert!(serde_json::from_value::<AvailabilitySlot>(garbage).is_err());
    }

    fn arb_interval() -> impl Strategy<Value = TimeInterval> {
        (0..MINUTES_PER_DAY, 1..=MINUTES_PER_DAY)
            .prop_filter("start must precede end", |(s, e)| s < e)
            .prop_map(|(s, e)| {
                TimeInterval::new(TimeOfDay(s), TimeOfDay(e)).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_interval_overlaps_itself(a in arb_interval()) {
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_display_round_trips(a in arb_interval()) {
            let parsed = TimeInterval::parse(&a.start().to_string(), &a.end().to_string()).unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
