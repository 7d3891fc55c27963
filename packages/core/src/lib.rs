//! Core domain types for the availability matching board.
//!
//! This crate is pure and storage-agnostic:
//! - Slots, intervals and the overlap test
//! - Seeker profiles, jobs and applications
//! - The matching engine used by the seeker view
//! - Form drafts that turn raw input into domain values
//! - Events for user-visible confirmations and logging

mod application;
mod events;
pub mod form;
mod job;
pub mod matching;
mod profile;
mod slot;

pub use application::Application;
pub use events::BoardEvent;
pub use job::{Job, JobId};
pub use matching::{JobQuery, count_applications, filter_jobs, remove_job, slots_match};
pub use profile::{ANONYMOUS_SEEKER, SeekerProfile};
pub use slot::{AvailabilitySlot, MINUTES_PER_DAY, SlotError, TimeInterval, TimeOfDay, Weekday};
