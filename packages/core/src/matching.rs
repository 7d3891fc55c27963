//! Matching jobs against a seeker's availability.
//!
//! A seeker matches a job when any one of the job's slots overlaps any one of
//! the seeker's slots on the same day. Partial overlap is enough; the seeker
//! does not have to cover all of a job's hours.

use crate::{Application, AvailabilitySlot, Job, JobId, SeekerProfile};

/// True iff some job slot and some seeker slot share a day and overlap.
///
/// Either side being empty never matches.
pub fn slots_match(job_slots: &[AvailabilitySlot], seeker_slots: &[AvailabilitySlot]) -> bool {
    job_slots
        .iter()
        .any(|js| seeker_slots.iter().any(|ss| js.intersects(ss)))
}

/// Search criteria from the seeker view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    /// Case-insensitive substring of the title; empty matches everything.
    pub title: String,
    /// Upper bound on distance in km; `None` or NaN means unconstrained.
    pub max_distance: Option<f64>,
}

impl JobQuery {
    pub fn new(title: impl Into<String>, max_distance: Option<f64>) -> Self {
        Self {
            title: title.into(),
            max_distance,
        }
    }

    fn title_matches(&self, job: &Job) -> bool {
        self.title.is_empty() || job.title.to_lowercase().contains(&self.title.to_lowercase())
    }

    // Jobs with an unknown distance are always within range.
    fn distance_matches(&self, job: &Job) -> bool {
        match (self.max_distance, job.distance) {
            (Some(max), Some(distance)) if !max.is_nan() && !distance.is_nan() => distance <= max,
            _ => true,
        }
    }

    /// Whether a single job passes every criterion for `profile`.
    pub fn accepts(&self, job: &Job, profile: &SeekerProfile) -> bool {
        self.title_matches(job)
            && self.distance_matches(job)
            && slots_match(&job.slots, &profile.slots)
    }
}

/// Jobs visible to `profile` under `query`, in their original order.
pub fn filter_jobs<'a>(jobs: &'a [Job], profile: &SeekerProfile, query: &JobQuery) -> Vec<&'a Job> {
    jobs.iter().filter(|job| query.accepts(job, profile)).collect()
}

/// Number of log entries that reference `job_id`.
pub fn count_applications(applications: &[Application], job_id: &JobId) -> usize {
    applications.iter().filter(|a| a.job_id == *job_id).count()
}

/// Drop the job with `id`, keeping the rest in order.
///
/// Applications that point at it are not touched.
pub fn remove_job(jobs: Vec<Job>, id: &JobId) -> Vec<Job> {
    jobs.into_iter().filter(|job| job.id != *id).collect()
}
