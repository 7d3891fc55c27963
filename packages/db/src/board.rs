//! The seeker and provider views over a shared store.
//!
//! Every call re-reads what it needs; nothing is cached between renders.

use chrono::Utc;
use shift_core::form::{JobDraft, ProfileDraft};
use shift_core::{BoardEvent, Job, JobId, JobQuery, SeekerProfile, count_applications, filter_jobs};
use storage::Storage;

use crate::{ApplicationRepository, DbError, JobRepository, ProfileRepository};

fn announce(event: BoardEvent) -> BoardEvent {
    tracing::info!(
        job_id = event.job_id().map(|id| id.as_str()),
        at = %event.timestamp(),
        "{}",
        event.description()
    );
    event
}

/// What the seeker sees: their profile and the jobs that fit it.
#[derive(Clone, Copy)]
pub struct SeekerBoard<'a> {
    storage: &'a Storage,
}

impl<'a> SeekerBoard<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn profile(&self) -> SeekerProfile {
        ProfileRepository::new(self.storage).load()
    }

    /// Validate and save the profile form, replacing the stored profile.
    pub fn save_profile(&self, draft: ProfileDraft) -> Result<BoardEvent, DbError> {
        let profile = draft.into_profile()?;
        ProfileRepository::new(self.storage).save(&profile)?;

        Ok(announce(BoardEvent::ProfileSaved {
            name: profile.name,
            slots: profile.slots.len(),
            timestamp: Utc::now(),
        }))
    }

    /// Stored jobs passing `query` for the stored profile, newest first.
    pub fn visible_jobs(&self, query: &JobQuery) -> Vec<Job> {
        let profile = self.profile();
        let jobs = JobRepository::new(self.storage).list();
        let visible: Vec<Job> = filter_jobs(&jobs, &profile, query)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!("{} of {} jobs visible", visible.len(), jobs.len());
        visible
    }

    /// Record an application for `job` under the profile's name.
    pub fn apply(&self, job: &Job) -> Result<BoardEvent, DbError> {
        let profile = self.profile();
        let application =
            ApplicationRepository::new(self.storage).record(job, profile.display_name())?;

        Ok(announce(BoardEvent::ApplicationSubmitted {
            job_id: application.job_id,
            seeker_name: application.seeker_name,
            timestamp: application.at,
        }))
    }
}

/// A job as the provider sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListing {
    pub job: Job,
    /// Applications referencing this job at the time of listing.
    pub applications: usize,
}

/// What the provider sees: every job with its application count.
#[derive(Clone, Copy)]
pub struct ProviderBoard<'a> {
    storage: &'a Storage,
}

impl<'a> ProviderBoard<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All jobs newest first, each with its current application count.
    pub fn listings(&self) -> Vec<JobListing> {
        let applications = ApplicationRepository::new(self.storage).list();
        JobRepository::new(self.storage)
            .list()
            .into_iter()
            .map(|job| JobListing {
                applications: count_applications(&applications, &job.id),
                job,
            })
            .collect()
    }

    /// Validate the job form and publish it at the top of the list.
    pub fn publish(&self, draft: JobDraft) -> Result<(Job, BoardEvent), DbError> {
        let job = JobRepository::new(self.storage).publish(draft)?;
        let event = announce(BoardEvent::JobPublished {
            job_id: job.id.clone(),
            title: job.title.clone(),
            timestamp: Utc::now(),
        });
        Ok((job, event))
    }

    /// Delete the job; its applications are left in the log.
    pub fn delete(&self, id: &JobId) -> Result<BoardEvent, DbError> {
        JobRepository::new(self.storage).delete(id)?;
        Ok(announce(BoardEvent::JobDeleted {
            job_id: id.clone(),
            timestamp: Utc::now(),
        }))
    }
}
