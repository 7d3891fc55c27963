//! Job repository. The whole collection is stored newest-first under one key.

use shift_core::{Job, JobId, form::JobDraft, remove_job};
use storage::Storage;

use super::keys;
use crate::DbError;

/// Repository for job persistence operations.
pub struct JobRepository<'a> {
    storage: &'a Storage,
}

impl<'a> JobRepository<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All readable jobs, newest first. Records that fail to decode are
    /// skipped, and dropped from the store on the next write.
    pub fn list(&self) -> Vec<Job> {
        self.storage.read_list(keys::JOBS)
    }

    /// Replace the whole collection.
    pub fn save_all(&self, jobs: &[Job]) -> Result<(), DbError> {
        self.storage.put_json_value(keys::JOBS, &jobs)?;
        Ok(())
    }

    /// Build a job from `draft` under a fresh ID and put it first.
    pub fn publish(&self, draft: JobDraft) -> Result<Job, DbError> {
        let mut jobs = self.list();
        let id = JobId::fresh(jobs.iter().map(|job| &job.id));
        let job = draft.into_job(id)?;

        jobs.insert(0, job.clone());
        self.save_all(&jobs)?;
        Ok(job)
    }

    /// Remove the job with `id` and return what is left.
    ///
    /// Applications for it stay in the log.
    pub fn delete(&self, id: &JobId) -> Result<Vec<Job>, DbError> {
        let remaining = remove_job(self.list(), id);
        self.save_all(&remaining)?;
        Ok(remaining)
    }
}
