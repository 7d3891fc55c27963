//! Application log repository. Append-only, never deduplicated.

use shift_core::{Application, Job};
use storage::Storage;

use super::keys;
use crate::DbError;

pub struct ApplicationRepository<'a> {
    storage: &'a Storage,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The whole log, oldest first.
    pub fn list(&self) -> Vec<Application> {
        self.storage.read_list(keys::APPLICATIONS)
    }

    /// Append an application for `job`.
    ///
    /// Does not check whether the job still exists, whether this seeker
    /// already applied, or how many seats are left.
    pub fn record(&self, job: &Job, seeker_name: &str) -> Result<Application, DbError> {
        let application = Application::new(job, seeker_name);
        self.append(application.clone())?;
        Ok(application)
    }

    pub fn append(&self, application: Application) -> Result<(), DbError> {
        let mut log = self.list();
        log.push(application);
        self.storage.put_json_value(keys::APPLICATIONS, &log)?;
        Ok(())
    }
}
