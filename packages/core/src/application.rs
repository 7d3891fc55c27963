//! Applications: the append-only log of seekers expressing interest in jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Job, JobId};

/// One application entry.
///
/// `job_id` is a plain reference: the job may since have been deleted, in
/// which case the entry simply dangles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub job_id: JobId,
    pub seeker_name: String,
    /// Submission time, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub at: DateTime<Utc>,
}

impl Application {
    /// Record an application for `job` submitted now.
    pub fn new(job: &Job, seeker_name: impl Into<String>) -> Self {
        Self::at(job.id.clone(), seeker_name, Utc::now())
    }

    pub fn at(job_id: JobId, seeker_name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            job_id,
            seeker_name: seeker_name.into(),
            at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stores_camel_case_fields_and_epoch_millis() {
        let id = JobId::new();
        let at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let app = Application::at(id.clone(), "Asha", at);
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jobId": id.to_string(),
                "seekerName": "Asha",
                "at": 1_700_000_000_123i64,
            })
        );
        let back: Application = serde_json::from_value(json).unwrap();
        assert_eq!(back, app);
    }
}
