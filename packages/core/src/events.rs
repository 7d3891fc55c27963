//! Events raised by user actions on the seeker and provider boards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::JobId;

/// Something a board did to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoardEvent {
    /// The seeker saved their profile and availability.
    ProfileSaved {
        name: String,
        slots: usize,
        timestamp: DateTime<Utc>,
    },
    /// A provider published a job.
    JobPublished {
        job_id: JobId,
        title: String,
        timestamp: DateTime<Utc>,
    },
    /// A provider deleted a job.
    JobDeleted {
        job_id: JobId,
        timestamp: DateTime<Utc>,
    },
    /// A seeker applied to a job.
    ApplicationSubmitted {
        job_id: JobId,
        seeker_name: String,
        timestamp: DateTime<Utc>,
    },
}

impl BoardEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            BoardEvent::ProfileSaved { timestamp, .. } => *timestamp,
            BoardEvent::JobPublished { timestamp, .. } => *timestamp,
            BoardEvent::JobDeleted { timestamp, .. } => *timestamp,
            BoardEvent::ApplicationSubmitted { timestamp, .. } => *timestamp,
        }
    }

    /// Get the job ID associated with this event, if any.
    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            BoardEvent::JobPublished { job_id, .. } => Some(job_id),
            BoardEvent::JobDeleted { job_id, .. } => Some(job_id),
            BoardEvent::ApplicationSubmitted { job_id, .. } => Some(job_id),
            BoardEvent::ProfileSaved { .. } => None,
        }
    }

    /// Short description for logging.
    pub fn description(&self) -> String {
        match self {
            BoardEvent::ProfileSaved { name, slots, .. } => {
                format!("Profile '{}' saved with {} slot(s)", name, slots)
            }
            BoardEvent::JobPublished { job_id, title, .. } => {
                format!("Job {} '{}' published", job_id, title)
            }
            BoardEvent::JobDeleted { job_id, .. } => format!("Job {} deleted", job_id),
            BoardEvent::ApplicationSubmitted {
                job_id,
                seeker_name,
                ..
            } => format!("{} applied to job {}", seeker_name, job_id),
        }
    }

    /// Confirmation shown to the user.
    pub fn notice(&self) -> &'static str {
        match self {
            BoardEvent::ProfileSaved { .. } => "Availability saved!",
            BoardEvent::JobPublished { .. } => "Job published!",
            BoardEvent::JobDeleted { .. } => "Job deleted.",
            BoardEvent::ApplicationSubmitted { .. } => "Application submitted!",
        }
    }
}
