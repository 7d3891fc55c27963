//! Repository implementations for the stored records.

mod application_repo;
mod job_repo;
mod profile_repo;

pub use application_repo::ApplicationRepository;
pub use job_repo::JobRepository;
pub use profile_repo::ProfileRepository;

/// Storage keys, one whole JSON value per key.
pub mod keys {
    pub const SEEKER_PROFILE: &str = "seekerProfile";
    pub const JOBS: &str = "jobs";
    pub const APPLICATIONS: &str = "applications";
}
