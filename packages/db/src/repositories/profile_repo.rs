//! Seeker profile repository.

use shift_core::SeekerProfile;
use storage::Storage;

use super::keys;
use crate::DbError;

/// Repository for the single seeker profile.
pub struct ProfileRepository<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The saved profile, or an empty one.
    pub fn load(&self) -> SeekerProfile {
        self.storage
            .read_or_default(keys::SEEKER_PROFILE, SeekerProfile::default)
    }

    /// Replace the saved profile.
    pub fn save(&self, profile: &SeekerProfile) -> Result<(), DbError> {
        self.storage.put_json_value(keys::SEEKER_PROFILE, profile)?;
        Ok(())
    }
}
