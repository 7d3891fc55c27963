//! The seeker's locally stored profile.

use serde::{Deserialize, Serialize};

use crate::AvailabilitySlot;

/// Name used on applications when the seeker has not filled in a name.
pub const ANONYMOUS_SEEKER: &str = "Student";

/// One seeker per store; saving replaces the whole profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekerProfile {
    pub name: String,
    pub location: String,
    /// Free text, not used for matching.
    pub skills: String,
    pub slots: Vec<AvailabilitySlot>,
}

impl SeekerProfile {
    /// The name to put on an application.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { ANONYMOUS_SEEKER } else { name }
    }
}
