//! Persistence and view logic for the matching board.
//!
//! Repositories read and write the three stored records through an injected
//! [`storage::Storage`]; the boards combine them with the matching engine
//! for the seeker and provider views.

mod board;
pub mod repositories;

pub use board::{JobListing, ProviderBoard, SeekerBoard};
pub use repositories::{ApplicationRepository, JobRepository, ProfileRepository, keys};

use shift_core::SlotError;
use storage::StorageError;
use thiserror::Error;

/// Errors from board and repository operations.
///
/// Reads never fail; only writes and form input do.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Invalid slot: {0}")]
    InvalidSlot(#[from] SlotError),
}
