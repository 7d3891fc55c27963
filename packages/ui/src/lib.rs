//! This crate contains all shared UI for the workspace.
//!
//! Pages expect a [`storage::Storage`] in context; the platform entry points
//! provide one with `use_context_provider`.

// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

mod banner;
pub use banner::{ErrorBanner, NoticeBanner};

mod footer;
pub use footer::Footer;

mod job_card;
pub use job_card::JobCard;

mod navbar;
pub use navbar::Navbar;

mod slot_editor;
pub use slot_editor::SlotEditor;

pub mod provider;
pub mod seeker;
