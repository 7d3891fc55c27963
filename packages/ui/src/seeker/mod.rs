//! Seeker view: profile form and the matching job feed.

mod job_feed;
mod profile_form;
mod seeker_page;

pub use job_feed::JobFeed;
pub use profile_form::ProfileForm;
pub use seeker_page::SeekerPage;
