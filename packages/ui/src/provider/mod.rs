//! Provider view: job form and the list of published jobs.

mod job_form;
mod provider_page;

pub use job_form::JobForm;
pub use provider_page::ProviderPage;
