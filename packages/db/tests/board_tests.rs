#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;

use shift_core::form::ProfileDraft;
use shift_core::{BoardEvent, JobQuery, count_applications};

use db::{ApplicationRepository, DbError, JobRepository, ProviderBoard, SeekerBoard};

use common::{job_draft, setup_storage, slot_row};

fn seeker_draft(name: &str, rows: Vec<shift_core::form::SlotDraft>) -> ProfileDraft {
    ProfileDraft {
        name: name.to_string(),
        location: "Pune".to_string(),
        skills: "".to_string(),
        slots: rows,
    }
}

#[test]
fn test_overlap_decides_visibility() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    let provider = ProviderBoard::new(&storage);
    let seeker = SeekerBoard::new(&storage);

    let (job, _) = provider.publish(job_draft("Shelf Stacker", "", vec![slot_row("Tue", "09:00", "12:00")]))?;

    seeker.save_profile(seeker_draft("Asha", vec![slot_row("Tue", "11:00", "13:00")]))?;
    let visible = seeker.visible_jobs(&JobQuery::default());
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, job.id);

    // Touching the boundary is not enough
    seeker.save_profile(seeker_draft("Asha", vec![slot_row("Tue", "12:00", "13:00")]))?;
    assert!(seeker.visible_jobs(&JobQuery::default()).is_empty());
    Ok(())
}

#[test]
fn test_seeker_filters() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    let provider = ProviderBoard::new(&storage);
    let seeker = SeekerBoard::new(&storage);

    let rows = || vec![slot_row("Sat", "10:00", "14:00")];
    provider.publish(job_draft("Cleaning Assistant", "4", rows()))?;
    provider.publish(job_draft("Dog Walker", "", rows()))?;
    provider.publish(job_draft("Kitchen Cleaner", "12", rows()))?;
    provider.publish(job_draft("Weekday Tutor", "1", vec![slot_row("Mon", "10:00", "14:00")]))?;

    seeker.save_profile(seeker_draft("Asha", vec![slot_row("Sat", "09:00", "11:00")]))?;

    let titles = |query: JobQuery| -> Vec<String> {
        seeker
            .visible_jobs(&query)
            .into_iter()
            .map(|j| j.title)
            .collect()
    };

    assert_eq!(
        titles(JobQuery::default()),
        vec!["Kitchen Cleaner", "Dog Walker", "Cleaning Assistant"]
    );
    assert_eq!(
        titles(JobQuery::new("clean", None)),
        vec!["Kitchen Cleaner", "Cleaning Assistant"]
    );
    assert_eq!(
        titles(JobQuery::new("", Some(5.0))),
        vec!["Dog Walker", "Cleaning Assistant"]
    );
    assert_eq!(
        titles(JobQuery::new("CLEAN", Some(5.0))),
        vec!["Cleaning Assistant"]
    );
    Ok(())
}

#[test]
fn test_seeker_without_profile_sees_nothing() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    ProviderBoard::new(&storage).publish(job_draft("Tutor", "", vec![slot_row("Mon", "09:00", "12:00")]))?;
    assert!(SeekerBoard::new(&storage).visible_jobs(&JobQuery::default()).is_empty());
    Ok(())
}

#[test]
fn test_invalid_profile_is_not_saved() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    let seeker = SeekerBoard::new(&storage);
    seeker.save_profile(seeker_draft("Asha", vec![slot_row("Mon", "09:00", "12:00")]))?;

    let result = seeker.save_profile(seeker_draft("Ravi", vec![slot_row("Mon", "12:00", "09:00")]));
    assert!(matches!(result, Err(DbError::InvalidSlot(_))));
    assert_eq!(seeker.profile().name, "Asha");
    Ok(())
}

#[test]
fn test_apply_records_each_submission() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    let provider = ProviderBoard::new(&storage);
    let seeker = SeekerBoard::new(&storage);

    let (job, _) = provider.publish(job_draft("Tutor", "", vec![slot_row("Mon", "09:00", "12:00")]))?;

    // Blank profile name applies as the fallback name
    let event = seeker.apply(&job)?;
    assert!(matches!(
        &event,
        BoardEvent::ApplicationSubmitted { seeker_name, .. } if seeker_name == "Student"
    ));
    assert_eq!(event.notice(), "Application submitted!");

    seeker.save_profile(seeker_draft("Asha", vec![slot_row("Mon", "09:00", "12:00")]))?;
    seeker.apply(&job)?;
    seeker.apply(&job)?;

    let listings = provider.listings();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].applications, 3);

    // Seats are informational only
    assert_eq!(JobRepository::new(&storage).list()[0].seats, 1);
    Ok(())
}

#[test]
fn test_publish_puts_fresh_job_first() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    let provider = ProviderBoard::new(&storage);

    let (older, _) = provider.publish(job_draft("Cashier", "", vec![slot_row("Mon", "09:00", "12:00")]))?;
    let (newer, event) = provider.publish(job_draft("Tutor", "", vec![slot_row("Tue", "09:00", "12:00")]))?;

    assert_ne!(newer.id, older.id);
    assert_eq!(event.job_id(), Some(&newer.id));
    assert_eq!(event.notice(), "Job published!");

    let listings = provider.listings();
    assert_eq!(listings[0].job.id, newer.id);
    assert_eq!(listings[1].job.id, older.id);
    assert!(listings.iter().all(|l| l.applications == 0));
    Ok(())
}

#[test]
fn test_delete_leaves_applications_in_log() -> Result<(), Box<dyn Error>> {
    let storage = setup_storage();
    let provider = ProviderBoard::new(&storage);
    let seeker = SeekerBoard::new(&storage);

    let (keep, _) = provider.publish(job_draft("Cashier", "", vec![slot_row("Mon", "09:00", "12:00")]))?;
    let (gone, _) = provider.publish(job_draft("Tutor", "", vec![slot_row("Mon", "09:00", "12:00")]))?;
    seeker.apply(&gone)?;
    seeker.apply(&keep)?;

    let event = provider.delete(&gone.id)?;
    assert_eq!(event.job_id(), Some(&gone.id));

    let listings = provider.listings();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].job.id, keep.id);
    assert_eq!(listings[0].applications, 1);

    // The orphaned entry is still countable, just no longer listed
    let apps = ApplicationRepository::new(&storage);
    assert_eq!(apps.list().len(), 2);
    assert_eq!(count_applications(&apps.list(), &gone.id), 1);
    Ok(())
}
