use std::sync::Arc;

use super::common::{
    build_service, complete_patient, empty_patient, engine, names_only_patient,
    MemoryNotifier, UnavailableRepository,
};
use crate::profiles::completion::CompletionLevel;
use crate::profiles::registry::FieldName;
use crate::profiles::repository::RepositoryError;
use crate::profiles::service::{ProfileService, ProfileServiceError};

#[test]
fn submit_assigns_an_id_and_scores_immediately() {
    let (service, repository, _) = build_service();

    let record = service.submit(names_only_patient()).expect("submit");

    assert!(record.profile_id.0.starts_with("prof-"));
    let report = record.last_report.as_ref().expect("initial report");
    assert_eq!(report.percentage, 17);

    let stored = repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .get(&record.profile_id)
        .cloned()
        .expect("record persisted");
    assert_eq!(stored.profile, record.profile);
}

#[test]
fn submit_assigns_distinct_ids() {
    let (service, _, _) = build_service();

    let first = service.submit(empty_patient()).expect("first submit");
    let second = service.submit(empty_patient()).expect("second submit");

    assert_ne!(first.profile_id, second.profile_id);
}

#[test]
fn update_rescored_report_is_persisted() {
    let (service, _, _) = build_service();
    let record = service.submit(names_only_patient()).expect("submit");

    let report = service
        .update(&record.profile_id, complete_patient())
        .expect("update");
    assert_eq!(report.percentage, 100);

    let fetched = service.get(&record.profile_id).expect("get");
    assert_eq!(fetched.profile, complete_patient());
    assert_eq!(
        fetched.last_report.map(|report| report.percentage),
        Some(100)
    );
}

#[test]
fn completing_a_profile_publishes_one_milestone_alert() {
    let (service, _, notifier) = build_service();
    let record = service.submit(names_only_patient()).expect("submit");

    service
        .update(&record.profile_id, complete_patient())
        .expect("first update");
    service
        .update(&record.profile_id, complete_patient())
        .expect("second update");

    let events = notifier.events();
    assert_eq!(events.len(), 1, "a save at excellent stays quiet");
    assert_eq!(events[0].template, "profile_complete");
    assert_eq!(events[0].profile_id, record.profile_id);
    assert_eq!(events[0].details.get("percentage"), Some(&"100".to_string()));
}

#[test]
fn dropping_below_excellent_rearms_the_milestone() {
    let (service, _, notifier) = build_service();
    let record = service.submit(complete_patient()).expect("submit");

    // Submitted already excellent, so the first update back to excellent
    // after a regression is the next transition.
    service
        .update(&record.profile_id, names_only_patient())
        .expect("regress");
    service
        .update(&record.profile_id, complete_patient())
        .expect("recover");

    assert_eq!(notifier.events().len(), 1);
}

#[test]
fn update_of_unknown_profile_is_not_found() {
    let (service, _, _) = build_service();

    let result = service.update(
        &crate::profiles::domain::ProfileId("prof-missing".to_string()),
        complete_patient(),
    );

    assert!(matches!(
        result,
        Err(ProfileServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn repository_outage_surfaces_as_service_error() {
    let service = ProfileService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
        engine(),
    );

    let result = service.submit(empty_patient());
    assert!(matches!(
        result,
        Err(ProfileServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn onboarding_orders_critical_steps_first() {
    let (service, _, _) = build_service();
    let record = service.submit(names_only_patient()).expect("submit");

    let steps = service.onboarding(&record.profile_id).expect("onboarding");

    assert_eq!(steps[0].field, FieldName::Email);
    assert_eq!(steps[0].form_section, "Contact details");
    assert!(steps[0].prompt.contains("email address"));

    let first_important = steps
        .iter()
        .position(|step| step.field == FieldName::BirthDate)
        .expect("birth date step present");
    let last_critical = steps
        .iter()
        .position(|step| step.field == FieldName::Allergies)
        .expect("allergies step present");
    assert!(last_critical < first_important);
}

#[test]
fn onboarding_is_empty_for_a_complete_profile() {
    let (service, _, _) = build_service();
    let record = service.submit(complete_patient()).expect("submit");

    let steps = service.onboarding(&record.profile_id).expect("onboarding");
    assert!(steps.is_empty());

    let report = service.completion(&record.profile_id).expect("completion");
    assert_eq!(report.level, CompletionLevel::Excellent);
}

#[test]
fn progress_reports_distance_to_next_band() {
    let (service, _, _) = build_service();
    let record = service.submit(names_only_patient()).expect("submit");

    let progress = service.progress(&record.profile_id).expect("progress");
    assert_eq!(progress.current, 17);
    assert_eq!(progress.target, 50);
    assert_eq!(progress.remaining, 33);
}
