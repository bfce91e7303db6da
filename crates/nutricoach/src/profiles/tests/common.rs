use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::profiles::completion::{CompletionConfig, CompletionEngine};
use crate::profiles::domain::{
    ActivityLevel, CoachingPreferences, ContactChannel, ContactDetails, IdentityDetails,
    MedicalBackground, NutritionistProfile, PatientProfile, PracticePreferences,
    ProfessionalCredentials, ProfileData, ProfileId, Role,
};
use crate::profiles::registry::FieldRegistry;
use crate::profiles::repository::{
    EngagementNotifier, MilestoneAlert, NotificationError, ProfileRecord, ProfileRepository,
    RepositoryError,
};
use crate::profiles::router::profile_router;
use crate::profiles::service::ProfileService;

pub(super) fn completion_config() -> CompletionConfig {
    CompletionConfig::default()
}

pub(super) fn engine() -> CompletionEngine {
    CompletionEngine::new(FieldRegistry::standard(), completion_config())
}

fn identity() -> IdentityDetails {
    IdentityDetails {
        first_name: Some("Maya".to_string()),
        last_name: Some("Alvarez".to_string()),
        birth_date: Some(NaiveDate::from_ymd_opt(1990, 6, 3).expect("valid date")),
        gender: Some("female".to_string()),
    }
}

fn contact() -> ContactDetails {
    ContactDetails {
        email: Some("maya@example.com".to_string()),
        phone: Some("+1-515-555-0117".to_string()),
        address: Some("12 Lindale Ave".to_string()),
        city: Some("Des Moines".to_string()),
    }
}

/// Every applicable patient field filled in.
pub(super) fn complete_patient() -> ProfileData {
    ProfileData::Patient(PatientProfile {
        identity: identity(),
        contact: contact(),
        medical: MedicalBackground {
            height_cm: Some(168.0),
            weight_kg: Some(61.5),
            allergies: vec!["peanuts".to_string()],
            medical_conditions: vec!["hypothyroidism".to_string()],
            dietary_restrictions: vec!["vegetarian".to_string()],
            medications: vec!["levothyroxine".to_string()],
        },
        preferences: CoachingPreferences {
            activity_level: Some(ActivityLevel::Moderate),
            health_goals: vec!["maintain weight".to_string()],
            meal_preferences: vec!["mediterranean".to_string()],
            preferred_contact_channel: Some(ContactChannel::Email),
        },
    })
}

/// A brand-new patient account: only first and last name saved.
pub(super) fn names_only_patient() -> ProfileData {
    ProfileData::Patient(PatientProfile {
        identity: IdentityDetails {
            first_name: Some("Maya".to_string()),
            last_name: Some("Alvarez".to_string()),
            birth_date: None,
            gender: None,
        },
        ..PatientProfile::default()
    })
}

pub(super) fn empty_patient() -> ProfileData {
    ProfileData::empty(Role::Patient)
}

/// Every applicable nutritionist field filled in.
pub(super) fn complete_nutritionist() -> ProfileData {
    ProfileData::Nutritionist(NutritionistProfile {
        identity: identity(),
        contact: contact(),
        credentials: ProfessionalCredentials {
            license_number: Some("RD-48213".to_string()),
            specialty: Some("sports nutrition".to_string()),
            years_of_experience: Some(9),
            education: Some("MS Dietetics, Iowa State".to_string()),
            consultation_fee: Some(90),
            biography: Some("Performance-focused dietitian.".to_string()),
        },
        practice: PracticePreferences {
            accepting_new_patients: Some(true),
            languages: vec!["English".to_string(), "Spanish".to_string()],
            preferred_contact_channel: Some(ContactChannel::Phone),
        },
    })
}

/// Nutritionist with all professional credentials present but nothing else.
pub(super) fn credentials_only_nutritionist() -> ProfileData {
    ProfileData::Nutritionist(NutritionistProfile {
        credentials: ProfessionalCredentials {
            license_number: Some("RD-48213".to_string()),
            specialty: Some("sports nutrition".to_string()),
            years_of_experience: Some(9),
            education: Some("MS Dietetics, Iowa State".to_string()),
            consultation_fee: Some(90),
            biography: Some("Performance-focused dietitian.".to_string()),
        },
        ..NutritionistProfile::default()
    })
}

pub(super) fn build_service() -> (
    ProfileService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = ProfileService::new(repository.clone(), notifier.clone(), engine());
    (service, repository, notifier)
}

pub(super) fn profile_router_with_service(
    service: ProfileService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    profile_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProfileId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryRepository {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<MilestoneAlert>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<MilestoneAlert> {
        self.events.lock().expect("notifier mutex poisoned").clone()
    }
}

impl EngagementNotifier for MemoryNotifier {
    fn publish(&self, alert: MilestoneAlert) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notifier mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn insert(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProfileRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
