//! Patient and nutritionist profile management with completion scoring.
//!
//! The completion engine is a pure, synchronous scoring pass over the
//! field registry; everything stateful (repository, memoizing store,
//! engagement hooks) sits around it, never inside it.

pub mod completion;
pub mod domain;
pub mod import;
pub mod registry;
pub mod repository;
pub mod router;
pub mod service;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use completion::{
    generate_recommendations, CompletionConfig, CompletionEngine, CompletionLevel,
    CompletionReport, LevelProgress, MissingField, MissingFields,
};
pub use domain::{
    ActivityLevel, CoachingPreferences, ContactChannel, ContactDetails, FieldValue,
    IdentityDetails, MedicalBackground, NutritionistProfile, PatientProfile,
    PracticePreferences, ProfessionalCredentials, ProfileData, ProfileId, Role,
};
pub use import::{PatientRosterImporter, ProfileImportError};
pub use registry::{
    Category, FieldDefinition, FieldName, FieldRegistry, RegistryError, RoleSet, Tier,
};
pub use repository::{
    EngagementNotifier, MilestoneAlert, NotificationError, ProfileRecord, ProfileRepository,
    RepositoryError,
};
pub use router::profile_router;
pub use service::{onboarding_steps, OnboardingStep, ProfileService, ProfileServiceError};
pub use store::CompletionStore;
pub use views::{category_progress, CategoryProgressEntry, ProfileSummaryView};
