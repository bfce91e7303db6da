use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::registry::FieldName;

/// The two account roles the platform serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Nutritionist,
    Patient,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Nutritionist => "nutritionist",
            Role::Patient => "patient",
        }
    }
}

/// Identifier wrapper for stored profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileId(pub String);

/// Name and demographic basics collected from both roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// Reachability details shared by both roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactDetails {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

/// Practitioner credentials shown on the public nutritionist card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalCredentials {
    pub license_number: Option<String>,
    pub specialty: Option<String>,
    pub years_of_experience: Option<u8>,
    pub education: Option<String>,
    pub consultation_fee: Option<u32>,
    pub biography: Option<String>,
}

/// How a practitioner runs their practice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticePreferences {
    pub accepting_new_patients: Option<bool>,
    pub languages: Vec<String>,
    pub preferred_contact_channel: Option<ContactChannel>,
}

/// Clinical background a coach needs before drafting a meal plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalBackground {
    pub height_cm: Option<f32>,
    pub weight_kg: Option<f32>,
    pub allergies: Vec<String>,
    pub medical_conditions: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub medications: Vec<String>,
}

/// Lifestyle and goal inputs that personalize patient coaching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachingPreferences {
    pub activity_level: Option<ActivityLevel>,
    pub health_goals: Vec<String>,
    pub meal_preferences: Vec<String>,
    pub preferred_contact_channel: Option<ContactChannel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChannel {
    Email,
    Phone,
    Sms,
}

impl ContactChannel {
    pub const fn label(self) -> &'static str {
        match self {
            ContactChannel::Email => "email",
            ContactChannel::Phone => "phone",
            ContactChannel::Sms => "sms",
        }
    }
}

/// Full nutritionist profile as captured by the account forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionistProfile {
    pub identity: IdentityDetails,
    pub contact: ContactDetails,
    pub credentials: ProfessionalCredentials,
    pub practice: PracticePreferences,
}

/// Full patient profile as captured by the account forms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientProfile {
    pub identity: IdentityDetails,
    pub contact: ContactDetails,
    pub medical: MedicalBackground,
    pub preferences: CoachingPreferences,
}

/// Profile data discriminated by role so field lookup stays exhaustive
/// per shape instead of duck-typing one loose map for both audiences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ProfileData {
    Nutritionist(NutritionistProfile),
    Patient(PatientProfile),
}

impl ProfileData {
    pub const fn role(&self) -> Role {
        match self {
            ProfileData::Nutritionist(_) => Role::Nutritionist,
            ProfileData::Patient(_) => Role::Patient,
        }
    }

    /// A blank profile for the role, used when a new account has saved
    /// nothing yet.
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Nutritionist => ProfileData::Nutritionist(NutritionistProfile::default()),
            Role::Patient => ProfileData::Patient(PatientProfile::default()),
        }
    }

    /// Look up the stored value for a registry field. Fields that do not
    /// exist on this role's shape resolve to [`FieldValue::Missing`].
    pub fn value(&self, field: FieldName) -> FieldValue<'_> {
        match self {
            ProfileData::Nutritionist(profile) => profile.value(field),
            ProfileData::Patient(profile) => profile.value(field),
        }
    }
}

impl NutritionistProfile {
    pub fn value(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::FirstName => text(&self.identity.first_name),
            FieldName::LastName => text(&self.identity.last_name),
            FieldName::BirthDate => date(&self.identity.birth_date),
            FieldName::Gender => text(&self.identity.gender),
            FieldName::Email => text(&self.contact.email),
            FieldName::Phone => text(&self.contact.phone),
            FieldName::Address => text(&self.contact.address),
            FieldName::City => text(&self.contact.city),
            FieldName::LicenseNumber => text(&self.credentials.license_number),
            FieldName::Specialty => text(&self.credentials.specialty),
            FieldName::YearsOfExperience => self
                .credentials
                .years_of_experience
                .map_or(FieldValue::Missing, |years| {
                    FieldValue::Number(f64::from(years))
                }),
            FieldName::Education => text(&self.credentials.education),
            FieldName::Biography => text(&self.credentials.biography),
            FieldName::ConsultationFee => self
                .credentials
                .consultation_fee
                .map_or(FieldValue::Missing, |fee| FieldValue::Number(f64::from(fee))),
            FieldName::AcceptingNewPatients => self
                .practice
                .accepting_new_patients
                .map_or(FieldValue::Missing, FieldValue::Flag),
            FieldName::Languages => FieldValue::List(&self.practice.languages),
            FieldName::PreferredContactChannel => self
                .practice
                .preferred_contact_channel
                .map_or(FieldValue::Missing, |channel| {
                    FieldValue::Text(channel.label())
                }),
            FieldName::Height
            | FieldName::Weight
            | FieldName::Allergies
            | FieldName::MedicalConditions
            | FieldName::DietaryRestrictions
            | FieldName::Medications
            | FieldName::ActivityLevel
            | FieldName::HealthGoals
            | FieldName::MealPreferences => FieldValue::Missing,
        }
    }
}

impl PatientProfile {
    pub fn value(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::FirstName => text(&self.identity.first_name),
            FieldName::LastName => text(&self.identity.last_name),
            FieldName::BirthDate => date(&self.identity.birth_date),
            FieldName::Gender => text(&self.identity.gender),
            FieldName::Email => text(&self.contact.email),
            FieldName::Phone => text(&self.contact.phone),
            FieldName::Address => text(&self.contact.address),
            FieldName::City => text(&self.contact.city),
            FieldName::Height => self
                .medical
                .height_cm
                .map_or(FieldValue::Missing, |height| {
                    FieldValue::Number(f64::from(height))
                }),
            FieldName::Weight => self
                .medical
                .weight_kg
                .map_or(FieldValue::Missing, |weight| {
                    FieldValue::Number(f64::from(weight))
                }),
            FieldName::Allergies => FieldValue::List(&self.medical.allergies),
            FieldName::MedicalConditions => FieldValue::List(&self.medical.medical_conditions),
            FieldName::DietaryRestrictions => {
                FieldValue::List(&self.medical.dietary_restrictions)
            }
            FieldName::Medications => FieldValue::List(&self.medical.medications),
            FieldName::ActivityLevel => self
                .preferences
                .activity_level
                .map_or(FieldValue::Missing, |level| FieldValue::Text(level.label())),
            FieldName::HealthGoals => FieldValue::List(&self.preferences.health_goals),
            FieldName::MealPreferences => FieldValue::List(&self.preferences.meal_preferences),
            FieldName::PreferredContactChannel => self
                .preferences
                .preferred_contact_channel
                .map_or(FieldValue::Missing, |channel| {
                    FieldValue::Text(channel.label())
                }),
            FieldName::LicenseNumber
            | FieldName::Specialty
            | FieldName::YearsOfExperience
            | FieldName::Education
            | FieldName::Biography
            | FieldName::ConsultationFee
            | FieldName::AcceptingNewPatients
            | FieldName::Languages => FieldValue::Missing,
        }
    }
}

/// A field's stored value, normalized for presence checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
    Flag(bool),
    Date(NaiveDate),
    List(&'a [String]),
}

impl FieldValue<'_> {
    /// The single presence predicate used everywhere completion is scored.
    /// Text counts only when non-blank after trimming; lists only when
    /// non-empty. Numbers, flags, and dates count whenever set, even if the
    /// value is semantically questionable; validation is a separate concern.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Missing => false,
            FieldValue::Text(value) => !value.trim().is_empty(),
            FieldValue::List(values) => !values.is_empty(),
            FieldValue::Number(_) | FieldValue::Flag(_) | FieldValue::Date(_) => true,
        }
    }
}

fn text<'a>(value: &'a Option<String>) -> FieldValue<'a> {
    value.as_deref().map_or(FieldValue::Missing, FieldValue::Text)
}

fn date(value: &Option<NaiveDate>) -> FieldValue<'static> {
    value.map_or(FieldValue::Missing, FieldValue::Date)
}
