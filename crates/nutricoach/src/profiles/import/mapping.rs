use chrono::NaiveDate;

use super::normalizer::{normalize_text, split_list};
use super::parser::RosterRow;
use crate::profiles::domain::{
    ActivityLevel, CoachingPreferences, ContactDetails, IdentityDetails, MedicalBackground,
    PatientProfile,
};

/// Convert a roster row into a patient profile. Unparseable cells map to
/// absent rather than failing the whole import; the completion report will
/// flag them as gaps afterwards, which is exactly what the onboarding flow
/// wants.
pub(crate) fn patient_from_row(row: &RosterRow) -> PatientProfile {
    PatientProfile {
        identity: IdentityDetails {
            first_name: row.first_name.as_deref().and_then(normalize_text),
            last_name: row.last_name.as_deref().and_then(normalize_text),
            birth_date: row.birth_date.as_deref().and_then(parse_birth_date),
            gender: None,
        },
        contact: ContactDetails {
            email: row.email.as_deref().and_then(normalize_text),
            phone: row.phone.as_deref().and_then(normalize_text),
            address: None,
            city: row.city.as_deref().and_then(normalize_text),
        },
        medical: MedicalBackground {
            height_cm: row.height_cm.as_deref().and_then(parse_measurement),
            weight_kg: row.weight_kg.as_deref().and_then(parse_measurement),
            allergies: row.allergies.as_deref().map(split_list).unwrap_or_default(),
            medical_conditions: row
                .medical_conditions
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            dietary_restrictions: row
                .dietary_restrictions
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            medications: row
                .medications
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
        },
        preferences: CoachingPreferences {
            activity_level: row.activity_level.as_deref().and_then(parse_activity_level),
            health_goals: row
                .health_goals
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            meal_preferences: Vec::new(),
            preferred_contact_channel: None,
        },
    }
}

fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%m/%d/%Y"))
        .ok()
}

fn parse_measurement(raw: &str) -> Option<f32> {
    normalize_text(raw)?.parse::<f32>().ok()
}

fn parse_activity_level(raw: &str) -> Option<ActivityLevel> {
    match raw.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
        "sedentary" => Some(ActivityLevel::Sedentary),
        "light" => Some(ActivityLevel::Light),
        "moderate" => Some(ActivityLevel::Moderate),
        "active" => Some(ActivityLevel::Active),
        "very_active" => Some(ActivityLevel::VeryActive),
        _ => None,
    }
}
