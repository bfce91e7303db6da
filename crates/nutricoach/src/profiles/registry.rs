use serde::{Deserialize, Serialize};

use super::domain::Role;

/// Closed set of profile fields tracked for completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FirstName,
    LastName,
    BirthDate,
    Gender,
    Email,
    Phone,
    Address,
    City,
    LicenseNumber,
    Specialty,
    YearsOfExperience,
    Education,
    Biography,
    ConsultationFee,
    Height,
    Weight,
    Allergies,
    MedicalConditions,
    DietaryRestrictions,
    Medications,
    ActivityLevel,
    HealthGoals,
    MealPreferences,
    AcceptingNewPatients,
    Languages,
    PreferredContactChannel,
}

impl FieldName {
    /// Stable wire identifier matching the serde rename.
    pub const fn key(self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::BirthDate => "birth_date",
            FieldName::Gender => "gender",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Address => "address",
            FieldName::City => "city",
            FieldName::LicenseNumber => "license_number",
            FieldName::Specialty => "specialty",
            FieldName::YearsOfExperience => "years_of_experience",
            FieldName::Education => "education",
            FieldName::Biography => "biography",
            FieldName::ConsultationFee => "consultation_fee",
            FieldName::Height => "height",
            FieldName::Weight => "weight",
            FieldName::Allergies => "allergies",
            FieldName::MedicalConditions => "medical_conditions",
            FieldName::DietaryRestrictions => "dietary_restrictions",
            FieldName::Medications => "medications",
            FieldName::ActivityLevel => "activity_level",
            FieldName::HealthGoals => "health_goals",
            FieldName::MealPreferences => "meal_preferences",
            FieldName::AcceptingNewPatients => "accepting_new_patients",
            FieldName::Languages => "languages",
            FieldName::PreferredContactChannel => "preferred_contact_channel",
        }
    }

    /// Human-readable label used in recommendations and onboarding prompts.
    pub const fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "first name",
            FieldName::LastName => "last name",
            FieldName::BirthDate => "birth date",
            FieldName::Gender => "gender",
            FieldName::Email => "email address",
            FieldName::Phone => "phone number",
            FieldName::Address => "street address",
            FieldName::City => "city",
            FieldName::LicenseNumber => "license number",
            FieldName::Specialty => "specialty",
            FieldName::YearsOfExperience => "years of experience",
            FieldName::Education => "education",
            FieldName::Biography => "professional biography",
            FieldName::ConsultationFee => "consultation fee",
            FieldName::Height => "height",
            FieldName::Weight => "weight",
            FieldName::Allergies => "allergies",
            FieldName::MedicalConditions => "medical conditions",
            FieldName::DietaryRestrictions => "dietary restrictions",
            FieldName::Medications => "medications",
            FieldName::ActivityLevel => "activity level",
            FieldName::HealthGoals => "health goals",
            FieldName::MealPreferences => "meal preferences",
            FieldName::AcceptingNewPatients => "availability for new patients",
            FieldName::Languages => "languages",
            FieldName::PreferredContactChannel => "preferred contact channel",
        }
    }
}

/// Subject-area grouping used for breakdown reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Basic,
    Professional,
    Medical,
    Contact,
    Preferences,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Basic => "Basic information",
            Category::Professional => "Professional credentials",
            Category::Medical => "Medical background",
            Category::Contact => "Contact details",
            Category::Preferences => "Preferences",
        }
    }
}

/// Importance tier controlling a field's weight in the completion score.
/// Ordering matters: critical outranks important outranks optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Critical,
    Important,
    Optional,
}

impl Tier {
    pub const fn label(self) -> &'static str {
        match self {
            Tier::Critical => "critical",
            Tier::Important => "important",
            Tier::Optional => "optional",
        }
    }
}

/// Which roles a field counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    pub nutritionist: bool,
    pub patient: bool,
}

impl RoleSet {
    pub const fn both() -> Self {
        Self {
            nutritionist: true,
            patient: true,
        }
    }

    pub const fn nutritionist_only() -> Self {
        Self {
            nutritionist: true,
            patient: false,
        }
    }

    pub const fn patient_only() -> Self {
        Self {
            nutritionist: false,
            patient: true,
        }
    }

    pub const fn applies_to(self, role: Role) -> bool {
        match role {
            Role::Nutritionist => self.nutritionist,
            Role::Patient => self.patient,
        }
    }

    const fn is_empty(self) -> bool {
        !self.nutritionist && !self.patient
    }
}

/// Static metadata for one profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: FieldName,
    pub category: Category,
    pub tier: Tier,
    pub roles: RoleSet,
}

const fn field(name: FieldName, category: Category, tier: Tier, roles: RoleSet) -> FieldDefinition {
    FieldDefinition {
        name,
        category,
        tier,
        roles,
    }
}

/// Declaration order here is the order missing fields and onboarding steps
/// are reported in, so it is part of the public contract.
const STANDARD_FIELDS: &[FieldDefinition] = &[
    field(FieldName::FirstName, Category::Basic, Tier::Critical, RoleSet::both()),
    field(FieldName::LastName, Category::Basic, Tier::Critical, RoleSet::both()),
    field(FieldName::BirthDate, Category::Basic, Tier::Important, RoleSet::both()),
    field(FieldName::Gender, Category::Basic, Tier::Optional, RoleSet::both()),
    field(FieldName::Email, Category::Contact, Tier::Critical, RoleSet::both()),
    field(FieldName::Phone, Category::Contact, Tier::Important, RoleSet::both()),
    field(FieldName::Address, Category::Contact, Tier::Optional, RoleSet::both()),
    field(FieldName::City, Category::Contact, Tier::Optional, RoleSet::both()),
    field(
        FieldName::LicenseNumber,
        Category::Professional,
        Tier::Critical,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::Specialty,
        Category::Professional,
        Tier::Critical,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::YearsOfExperience,
        Category::Professional,
        Tier::Important,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::Education,
        Category::Professional,
        Tier::Important,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::Biography,
        Category::Professional,
        Tier::Important,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::ConsultationFee,
        Category::Professional,
        Tier::Optional,
        RoleSet::nutritionist_only(),
    ),
    field(FieldName::Height, Category::Medical, Tier::Critical, RoleSet::patient_only()),
    field(FieldName::Weight, Category::Medical, Tier::Critical, RoleSet::patient_only()),
    field(FieldName::Allergies, Category::Medical, Tier::Critical, RoleSet::patient_only()),
    field(
        FieldName::MedicalConditions,
        Category::Medical,
        Tier::Important,
        RoleSet::patient_only(),
    ),
    field(
        FieldName::DietaryRestrictions,
        Category::Medical,
        Tier::Important,
        RoleSet::patient_only(),
    ),
    field(
        FieldName::Medications,
        Category::Medical,
        Tier::Optional,
        RoleSet::patient_only(),
    ),
    field(
        FieldName::ActivityLevel,
        Category::Preferences,
        Tier::Important,
        RoleSet::patient_only(),
    ),
    field(
        FieldName::HealthGoals,
        Category::Preferences,
        Tier::Important,
        RoleSet::patient_only(),
    ),
    field(
        FieldName::MealPreferences,
        Category::Preferences,
        Tier::Optional,
        RoleSet::patient_only(),
    ),
    field(
        FieldName::AcceptingNewPatients,
        Category::Preferences,
        Tier::Important,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::Languages,
        Category::Preferences,
        Tier::Optional,
        RoleSet::nutritionist_only(),
    ),
    field(
        FieldName::PreferredContactChannel,
        Category::Preferences,
        Tier::Optional,
        RoleSet::both(),
    ),
];

/// Authoritative, declaration-ordered list of fields and their metadata.
/// Read-only after construction, so it is safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRegistry {
    fields: Vec<FieldDefinition>,
}

impl FieldRegistry {
    /// The platform's built-in field set.
    pub fn standard() -> Self {
        Self {
            fields: STANDARD_FIELDS.to_vec(),
        }
    }

    /// Build a custom registry, rejecting malformed definitions up front.
    /// A bad registry is a deployment defect, not a runtime condition.
    pub fn from_fields(fields: Vec<FieldDefinition>) -> Result<Self, RegistryError> {
        if fields.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (index, definition) in fields.iter().enumerate() {
            if definition.roles.is_empty() {
                return Err(RegistryError::NoApplicableRole(definition.name));
            }
            if fields[..index]
                .iter()
                .any(|earlier| earlier.name == definition.name)
            {
                return Err(RegistryError::DuplicateField(definition.name));
            }
        }

        Ok(Self { fields })
    }

    /// All fields applicable to `role`, in declaration order.
    pub fn fields_for_role(&self, role: Role) -> impl Iterator<Item = &FieldDefinition> {
        self.fields
            .iter()
            .filter(move |definition| definition.roles.applies_to(role))
    }

    /// Fields in one category applicable to `role`, in declaration order.
    pub fn fields_for_category(
        &self,
        category: Category,
        role: Role,
    ) -> impl Iterator<Item = &FieldDefinition> {
        self.fields_for_role(role)
            .filter(move |definition| definition.category == category)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Raised when a registry definition is malformed. Never caught inside the
/// engine; surfaces loudly so misconfiguration is found in testing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("field registry must declare at least one field")]
    Empty,
    #[error("field '{}' is declared more than once", .0.key())]
    DuplicateField(FieldName),
    #[error("field '{}' is applicable to no role", .0.key())]
    NoApplicableRole(FieldName),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_covers_both_roles() {
        let registry = FieldRegistry::standard();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), STANDARD_FIELDS.len());
        assert!(registry.fields_for_role(Role::Patient).count() > 0);
        assert!(registry.fields_for_role(Role::Nutritionist).count() > 0);
    }

    #[test]
    fn medical_category_is_patient_only() {
        let registry = FieldRegistry::standard();
        assert_eq!(
            registry
                .fields_for_category(Category::Medical, Role::Nutritionist)
                .count(),
            0
        );
        assert!(
            registry
                .fields_for_category(Category::Medical, Role::Patient)
                .count()
                > 0
        );
    }

    #[test]
    fn role_filter_preserves_declaration_order() {
        let registry = FieldRegistry::standard();
        let names: Vec<FieldName> = registry
            .fields_for_role(Role::Patient)
            .map(|definition| definition.name)
            .collect();
        assert_eq!(names[0], FieldName::FirstName);
        assert_eq!(names[1], FieldName::LastName);
        let height_at = names.iter().position(|name| *name == FieldName::Height);
        let weight_at = names.iter().position(|name| *name == FieldName::Weight);
        assert!(height_at < weight_at);
    }

    #[test]
    fn custom_registry_rejects_duplicates() {
        let fields = vec![
            field(FieldName::Email, Category::Contact, Tier::Critical, RoleSet::both()),
            field(FieldName::Email, Category::Contact, Tier::Optional, RoleSet::both()),
        ];
        assert_eq!(
            FieldRegistry::from_fields(fields),
            Err(RegistryError::DuplicateField(FieldName::Email))
        );
    }

    #[test]
    fn custom_registry_rejects_empty_and_unassigned() {
        assert_eq!(FieldRegistry::from_fields(Vec::new()), Err(RegistryError::Empty));

        let orphan = FieldDefinition {
            name: FieldName::Gender,
            category: Category::Basic,
            tier: Tier::Optional,
            roles: RoleSet {
                nutritionist: false,
                patient: false,
            },
        };
        assert_eq!(
            FieldRegistry::from_fields(vec![orphan]),
            Err(RegistryError::NoApplicableRole(FieldName::Gender))
        );
    }
}
