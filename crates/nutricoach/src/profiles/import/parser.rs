use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<RosterRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<RosterRow>().collect()
}

/// One row of the practice's patient spreadsheet export. Column names
/// match the export template; every cell is optional because practices
/// rarely fill the whole sheet.
#[derive(Debug, Deserialize)]
pub(crate) struct RosterRow {
    #[serde(rename = "First Name", default, deserialize_with = "empty_string_as_none")]
    pub(crate) first_name: Option<String>,
    #[serde(rename = "Last Name", default, deserialize_with = "empty_string_as_none")]
    pub(crate) last_name: Option<String>,
    #[serde(rename = "Birth Date", default, deserialize_with = "empty_string_as_none")]
    pub(crate) birth_date: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    pub(crate) email: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    pub(crate) phone: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "empty_string_as_none")]
    pub(crate) city: Option<String>,
    #[serde(rename = "Height (cm)", default, deserialize_with = "empty_string_as_none")]
    pub(crate) height_cm: Option<String>,
    #[serde(rename = "Weight (kg)", default, deserialize_with = "empty_string_as_none")]
    pub(crate) weight_kg: Option<String>,
    #[serde(rename = "Allergies", default, deserialize_with = "empty_string_as_none")]
    pub(crate) allergies: Option<String>,
    #[serde(
        rename = "Medical Conditions",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) medical_conditions: Option<String>,
    #[serde(
        rename = "Dietary Restrictions",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) dietary_restrictions: Option<String>,
    #[serde(rename = "Medications", default, deserialize_with = "empty_string_as_none")]
    pub(crate) medications: Option<String>,
    #[serde(
        rename = "Activity Level",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) activity_level: Option<String>,
    #[serde(rename = "Health Goals", default, deserialize_with = "empty_string_as_none")]
    pub(crate) health_goals: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
