//! Patient roster import for practices migrating onto the platform from a
//! spreadsheet export.

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::profiles::domain::PatientProfile;

#[derive(Debug)]
pub enum ProfileImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ProfileImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            ProfileImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for ProfileImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileImportError::Io(err) => Some(err),
            ProfileImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ProfileImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProfileImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct PatientRosterImporter;

impl PatientRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PatientProfile>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PatientProfile>, ProfileImportError> {
        let rows = parser::parse_rows(reader)?;
        Ok(rows.iter().map(mapping::patient_from_row).collect())
    }
}
