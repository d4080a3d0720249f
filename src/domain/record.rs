// src/domain/record.rs

use serde::{Deserialize, Serialize};

use crate::domain::errors::LedgerError;
use crate::domain::ids::Keyed;
use crate::domain::lenient;

/// One driver's delivery work on the current worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub driver_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub zone: String,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_substitute: bool,
    #[serde(deserialize_with = "lenient::text_list")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub system_packages: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub off_system_packages: u32,
}

impl DeliveryRecord {
    pub fn from_draft(id: String, draft: RecordDraft) -> Self {
        Self {
            id,
            driver_name: draft.driver_name,
            zone: draft.zone,
            is_substitute: draft.is_substitute,
            locations: draft.locations,
            system_packages: draft.system_packages,
            off_system_packages: draft.off_system_packages,
        }
    }

    pub fn total_packages(&self) -> u64 {
        u64::from(self.system_packages) + u64::from(self.off_system_packages)
    }
}

impl Keyed for DeliveryRecord {
    fn key_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

/// Everything a delivery record holds except its id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordDraft {
    pub driver_name: String,
    pub zone: String,
    pub is_substitute: bool,
    pub locations: Vec<String>,
    pub system_packages: u32,
    pub off_system_packages: u32,
}

impl RecordDraft {
    /// Append a location unless it is blank or already present (exact match).
    pub fn add_location(&mut self, location: &str) -> bool {
        let location = location.trim();
        if location.is_empty() || self.locations.iter().any(|l| l == location) {
            return false;
        }
        self.locations.push(location.to_string());
        true
    }

    /// Driver name and zone must both be non-blank.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.driver_name.trim().is_empty() {
            return Err(LedgerError::MissingField("driver name"));
        }
        if self.zone.trim().is_empty() {
            return Err(LedgerError::MissingField("zone"));
        }
        Ok(())
    }
}

impl From<&DeliveryRecord> for RecordDraft {
    fn from(record: &DeliveryRecord) -> Self {
        Self {
            driver_name: record.driver_name.clone(),
            zone: record.zone.clone(),
            is_substitute: record.is_substitute,
            locations: record.locations.clone(),
            system_packages: record.system_packages,
            off_system_packages: record.off_system_packages,
        }
    }
}

/// Coerce free-form numeric input to a package count.
///
/// Leading decimal digits are read and anything after them ignored; empty,
/// negative or non-numeric input is 0. Oversized values saturate.
pub fn parse_package_count(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}
