// src/domain/drivers.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::LedgerError;
use crate::domain::ids::{fresh_id, rekey_unaddressable, Keyed};
use crate::domain::lenient;
use crate::domain::records::SaveOutcome;

/// A regular driver with a default zone, used to suggest the zone of new records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitularDriver {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub zone: String,
}

impl Keyed for TitularDriver {
    fn key_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverDraft {
    pub name: String,
    pub zone: String,
}

impl DriverDraft {
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::MissingField("name"));
        }
        if self.zone.trim().is_empty() {
            return Err(LedgerError::MissingField("zone"));
        }
        Ok(())
    }
}

/// Titular drivers. Names are not unique and nothing references these
/// entries by id, so deleting one never touches delivery records.
#[derive(Debug, Default, Clone)]
pub struct DriverDirectory {
    drivers: Vec<TitularDriver>,
}

impl DriverDirectory {
    pub fn new(mut drivers: Vec<TitularDriver>) -> Self {
        rekey_unaddressable(&mut drivers);
        Self { drivers }
    }

    pub fn save(&mut self, draft: DriverDraft, id: Option<&str>) -> SaveOutcome {
        if let Some(id) = id {
            if let Some(slot) = self.drivers.iter_mut().find(|d| d.id == id) {
                slot.name = draft.name;
                slot.zone = draft.zone;
                return SaveOutcome::Updated(id.to_string());
            }
        }

        let new_id = fresh_id(|candidate| self.get(candidate).is_some());
        self.drivers.push(TitularDriver {
            id: new_id.clone(),
            name: draft.name,
            zone: draft.zone,
        });
        SaveOutcome::Created(new_id)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.drivers.len();
        self.drivers.retain(|d| d.id != id);
        self.drivers.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&TitularDriver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn list(&self) -> &[TitularDriver] {
        &self.drivers
    }

    pub fn clear(&mut self) {
        self.drivers.clear();
    }

    pub fn replace_all(&mut self, mut drivers: Vec<TitularDriver>) {
        rekey_unaddressable(&mut drivers);
        self.drivers = drivers;
    }

    /// name -> zone; a later entry with the same name overwrites an earlier one.
    pub fn zone_map(&self) -> HashMap<&str, &str> {
        self.drivers.iter().fold(HashMap::new(), |mut acc, d| {
            acc.insert(d.name.as_str(), d.zone.as_str());
            acc
        })
    }

    /// Exact-name lookup with the same last-wins rule as `zone_map`.
    pub fn zone_of(&self, name: &str) -> Option<&str> {
        self.drivers
            .iter()
            .rev()
            .find(|d| d.name == name)
            .map(|d| d.zone.as_str())
    }
}
