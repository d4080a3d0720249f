// src/domain/records.rs

use crate::domain::ids::{fresh_id, rekey_unaddressable};
use crate::domain::record::{DeliveryRecord, RecordDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(String),
    Updated(String),
}

impl SaveOutcome {
    pub fn id(&self) -> &str {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// The live (unarchived) delivery records, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct RecordRepository {
    records: Vec<DeliveryRecord>,
}

impl RecordRepository {
    /// Entries without a usable id are given a fresh one.
    pub fn new(mut records: Vec<DeliveryRecord>) -> Self {
        rekey_unaddressable(&mut records);
        Self { records }
    }

    /// Replace the record with `id` in place, or append a new one with a
    /// fresh id when `id` is absent or unknown. No validation happens here.
    pub fn save(&mut self, draft: RecordDraft, id: Option<&str>) -> SaveOutcome {
        if let Some(id) = id {
            if let Some(slot) = self.records.iter_mut().find(|r| r.id == id) {
                *slot = DeliveryRecord::from_draft(id.to_string(), draft);
                return SaveOutcome::Updated(id.to_string());
            }
        }

        let new_id = fresh_id(|candidate| self.contains(candidate));
        self.records
            .push(DeliveryRecord::from_draft(new_id.clone(), draft));
        SaveOutcome::Created(new_id)
    }

    /// Returns false when nothing matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&DeliveryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn list(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn replace_all(&mut self, mut records: Vec<DeliveryRecord>) {
        rekey_unaddressable(&mut records);
        self.records = records;
    }
}
