// src/domain/worksheets.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::LedgerError;
use crate::domain::ids::{fresh_id, rekey_unaddressable, Keyed};
use crate::domain::lenient;
use crate::domain::record::DeliveryRecord;

pub const CURRENT_VIEW: &str = "current";

/// A dated, immutable copy of the records that were current when it was archived.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Worksheet {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::date")]
    pub date: DateTime<Utc>,
    #[serde(deserialize_with = "lenient::entries")]
    pub records: Vec<DeliveryRecord>,
}

impl Keyed for Worksheet {
    fn key_mut(&mut self) -> &mut String {
        &mut self.id
    }
}

/// Which records are on display: the live collection or one archived worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Current,
    Worksheet(String),
}

impl ActiveView {
    pub fn from_param(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == CURRENT_VIEW {
            ActiveView::Current
        } else {
            ActiveView::Worksheet(value.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            ActiveView::Current => CURRENT_VIEW,
            ActiveView::Worksheet(id) => id,
        }
    }
}

/// Archived worksheets, newest first, plus the active-view selector.
#[derive(Debug, Default, Clone)]
pub struct WorksheetArchive {
    worksheets: Vec<Worksheet>,
    active: ActiveView,
}

impl WorksheetArchive {
    pub fn new(mut worksheets: Vec<Worksheet>) -> Self {
        rekey_unaddressable(&mut worksheets);
        Self {
            worksheets,
            active: ActiveView::Current,
        }
    }

    /// Prepend a snapshot of `records`. An empty collection is refused.
    pub fn archive(
        &mut self,
        records: Vec<DeliveryRecord>,
        now: DateTime<Utc>,
    ) -> Result<&Worksheet, LedgerError> {
        if records.is_empty() {
            return Err(LedgerError::NothingToArchive);
        }
        let id = fresh_id(|candidate| self.find(candidate).is_some());
        self.worksheets.insert(
            0,
            Worksheet {
                id,
                date: now,
                records,
            },
        );
        Ok(&self.worksheets[0])
    }

    pub fn select(&mut self, view: ActiveView) {
        self.active = view;
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    pub fn is_read_only(&self) -> bool {
        self.active != ActiveView::Current
    }

    /// The live records for the current view, the frozen ones for a known
    /// worksheet, and nothing at all for an id that no longer resolves.
    pub fn resolve_active_records<'a>(
        &'a self,
        live: &'a [DeliveryRecord],
    ) -> &'a [DeliveryRecord] {
        match &self.active {
            ActiveView::Current => live,
            ActiveView::Worksheet(id) => self
                .find(id)
                .map(|ws| ws.records.as_slice())
                .unwrap_or(&[]),
        }
    }

    /// Date shown for the active view: the archive date, or `now` when live.
    pub fn active_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match &self.active {
            ActiveView::Current => now,
            ActiveView::Worksheet(id) => self.find(id).map(|ws| ws.date).unwrap_or(now),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.id == id)
    }

    pub fn list(&self) -> &[Worksheet] {
        &self.worksheets
    }

    pub fn clear(&mut self) {
        self.worksheets.clear();
        self.active = ActiveView::Current;
    }

    pub fn replace_all(&mut self, mut worksheets: Vec<Worksheet>) {
        rekey_unaddressable(&mut worksheets);
        self.worksheets = worksheets;
        self.active = ActiveView::Current;
    }
}
