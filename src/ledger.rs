// src/ledger.rs

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::db::{BlobStore, StoreError};
use crate::domain::codec::{
    self, decode_collection, encode_collection, CURRENT_RECORDS_KEY, TITULAR_DRIVERS_KEY,
    WORKSHEETS_KEY,
};
use crate::domain::{
    summarize, ActiveView, DeliveryRecord, DriverDirectory, DriverDraft, LedgerError,
    RecordDraft, RecordRepository, SaveOutcome, Summary, TitularDriver, Worksheet,
    WorksheetArchive,
};
use crate::notices::NoticeBoard;

/// The three independently persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Collection {
    CurrentRecords,
    Worksheets,
    TitularDrivers,
}

impl Collection {
    const ALL: [Collection; 3] = [
        Collection::CurrentRecords,
        Collection::Worksheets,
        Collection::TitularDrivers,
    ];

    fn key(self) -> &'static str {
        match self {
            Collection::CurrentRecords => CURRENT_RECORDS_KEY,
            Collection::Worksheets => WORKSHEETS_KEY,
            Collection::TitularDrivers => TITULAR_DRIVERS_KEY,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Collection::CurrentRecords => "the current worksheet",
            Collection::Worksheets => "the worksheet history",
            Collection::TitularDrivers => "the driver list",
        }
    }
}

/// Application state: the live records, the driver directory and the
/// worksheet archive, written back to the blob store after every change.
///
/// In-memory state is authoritative. A failed write leaves a notice for the
/// user and the change stays applied.
pub struct Ledger {
    records: RecordRepository,
    drivers: DriverDirectory,
    archive: WorksheetArchive,
    store: Box<dyn BlobStore>,
    notices: NoticeBoard,
}

impl Ledger {
    /// Populate from the store. Unreadable collections start empty.
    pub fn load(store: Box<dyn BlobStore>) -> Self {
        let mut notices = NoticeBoard::default();

        let records = load_collection::<DeliveryRecord>(
            store.as_ref(),
            Collection::CurrentRecords,
            &mut notices,
        );
        let worksheets =
            load_collection::<Worksheet>(store.as_ref(), Collection::Worksheets, &mut notices);
        let drivers = load_collection::<TitularDriver>(
            store.as_ref(),
            Collection::TitularDrivers,
            &mut notices,
        );

        info!(
            records = records.len(),
            worksheets = worksheets.len(),
            drivers = drivers.len(),
            "ledger loaded"
        );

        Self {
            records: RecordRepository::new(records),
            drivers: DriverDirectory::new(drivers),
            archive: WorksheetArchive::new(worksheets),
            store,
            notices,
        }
    }

    pub fn records(&self) -> &RecordRepository {
        &self.records
    }

    pub fn drivers(&self) -> &DriverDirectory {
        &self.drivers
    }

    pub fn worksheets(&self) -> &[Worksheet] {
        self.archive.list()
    }

    pub fn store(&self) -> &dyn BlobStore {
        self.store.as_ref()
    }

    pub fn notices(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    // =====================
    // Delivery records
    // =====================

    /// Create (`id` absent or unknown) or update a record on the live worksheet.
    pub fn save_record(
        &mut self,
        mut draft: RecordDraft,
        id: Option<&str>,
    ) -> Result<SaveOutcome, LedgerError> {
        self.ensure_editable()?;

        let is_new = !id.is_some_and(|id| self.records.contains(id));
        if is_new && draft.zone.trim().is_empty() {
            if let Some(zone) = self.drivers.zone_of(draft.driver_name.trim()) {
                draft.zone = zone.to_string();
            }
        }
        draft.validate()?;

        let outcome = self.records.save(draft, id);
        info!(id = outcome.id(), "delivery record saved");
        self.persist(&[Collection::CurrentRecords]);
        Ok(outcome)
    }

    /// Returns whether a record was removed; an unknown id is not an error.
    pub fn delete_record(&mut self, id: &str) -> Result<bool, LedgerError> {
        self.ensure_editable()?;

        let removed = self.records.delete(id);
        if removed {
            info!(id, "delivery record deleted");
            self.persist(&[Collection::CurrentRecords]);
        }
        Ok(removed)
    }

    /// Zone hint for a driver name typed into a new record.
    pub fn suggest_zone(&self, driver_name: &str) -> Option<&str> {
        if self.is_read_only() {
            return None;
        }
        self.drivers.zone_of(driver_name.trim())
    }

    // =====================
    // Titular drivers
    // =====================

    pub fn save_driver(
        &mut self,
        draft: DriverDraft,
        id: Option<&str>,
    ) -> Result<SaveOutcome, LedgerError> {
        draft.validate()?;
        let outcome = self.drivers.save(draft, id);
        info!(id = outcome.id(), "titular driver saved");
        self.persist(&[Collection::TitularDrivers]);
        Ok(outcome)
    }

    pub fn delete_driver(&mut self, id: &str) -> bool {
        let removed = self.drivers.delete(id);
        if removed {
            info!(id, "titular driver deleted");
            self.persist(&[Collection::TitularDrivers]);
        }
        removed
    }

    // =====================
    // Worksheets & active view
    // =====================

    /// Snapshot the live records into a new worksheet and empty the live
    /// collection, as one step. Returns the new worksheet id.
    pub fn archive_current(&mut self, now: DateTime<Utc>) -> Result<String, LedgerError> {
        self.ensure_editable()?;
        if self.records.is_empty() {
            return Err(LedgerError::NothingToArchive);
        }

        let snapshot = self.records.list().to_vec();
        let count = snapshot.len();
        let id = self.archive.archive(snapshot, now)?.id.clone();
        self.records.clear();

        info!(id = %id, records = count, "worksheet archived");
        self.persist(&[Collection::Worksheets, Collection::CurrentRecords]);
        Ok(id)
    }

    pub fn select_view(&mut self, view: ActiveView) {
        self.archive.select(view);
    }

    pub fn active_view(&self) -> &ActiveView {
        self.archive.active()
    }

    pub fn is_read_only(&self) -> bool {
        self.archive.is_read_only()
    }

    pub fn active_records(&self) -> &[DeliveryRecord] {
        self.archive.resolve_active_records(self.records.list())
    }

    pub fn summary(&self) -> Summary {
        summarize(self.active_records())
    }

    pub fn active_worksheet_date(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.archive.active_date(now)
    }

    // =====================
    // Export / import / wipe
    // =====================

    pub fn export(&self) -> Result<String, serde_json::Error> {
        codec::export_document(
            self.records.list(),
            self.archive.list(),
            self.drivers.list(),
        )
    }

    /// Replace everything with the document's contents, or change nothing.
    pub fn import(&mut self, text: &str) -> Result<(), LedgerError> {
        let doc = codec::parse_document(text)?;

        info!(
            records = doc.current_records.len(),
            worksheets = doc.worksheets.len(),
            drivers = doc.titular_drivers.len(),
            "importing data"
        );

        self.records.replace_all(doc.current_records);
        self.archive.replace_all(doc.worksheets);
        self.drivers.replace_all(doc.titular_drivers);

        self.persist(&Collection::ALL);
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.records.clear();
        self.archive.clear();
        self.drivers.clear();

        for collection in Collection::ALL {
            if let Err(e) = self.store.remove(collection.key()) {
                self.report_write_failure(collection, &e);
            }
        }
        info!("all data cleared");
    }

    fn ensure_editable(&self) -> Result<(), LedgerError> {
        if self.is_read_only() {
            return Err(LedgerError::ReadOnly);
        }
        Ok(())
    }

    fn persist(&mut self, collections: &[Collection]) {
        for &collection in collections {
            let encoded = match collection {
                Collection::CurrentRecords => encode_collection(self.records.list()),
                Collection::Worksheets => encode_collection(self.archive.list()),
                Collection::TitularDrivers => encode_collection(self.drivers.list()),
            };

            let result = encoded
                .map_err(|e| StoreError::Query(format!("encode failed: {e}")))
                .and_then(|text| self.store.set(collection.key(), &text));

            if let Err(e) = result {
                self.report_write_failure(collection, &e);
            }
        }
    }

    fn report_write_failure(&mut self, collection: Collection, err: &StoreError) {
        warn!(key = collection.key(), error = %err, "write-back failed; keeping in-memory state");
        self.notices
            .error(format!("Could not save {}: {err}", collection.label()));
    }
}

fn load_collection<T: DeserializeOwned>(
    store: &dyn BlobStore,
    collection: Collection,
    notices: &mut NoticeBoard,
) -> Vec<T> {
    let key = collection.key();
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "could not read saved data");
            notices.error(format!("Could not load {}: {e}", collection.label()));
            return Vec::new();
        }
    };

    match decode_collection(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!(key, error = %e, "saved data is corrupt; starting empty");
            notices.error(format!(
                "Saved data for {} was unreadable and has been reset.",
                collection.label()
            ));
            Vec::new()
        }
    }
}
