// src/domain/codec.rs

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::drivers::TitularDriver;
use crate::domain::errors::LedgerError;
use crate::domain::lenient::decode_entries;
use crate::domain::record::DeliveryRecord;
use crate::domain::worksheets::Worksheet;

pub const CURRENT_RECORDS_KEY: &str = "currentRecords";
pub const WORKSHEETS_KEY: &str = "worksheets";
pub const TITULAR_DRIVERS_KEY: &str = "titularDrivers";

/// The complete application data, as written to a backup file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub current_records: Vec<DeliveryRecord>,
    pub worksheets: Vec<Worksheet>,
    pub titular_drivers: Vec<TitularDriver>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportView<'a> {
    current_records: &'a [DeliveryRecord],
    worksheets: &'a [Worksheet],
    titular_drivers: &'a [TitularDriver],
}

pub fn export_document(
    current_records: &[DeliveryRecord],
    worksheets: &[Worksheet],
    titular_drivers: &[TitularDriver],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ExportView {
        current_records,
        worksheets,
        titular_drivers,
    })
}

/// Parse a backup file. The three top-level sequences must all be present
/// and be arrays; anything else rejects the whole document. Entries are not
/// validated beyond that: fields of the wrong type take fallback values and
/// elements that are not objects are skipped.
pub fn parse_document(text: &str) -> Result<ExportDocument, LedgerError> {
    let root: Value = serde_json::from_str(text)
        .map_err(|e| LedgerError::InvalidImport(format!("not valid JSON ({e})")))?;

    let Value::Object(mut fields) = root else {
        return Err(LedgerError::InvalidImport(
            "expected a JSON object at the top level".into(),
        ));
    };

    let mut take = |key: &str| match fields.remove(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(LedgerError::InvalidImport(format!("'{key}' must be a list"))),
        None => Err(LedgerError::InvalidImport(format!("'{key}' is missing"))),
    };
    let current_records = take(CURRENT_RECORDS_KEY)?;
    let worksheets = take(WORKSHEETS_KEY)?;
    let titular_drivers = take(TITULAR_DRIVERS_KEY)?;

    Ok(ExportDocument {
        current_records: decode_entries(current_records),
        worksheets: decode_entries(worksheets),
        titular_drivers: decode_entries(titular_drivers),
    })
}

/// Decode one persisted collection. Only a non-array payload is an error.
pub fn decode_collection<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, serde_json::Error> {
    let items: Vec<Value> = serde_json::from_str(text)?;
    Ok(decode_entries(items))
}

pub fn encode_collection<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}
