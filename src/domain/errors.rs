use thiserror::Error;

/// Refusals raised by ledger operations. None of these are fatal: they are
/// reported to the user and leave state untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("there are no current records to archive")]
    NothingToArchive,
    #[error("an archived worksheet is selected; it is read-only")]
    ReadOnly,
    #[error("the import file is invalid or corrupt: {0}")]
    InvalidImport(String),
}
