pub mod codec;
pub mod drivers;
pub mod errors;
pub mod ids;
pub mod lenient;
pub mod record;
pub mod records;
pub mod summary;
pub mod worksheets;

pub use codec::ExportDocument;
pub use drivers::{DriverDirectory, DriverDraft, TitularDriver};
pub use errors::LedgerError;
pub use record::{parse_package_count, DeliveryRecord, RecordDraft};
pub use records::{RecordRepository, SaveOutcome};
pub use summary::{summarize, Summary};
pub use worksheets::{ActiveView, Worksheet, WorksheetArchive};
